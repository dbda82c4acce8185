use crate::database::error::DatabaseError;
use crate::database::parse_room_id;
use crate::database::sqlite::SqliteDatabase;
use crate::room::model::{ExistingRoom, NewRoom};
use crate::room::repository::RoomRepository;
use crate::scope::Scope;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool, query, query_as};
use uuid::Uuid;

pub struct SqliteRoomRepository {
	pool: SqlitePool,
}

impl SqliteRoomRepository {
	pub fn new(database: &SqliteDatabase) -> Self {
		Self {
			pool: database.pool().clone(),
		}
	}
}

#[derive(FromRow)]
struct RoomRow {
	id: String,
	name: String,
	capacity: i64,
	office: String,
	stage: i64,
	labels: Json<Vec<String>>,
}

impl From<RoomRow> for ExistingRoom {
	fn from(
		RoomRow {
			id,
			name,
			capacity,
			office,
			stage,
			labels: Json(labels),
		}: RoomRow,
	) -> Self {
		Self {
			id,
			name,
			capacity,
			office,
			stage,
			labels,
		}
	}
}

#[async_trait]
impl RoomRepository for SqliteRoomRepository {
	async fn list(&self, scope: &Scope) -> Result<Vec<ExistingRoom>, DatabaseError> {
		let rows = scope
			.run(
				query_as::<_, RoomRow>(
					r"SELECT id, name, capacity, office, stage, labels
					FROM meeting_rooms
					ORDER BY rowid ASC",
				)
				.fetch_all(&self.pool),
			)
			.await??;

		Ok(rows.into_iter().map(ExistingRoom::from).collect())
	}

	async fn create(&self, scope: &Scope, room: &NewRoom) -> Result<Uuid, DatabaseError> {
		let room_id = Uuid::new_v4();
		scope
			.run(
				query(
					r"INSERT INTO meeting_rooms(id, name, capacity, office, stage, labels)
					VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
				)
				.bind(room_id.to_string())
				.bind(&room.name)
				.bind(room.capacity)
				.bind(&room.office)
				.bind(room.stage)
				.bind(Json(&room.labels))
				.execute(&self.pool),
			)
			.await??;

		Ok(room_id)
	}

	async fn update(&self, scope: &Scope, room: &ExistingRoom) -> Result<(), DatabaseError> {
		let room_id = parse_room_id(&room.id)?;
		let result = scope
			.run(
				query(
					r"UPDATE meeting_rooms
					SET
						name = ?1,
						capacity = ?2,
						office = ?3,
						stage = ?4,
						labels = ?5
					WHERE id = ?6",
				)
				.bind(&room.name)
				.bind(room.capacity)
				.bind(&room.office)
				.bind(room.stage)
				.bind(Json(&room.labels))
				.bind(room_id.to_string())
				.execute(&self.pool),
			)
			.await??;

		if result.rows_affected() == 0 {
			return Err(DatabaseError::NotFound(anyhow!("Room '{room_id}' doesn't exist")));
		}
		Ok(())
	}

	async fn remove(&self, scope: &Scope, room_id: Uuid) -> Result<(), DatabaseError> {
		let result = scope
			.run(
				query(r"DELETE FROM meeting_rooms WHERE id = ?1")
					.bind(room_id.to_string())
					.execute(&self.pool),
			)
			.await??;

		if result.rows_affected() == 0 {
			return Err(DatabaseError::NotFound(anyhow!("Room '{room_id}' doesn't exist")));
		}
		Ok(())
	}
}
