use crate::database::error::{DatabaseError, IntoDatabaseResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqlitePool, migrate};
use std::str::FromStr;

mod room;

pub use room::SqliteRoomRepository;

/// Connection pool shared by all repositories for the lifetime of the process.
#[derive(Clone)]
pub struct SqliteDatabase {
	pool: SqlitePool,
}

impl SqliteDatabase {
	pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DatabaseError> {
		let options = SqliteConnectOptions::from_str(database_url)
			.connection_error("Invalid database URL")?
			.create_if_missing(true);
		let pool = SqlitePoolOptions::new()
			.max_connections(max_connections)
			.connect_with(options)
			.await
			.connection_error("Failed to connect to database")?;

		Ok(Self { pool })
	}

	pub async fn migrate(&self) -> Result<(), DatabaseError> {
		migrate!().run(&self.pool).await.map_err(Into::into)
	}

	pub fn pool(&self) -> &SqlitePool {
		&self.pool
	}
}
