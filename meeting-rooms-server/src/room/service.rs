use crate::database::error::DatabaseError;
use crate::room::model::{ExistingRoom, NewRoom};
use crate::room::repository::RoomRepository;
use crate::scope::Scope;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Entry point of the request layer into room management.
///
/// Expects already validated rooms and hands repository results back unchanged.
#[derive(Clone)]
pub struct RoomService {
	repository: Arc<dyn RoomRepository>,
}

impl RoomService {
	pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
		Self { repository }
	}

	pub async fn list(&self, scope: &Scope) -> Result<Vec<ExistingRoom>, DatabaseError> {
		debug!("Listing rooms.");
		self.repository.list(scope).await
	}

	pub async fn create(&self, scope: &Scope, room: &NewRoom) -> Result<Uuid, DatabaseError> {
		debug!(name = %room.name, office = %room.office, "Creating room.");
		self.repository.create(scope, room).await
	}

	pub async fn update(&self, scope: &Scope, room: &ExistingRoom) -> Result<(), DatabaseError> {
		debug!(id = %room.id, name = %room.name, "Updating room.");
		self.repository.update(scope, room).await
	}

	pub async fn remove(&self, scope: &Scope, room_id: Uuid) -> Result<(), DatabaseError> {
		debug!(id = %room_id, "Removing room.");
		self.repository.remove(scope, room_id).await
	}
}
