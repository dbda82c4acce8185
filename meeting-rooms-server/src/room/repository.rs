use crate::database::error::DatabaseError;
use crate::room::model::{ExistingRoom, NewRoom};
use crate::scope::Scope;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;
use uuid::Uuid;


/// Persistent storage of rooms.
///
/// Every operation is bound to a [`Scope`]; once it is cancelled the pending store call is
/// dropped and [`DatabaseError::Cancelled`] is returned.
#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
	async fn list(&self, scope: &Scope) -> Result<Vec<ExistingRoom>, DatabaseError>;
	/// Persists `room` under a freshly minted identifier and returns that identifier.
	async fn create(&self, scope: &Scope, room: &NewRoom) -> Result<Uuid, DatabaseError>;
	/// Fails with [`DatabaseError::NotFound`] if no room has the given id.
	async fn update(&self, scope: &Scope, room: &ExistingRoom) -> Result<(), DatabaseError>;
	/// Fails with [`DatabaseError::NotFound`] if no room has the given id.
	async fn remove(&self, scope: &Scope, room_id: Uuid) -> Result<(), DatabaseError>;
}

assert_obj_safe!(RoomRepository);
