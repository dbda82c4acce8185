pub mod error;
pub mod sqlite;

use crate::database::error::DatabaseError;
use anyhow::anyhow;
use uuid::Uuid;

/// Identifiers are stored in their canonical hyphenated lowercase form, anything that doesn't parse
/// as a UUID can't name a stored room.
pub fn parse_room_id(room_id: &str) -> Result<Uuid, DatabaseError> {
	Uuid::parse_str(room_id)
		.map_err(|error| DatabaseError::NotFound(anyhow!("Room '{room_id}' doesn't exist: {error}")))
}
