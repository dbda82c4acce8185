use crate::room::error::RoomValidationError;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A persisted room.
///
/// Missing and `null` fields deserialize to their zero value so that incomplete payloads are
/// reported by [`ExistingRoom::validate`] instead of the JSON decoder.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ExistingRoom {
	#[serde(deserialize_with = "null_as_default")]
	pub id: String,
	#[serde(deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(deserialize_with = "null_as_default")]
	pub capacity: i64,
	#[serde(deserialize_with = "null_as_default")]
	pub office: String,
	#[serde(deserialize_with = "null_as_default")]
	pub stage: i64,
	#[serde(deserialize_with = "null_as_default")]
	pub labels: Vec<String>,
}

/// Payload for creating a room, the identifier is minted by the repository.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NewRoom {
	#[serde(deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(deserialize_with = "null_as_default")]
	pub capacity: i64,
	#[serde(deserialize_with = "null_as_default")]
	pub office: String,
	#[serde(deserialize_with = "null_as_default")]
	pub stage: i64,
	#[serde(deserialize_with = "null_as_default")]
	pub labels: Vec<String>,
}

impl ExistingRoom {
	/// Checks capacity, id, name and office in that order and returns the room unchanged if
	/// all of them hold.
	pub fn validate(self) -> Result<Self, RoomValidationError> {
		validate_capacity(self.capacity)?;
		if self.id.is_empty() {
			return Err(RoomValidationError::EmptyId);
		}
		validate_name(&self.name)?;
		validate_office(&self.office)?;

		Ok(self)
	}
}

impl NewRoom {
	/// Checks capacity, name and office in that order and returns the room unchanged if all of
	/// them hold.
	pub fn validate(self) -> Result<Self, RoomValidationError> {
		validate_capacity(self.capacity)?;
		validate_name(&self.name)?;
		validate_office(&self.office)?;

		Ok(self)
	}

	pub fn into_existing(self, id: Uuid) -> ExistingRoom {
		let Self {
			name,
			capacity,
			office,
			stage,
			labels,
		} = self;

		ExistingRoom {
			id: id.to_string(),
			name,
			capacity,
			office,
			stage,
			labels,
		}
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_capacity(capacity: i64) -> Result<(), RoomValidationError> {
	if capacity < 1 {
		return Err(RoomValidationError::NonPositiveCapacity);
	}
	Ok(())
}

fn validate_name(name: &str) -> Result<(), RoomValidationError> {
	if name.is_empty() {
		return Err(RoomValidationError::EmptyName);
	}
	Ok(())
}

fn validate_office(office: &str) -> Result<(), RoomValidationError> {
	if office.is_empty() {
		return Err(RoomValidationError::EmptyOffice);
	}
	Ok(())
}
