use thiserror::Error;

/// The first rule a room payload violates. The messages are sent to clients verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomValidationError {
	#[error("room can't have 0 or less capacity")]
	NonPositiveCapacity,
	#[error("room id can't be empty")]
	EmptyId,
	#[error("room name can't be empty")]
	EmptyName,
	#[error("room office can't be empty")]
	EmptyOffice,
}
