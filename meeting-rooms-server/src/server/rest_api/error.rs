use crate::database::error::DatabaseError;
use crate::room::error::RoomValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, info, warn};

/// Every way a room request can fail. This is the only place where status codes are chosen.
///
/// Client errors carry a plain text body, server side failures are logged and answered with an
/// empty body so that no store internals leak to the client.
#[derive(Error, Debug)]
pub enum ApiError {
	#[error(transparent)]
	Validation(#[from] RoomValidationError),
	#[error("can't deserialize room: {0}")]
	Decode(serde_json::Error),
	#[error("malformed room id '{0}'")]
	MalformedRoomId(String),
	#[error(transparent)]
	Database(#[from] DatabaseError),
	#[error("Request was cancelled.")]
	Cancelled,
	#[error("Request handling failed: {0}")]
	Internal(#[from] JoinError),
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		use ApiError::*;
		match self {
			Validation(_) | Decode(_) => {
				info!("Bad request: {self}");
				(StatusCode::BAD_REQUEST, self.to_string()).into_response()
			}
			MalformedRoomId(_) => {
				info!("Bad request: {self}");
				StatusCode::BAD_REQUEST.into_response()
			}
			Database(DatabaseError::NotFound(error)) => {
				info!("Room not found: {error}");
				StatusCode::NOT_FOUND.into_response()
			}
			Database(DatabaseError::Cancelled) | Cancelled => {
				warn!("Request was cancelled before it finished.");
				StatusCode::GATEWAY_TIMEOUT.into_response()
			}
			Database(error) => {
				error!("Room operation failed: {error}");
				StatusCode::INTERNAL_SERVER_ERROR.into_response()
			}
			Internal(error) => {
				error!("Room operation failed: {error}");
				StatusCode::INTERNAL_SERVER_ERROR.into_response()
			}
		}
	}
}
