use crate::context::ApplicationContext;
use crate::room::model::{ExistingRoom, NewRoom};
use crate::room::service::RoomService;
use crate::server::rest_api::error::ApiError;
use crate::server::rest_api::models::CreationResponse;
use crate::server::rest_api::request_scope::RequestScope;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use uuid::Uuid;

pub mod error;
pub mod models;
pub mod request_scope;

pub fn rooms() -> Router<ApplicationContext> {
	Router::new()
		.route("/rooms", get(list_rooms))
		.route("/rooms/", get(list_rooms))
		.route("/rooms/create", post(create_room).delete(|| reject_room_id("create")))
		.route("/rooms/update", post(update_room).delete(|| reject_room_id("update")))
		.route("/rooms/{id}", delete(remove_room))
}

async fn list_rooms(
	State(room_service): State<RoomService>,
	request_scope: RequestScope,
) -> Result<Json<Vec<ExistingRoom>>, ApiError> {
	request_scope
		.run(move |scope| async move {
			let rooms = room_service.list(&scope).await?;
			Ok(Json(rooms))
		})
		.await
}

async fn create_room(
	State(room_service): State<RoomService>,
	request_scope: RequestScope,
	body: Bytes,
) -> Result<Json<CreationResponse>, ApiError> {
	request_scope
		.run(move |scope| async move {
			let room = decode::<NewRoom>(&body)?.validate()?;
			let id = room_service.create(&scope, &room).await?;
			Ok(Json(CreationResponse { id }))
		})
		.await
}

async fn update_room(
	State(room_service): State<RoomService>,
	request_scope: RequestScope,
	body: Bytes,
) -> Result<(), ApiError> {
	request_scope
		.run(move |scope| async move {
			let room = decode::<ExistingRoom>(&body)?.validate()?;
			room_service.update(&scope, &room).await?;
			Ok(())
		})
		.await
}

async fn remove_room(
	State(room_service): State<RoomService>,
	request_scope: RequestScope,
	Path(id): Path<String>,
) -> Result<(), ApiError> {
	let room_id = Uuid::parse_str(&id).map_err(|_| ApiError::MalformedRoomId(id))?;

	request_scope
		.run(move |scope| async move {
			room_service.remove(&scope, room_id).await?;
			Ok(())
		})
		.await
}

/// Deleting `/rooms/create` or `/rooms/update` names a room by an id that is never a UUID.
async fn reject_room_id(id: &'static str) -> ApiError {
	ApiError::MalformedRoomId(id.to_owned())
}

/// Payloads are decoded irrespective of their `Content-Type`.
fn decode<Payload: DeserializeOwned>(body: &[u8]) -> Result<Payload, ApiError> {
	serde_json::from_slice(body).map_err(ApiError::Decode)
}
