use crate::configuration::Configuration;
use crate::database::error::DatabaseError;
use crate::database::sqlite::{SqliteDatabase, SqliteRoomRepository};
use crate::room::service::RoomService;
use crate::scope::Scope;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub room_service: RoomService,
	/// Root of all request scopes, cancelled when the server shuts down.
	pub shutdown: Scope,
}

impl ApplicationContext {
	pub async fn new(configuration: Configuration) -> Result<ApplicationContext, DatabaseError> {
		let database =
			SqliteDatabase::connect(&configuration.database_url, configuration.max_database_connections).await?;
		database.migrate().await?;

		let repository = Arc::new(SqliteRoomRepository::new(&database));

		Ok(Self {
			configuration,
			room_service: RoomService::new(repository),
			shutdown: Scope::new(),
		})
	}
}
