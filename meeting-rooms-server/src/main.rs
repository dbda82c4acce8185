use crate::commandline::Commandline;
use crate::error::MeetingRoomsError;
use clap::Parser;

mod commandline;
mod configuration;
mod context;
mod database;
mod error;
mod room;
mod scope;
mod server;

#[tokio::main]
async fn main() -> Result<(), MeetingRoomsError> {
	Commandline::parse().run().await
}
