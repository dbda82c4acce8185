use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::MeetingRoomsError;
use crate::scope::Scope;
use crate::server::run_server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
pub struct Commandline {
	#[clap(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	#[clap(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Subcommand, Default)]
pub enum BaseCommand {
	/// Run the meeting rooms server
	#[default]
	Run,
	/// Print the configuration
	Configuration,
}

impl Commandline {
	pub async fn run(self) -> Result<(), MeetingRoomsError> {
		let configuration = Configuration::from_file(&self.configuration_file_path)?;

		let base_command = self.command.unwrap_or_default();
		match base_command {
			BaseCommand::Run => {
				tracing_subscriber::fmt()
					.with_env_filter(EnvFilter::try_new(&configuration.log_filters)?)
					.init();

				let application_context = ApplicationContext::new(configuration).await?;
				info!(
					"Starting server. Rooms are served at 'http://{}/rooms'.",
					application_context.configuration.address
				);
				tokio::spawn(shutdown_on_ctrl_c(application_context.shutdown.clone()));
				run_server(application_context).await?;
			}
			BaseCommand::Configuration => println!("{configuration:#?}"),
		}
		Ok(())
	}
}

async fn shutdown_on_ctrl_c(shutdown: Scope) {
	match tokio::signal::ctrl_c().await {
		Ok(()) => {
			info!("Received Ctrl-C, shutting down.");
			shutdown.cancel();
		}
		Err(error) => error!("Failed to listen for Ctrl-C, graceful shutdown is unavailable: {error}"),
	}
}
