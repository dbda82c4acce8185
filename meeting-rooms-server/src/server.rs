use crate::context::ApplicationContext;
use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::get;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod content_charset;
pub mod rest_api;

/// How long in-flight connections may take to finish after shutdown was requested.
const GRACEFUL_SHUTDOWN_PERIOD: Duration = Duration::from_secs(10);

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let address = application_context.configuration.address;
	let shutdown = application_context.shutdown.clone();

	let handle = axum_server::Handle::new();
	tokio::spawn({
		let handle = handle.clone();
		async move {
			shutdown.cancelled().await;
			info!("Stopping to accept connections.");
			handle.graceful_shutdown(Some(GRACEFUL_SHUTDOWN_PERIOD));
		}
	});

	axum_server::Server::bind(address)
		.handle(handle)
		.serve(create_router(application_context).into_make_service())
		.await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	Router::new()
		.route("/liveness", get(heartbeat))
		.route("/readiness", get(heartbeat))
		.merge(rest_api::rooms().layer(from_fn(content_charset::middleware)))
		.layer(TraceLayer::new_for_http())
		.layer(cors())
		.with_state(application_context)
}

async fn heartbeat() -> &'static str {
	"."
}

fn cors() -> CorsLayer {
	CorsLayer::new()
		.allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
			let origin = origin.as_bytes();
			origin.starts_with(b"http://") || origin.starts_with(b"https://")
		}))
		.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
		.allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName::from_static("x-csrf-token")])
		.allow_credentials(false)
		.max_age(Duration::from_secs(300))
}
