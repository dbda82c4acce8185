use crate::context::ApplicationContext;
use crate::scope::Scope;
use crate::server::rest_api::error::ApiError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Per request child of the shutdown scope, bounded by the configured request timeout.
pub struct RequestScope {
	scope: Scope,
	timeout: Duration,
}

impl RequestScope {
	pub fn new(scope: Scope, timeout: Duration) -> Self {
		Self { scope, timeout }
	}

	/// Runs `work` as a separate task and races it against cancellation of the scope and the
	/// request timeout.
	///
	/// `work` receives the request scope, so cancellation reaches all the way down into the
	/// store call. The scope is also cancelled when the returned future is dropped, e.g. because
	/// the client went away, so spawned work never outlives its request.
	pub async fn run<Work, Output>(self, work: impl FnOnce(Scope) -> Work) -> Result<Output, ApiError>
	where
		Work: Future<Output = Result<Output, ApiError>> + Send + 'static,
		Output: Send + 'static,
	{
		let Self { scope, timeout } = self;
		let _cancel_on_drop = scope.cancel_on_drop();

		let task = tokio::spawn(work(scope.clone()));
		let abort_handle = task.abort_handle();

		tokio::select! {
			biased;
			() = scope.cancelled() => {
				abort_handle.abort();
				Err(ApiError::Cancelled)
			}
			() = tokio::time::sleep(timeout) => {
				warn!("Request exceeded the timeout of {timeout:?}.");
				scope.cancel();
				abort_handle.abort();
				Err(ApiError::Cancelled)
			}
			joined = task => joined?,
		}
	}
}

impl FromRequestParts<ApplicationContext> for RequestScope {
	type Rejection = Infallible;

	async fn from_request_parts(_parts: &mut Parts, context: &ApplicationContext) -> Result<Self, Self::Rejection> {
		Ok(Self::new(
			context.shutdown.child(),
			context.configuration.request_timeout,
		))
	}
}
