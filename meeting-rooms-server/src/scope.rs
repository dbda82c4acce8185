use std::future::Future;
use thiserror::Error;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Cancellable execution context threaded through service and repository calls.
///
/// Scopes form a tree: cancelling a scope cancels all of its children, but never its parent.
/// The server owns a root scope that is cancelled on shutdown, every request runs in a child of it.
#[derive(Clone, Debug, Default)]
pub struct Scope {
	token: CancellationToken,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Scope was cancelled.")]
pub struct Cancelled;

impl Scope {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn child(&self) -> Self {
		Self {
			token: self.token.child_token(),
		}
	}

	pub fn cancel(&self) {
		self.token.cancel();
	}

	pub fn is_cancelled(&self) -> bool {
		self.token.is_cancelled()
	}

	pub async fn cancelled(&self) {
		self.token.cancelled().await;
	}

	/// Cancels this scope once the returned guard is dropped.
	pub fn cancel_on_drop(&self) -> DropGuard {
		self.token.clone().drop_guard()
	}

	/// Drives `future` to completion unless the scope is cancelled first, in which case the
	/// future is dropped without being polled again.
	pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, Cancelled> {
		tokio::select! {
			biased;
			() = self.token.cancelled() => Err(Cancelled),
			output = future => Ok(output),
		}
	}
}
