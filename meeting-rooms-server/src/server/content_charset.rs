use axum::extract::Request;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::info;

/// Charsets accepted in a request's `Content-Type`, lowercase. The empty charset covers requests
/// that don't declare one.
const ALLOWED_CHARSETS: [&str; 3] = ["utf-8", "latin-1", ""];

/// Answers `415 Unsupported Media Type` for requests declaring any other charset.
pub async fn middleware(request: Request, next: Next) -> Response {
	let content_type = request
		.headers()
		.get(CONTENT_TYPE)
		.map(|value| String::from_utf8_lossy(value.as_bytes()).to_lowercase())
		.unwrap_or_default();

	let charset = declared_charset(&content_type);
	if !ALLOWED_CHARSETS.contains(&charset) {
		info!("Rejecting request with unsupported charset '{charset}'.");
		return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
	}

	next.run(request).await
}

fn declared_charset(content_type: &str) -> &str {
	let (_, parameters) = split(content_type, ";");
	let (_, charset) = split(parameters, "charset=");
	let (charset, _) = split(charset, ";");
	charset
}

fn split<'text>(text: &'text str, separator: &str) -> (&'text str, &'text str) {
	match text.split_once(separator) {
		Some((head, tail)) => (head.trim(), tail.trim()),
		None => (text.trim(), ""),
	}
}
