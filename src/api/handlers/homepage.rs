//! Handlers for the root page and unsupported methods.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_host::ClientHost;

/// Serves the homepage.
///
/// # Endpoint
///
/// `GET /`
///
/// Redirects with `302 Found` to the configured main page, or returns the
/// built-in `hello, world` text when none is configured.
pub async fn homepage_handler(
    State(state): State<AppState>,
    client: ClientHost,
    method: Method,
    uri: Uri,
) -> Response {
    info!(client = %client, %method, %uri, "Homepage");

    match state.main_page.as_deref() {
        Some(page) => (StatusCode::FOUND, [(header::LOCATION, page.to_string())]).into_response(),
        None => "hello, world\n".into_response(),
    }
}

/// Rejects any method other than GET and POST.
pub async fn method_not_allowed_handler(client: ClientHost, method: Method, uri: Uri) -> AppError {
    warn!(client = %client, %method, %uri, "Method not allowed");
    AppError::method_not_allowed("Method not allowed")
}
