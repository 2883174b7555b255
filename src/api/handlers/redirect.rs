//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use crate::error::{AppError, ShortenError};
use crate::state::AppState;
use crate::utils::client_host::ClientHost;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The code is the whole path after the leading slash. Every successful
/// lookup counts one hit before the redirect is sent.
///
/// # Errors
///
/// Returns 404 Not Found if the code is not bound.
/// Returns 500 Internal Server Error on storage failures.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    client: ClientHost,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    match state.link_service.lookup(&code).await {
        Ok(url) => {
            info!(client = %client, %method, %uri, target = %url, "Redirect");
            Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
        }
        Err(ShortenError::NotFound) => {
            warn!(client = %client, %method, %uri, "Not found");
            Err(AppError::not_found("Not found"))
        }
        Err(e) => {
            error!(client = %client, %method, %uri, error = %e, "Lookup failed");
            Err(e.into())
        }
    }
}
