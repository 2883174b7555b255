//! Handlers for short URL creation.

use axum::{
    extract::{Path, State},
    http::{Method, Uri},
};
use tracing::{error, info, warn};

use crate::error::{AppError, ShortenError};
use crate::state::AppState;
use crate::utils::client_host::ClientHost;
use crate::utils::url_validator::is_valid_http_url;

/// Creates a short URL with a generated code.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// The destination URL as plain text. Surrounding whitespace is ignored.
///
/// ```text
/// https://example.com/page
/// ```
///
/// # Response
///
/// The full short URL followed by a newline:
///
/// ```text
/// http://localhost:8080/aZ3kQ9
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not an http/https URL.
/// Returns 500 Internal Server Error if no free code could be allocated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    client: ClientHost,
    method: Method,
    uri: Uri,
    body: String,
) -> Result<String, AppError> {
    create(&state, None, &client, &method, &uri, &body).await
}

/// Creates a short URL under a caller-chosen code.
///
/// # Endpoint
///
/// `POST /{code}`
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or the code is invalid.
/// Returns 409 Conflict if the code is already in use.
pub async fn shorten_custom_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    client: ClientHost,
    method: Method,
    uri: Uri,
    body: String,
) -> Result<String, AppError> {
    create(&state, Some(&code), &client, &method, &uri, &body).await
}

async fn create(
    state: &AppState,
    custom_code: Option<&str>,
    client: &ClientHost,
    method: &Method,
    uri: &Uri,
    body: &str,
) -> Result<String, AppError> {
    let url = body.trim();

    if !is_valid_http_url(url) {
        warn!(client = %client, %method, %uri, "Invalid URL");
        return Err(AppError::bad_request("Invalid URL"));
    }

    match state
        .link_service
        .create_short_link(url, custom_code, &client.0)
        .await
    {
        Ok(code) => {
            let short_url = state.link_service.short_url(&state.url_prefix, &code);
            info!(client = %client, %method, %uri, target = %url, %short_url, "Created");
            Ok(format!("{short_url}\n"))
        }
        Err(e) => {
            log_create_failure(&e, client, method, uri);
            Err(e.into())
        }
    }
}

fn log_create_failure(e: &ShortenError, client: &ClientHost, method: &Method, uri: &Uri) {
    match e {
        ShortenError::InvalidCode => warn!(client = %client, %method, %uri, "Invalid code"),
        ShortenError::CodeConflict => {
            warn!(client = %client, %method, %uri, "Code already in use")
        }
        ShortenError::AllocationExhausted { attempts, last } => error!(
            client = %client,
            %method,
            %uri,
            attempts,
            last_error = last.as_ref().map(|e| e.to_string()).unwrap_or_default(),
            "Could not generate code"
        ),
        other => error!(client = %client, %method, %uri, error = %other, "Create failed"),
    }
}
