//! Basic authentication middleware for code creation.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use tracing::{error, warn};

use crate::error::{AppError, ShortenError};
use crate::state::AppState;

/// Requires valid HTTP Basic credentials on POST requests.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// Passes every request through untouched when authentication is disabled
/// (no [`crate::application::services::AuthService`] in the state) and for
/// any method other than POST.
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge if
/// the header is missing, malformed, names an unknown user, or carries a
/// wrong password.
///
/// Returns `500 Internal Server Error` if the credential store fails.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(auth_service) = st.auth_service.as_ref() else {
        return Ok(next.run(req).await);
    };

    if req.method() != Method::POST {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            warn!(uri = %parts.uri, "Missing or malformed credentials");
            AppError::unauthorized("Unauthorized")
        })?;

    let password = password.unwrap_or_default();

    match auth_service.check_credentials(&username, &password).await {
        Ok(true) => {}
        Ok(false) | Err(ShortenError::NotFound) => {
            warn!(uri = %parts.uri, %username, "Rejected credentials");
            return Err(AppError::unauthorized("Unauthorized"));
        }
        Err(e) => {
            error!(uri = %parts.uri, error = %e, "Credential check failed");
            return Err(AppError::internal("Internal server error"));
        }
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
