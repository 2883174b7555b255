//! Error types for the core engine and the HTTP boundary.
//!
//! [`ShortenError`] is the typed failure returned by repositories and
//! services. It never touches HTTP. [`AppError`] is what handlers return;
//! it maps each core failure onto a status code and a short plain-text body.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

/// Failures produced by code allocation, lookup and credential management.
///
/// Every failure is scoped to the single in-flight operation.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    /// A caller-supplied code does not match `^[-_0-9A-Za-z]+$`.
    #[error("invalid code")]
    InvalidCode,

    /// A caller-supplied code is already bound to another URL.
    #[error("code already in use")]
    CodeConflict,

    /// Every generated candidate collided or failed to persist.
    #[error("could not allocate a code after {attempts} attempts")]
    AllocationExhausted {
        attempts: usize,
        #[source]
        last: Option<Box<ShortenError>>,
    },

    #[error("not found")]
    NotFound,

    /// The storage engine rejected an insert on the `code` primary key.
    #[error("code already exists")]
    DuplicateCode,

    /// The storage engine rejected an insert on the `username` primary key.
    #[error("username already in use")]
    DuplicateUsername,

    #[error("random source failure: {0}")]
    RandomSource(#[from] getrandom::Error),

    /// A stored salt or hash is not valid base64.
    #[error("stored credential is corrupt: {0}")]
    CorruptCredential(#[from] base64::DecodeError),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Maps a failed insert to `duplicate` when the storage engine reports a
/// primary-key violation, and to [`ShortenError::Storage`] otherwise.
pub(crate) fn map_unique_violation(e: sqlx::Error, duplicate: ShortenError) -> ShortenError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return duplicate;
    }

    ShortenError::Storage(e)
}

/// HTTP-facing error returned by handlers and middleware.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    MethodNotAllowed { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Status code this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        match e {
            ShortenError::InvalidCode => AppError::bad_request("Invalid code"),
            ShortenError::CodeConflict | ShortenError::DuplicateCode => {
                AppError::conflict("Code already in use")
            }
            ShortenError::NotFound => AppError::not_found("Not found"),
            _ => AppError::internal("Internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let unauthorized = matches!(self, AppError::Unauthorized { .. });

        let mut response = (status, format!("{}\n", self.message())).into_response();
        if unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(r#"Basic realm="shorten""#),
            );
        }

        response
    }
}
