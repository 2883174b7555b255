//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Homepage (built-in text or redirect to the main page)
//! - `POST /`        - Create a short URL with a generated code
//! - `GET  /{code}`  - Short link redirect
//! - `POST /{code}`  - Create a short URL with a custom code
//!
//! Any other method answers `405 Method not allowed`. HEAD is routed there
//! explicitly, since a GET route would otherwise serve it and count a hit.
//!
//! # Middleware
//!
//! - **Tracing** - Request spans with latency
//! - **Authentication** - Basic credentials on POST when enabled

use crate::api::handlers::{
    homepage_handler, method_not_allowed_handler, redirect_handler, shorten_custom_handler,
    shorten_handler,
};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// The code route is a catch-all, so the code is everything after the
/// leading slash, slashes included.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(homepage_handler)
                .head(method_not_allowed_handler)
                .post(shorten_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/{*code}",
            get(redirect_handler)
                .head(method_not_allowed_handler)
                .post(shorten_custom_handler)
                .fallback(method_not_allowed_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state)
        .layer(tracing::layer())
}
