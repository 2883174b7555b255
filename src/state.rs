//! Shared state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::{SqliteCredentialRepository, SqliteUrlRepository};

/// Application state shared across requests.
///
/// Holds no per-request data and no locks; storage concurrency is left to
/// the database.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteUrlRepository>>,
    /// Present only when creation requires authentication.
    pub auth_service: Option<Arc<AuthService<SqliteCredentialRepository>>>,
    pub url_prefix: Arc<str>,
    pub main_page: Option<Arc<str>>,
}

impl AppState {
    /// Wires repositories and services over a single shared pool.
    pub fn new(
        pool: Arc<SqlitePool>,
        code_length: usize,
        url_prefix: &str,
        main_page: Option<&str>,
        require_auth: bool,
    ) -> Self {
        let url_repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
        let link_service = Arc::new(LinkService::new(url_repository, code_length));

        let auth_service = require_auth.then(|| {
            let credential_repository = Arc::new(SqliteCredentialRepository::new(pool));
            Arc::new(AuthService::new(credential_repository))
        });

        Self {
            link_service,
            auth_service,
            url_prefix: Arc::from(url_prefix),
            main_page: main_page.map(Arc::from),
        }
    }
}
