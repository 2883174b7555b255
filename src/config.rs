//! Service configuration from command-line flags and environment variables.
//!
//! Every flag has an environment fallback, and `main` loads a `.env` file
//! first via `dotenvy`.
//!
//! ```bash
//! shorten --listen-port 8080 --url-prefix https://s.example.com/ --code-length 7
//!
//! # or
//! export LISTEN_PORT=8080
//! export URL_PREFIX="https://s.example.com/"
//! shorten
//! ```
//!
//! ## Options
//!
//! - `--listen-port` / `LISTEN_PORT` - TCP port (default: 8080)
//! - `--url-prefix` / `URL_PREFIX` - Prefix for returned short URLs
//!   (default: derived from the port)
//! - `--main-page` / `MAIN_PAGE` - Homepage redirect target (default: none)
//! - `--code-length` / `CODE_LENGTH` - Generated code length (default: 6)
//! - `--sqlite-db` / `SQLITE_DB` - Database path (default: `urls.db`)
//! - `--log-file` / `LOG_FILE` - Access log path (default: `access.log`)
//! - `--log-format` / `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `--auth` / `AUTH` - Require Basic credentials to create codes
//! - `RUST_LOG` - Log filter (default: `info`)

use anyhow::Result;
use clap::Parser;

use crate::utils::url_validator::is_valid_http_url;

/// Prefix the service advertises when none is configured.
pub const DEFAULT_URL_PREFIX: &str = "http://localhost:8080/";

/// Longest code the generator will be asked for.
pub const MAX_CODE_LENGTH: usize = 64;

/// Service configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "shorten")]
#[command(author, version, about = "URL shortener service", long_about = None)]
pub struct Config {
    /// Port to listen for HTTP requests
    #[arg(long, env = "LISTEN_PORT", default_value_t = 8080)]
    pub listen_port: u16,

    /// Prefix to shortened URL, e.g. https://example.com/
    #[arg(long, env = "URL_PREFIX", default_value = DEFAULT_URL_PREFIX)]
    pub url_prefix: String,

    /// URL for main page of shortener; leave blank for default home page
    #[arg(long, env = "MAIN_PAGE", default_value = "")]
    pub main_page: String,

    /// Length of shortened code
    #[arg(long, env = "CODE_LENGTH", default_value_t = 6)]
    pub code_length: usize,

    /// Path to SQLite database for URL storage
    #[arg(long, env = "SQLITE_DB", default_value = "urls.db")]
    pub sqlite_db: String,

    /// Path to access log file
    #[arg(long, env = "LOG_FILE", default_value = "access.log")]
    pub log_file: String,

    /// Log output format: text or json
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: String,

    /// Require HTTP Basic credentials for creating short URLs
    #[arg(long, env = "AUTH")]
    pub auth: bool,
}

impl Config {
    /// Re-derives the URL prefix from the port when it was left at the
    /// default or blank.
    pub fn resolve_url_prefix(&mut self) {
        if self.url_prefix.is_empty() || self.url_prefix == DEFAULT_URL_PREFIX {
            self.url_prefix = if self.listen_port == 80 {
                "http://localhost/".to_string()
            } else {
                format!("http://localhost:{}/", self.listen_port)
            };
        }
    }

    /// The homepage redirect target, if one is configured.
    pub fn main_page(&self) -> Option<&str> {
        Some(self.main_page.as_str()).filter(|page| !page.is_empty())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_port` is 0
    /// - `code_length` is outside `1..=64`
    /// - `log_format` is not `text` or `json`
    /// - `main_page` is set but not an absolute http/https URL
    /// - `url_prefix` is empty
    pub fn validate(&self) -> Result<()> {
        if self.listen_port == 0 {
            anyhow::bail!("LISTEN_PORT must be greater than 0");
        }

        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH must be between 1 and {}, got {}",
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(page) = self.main_page()
            && !is_valid_http_url(page)
        {
            anyhow::bail!("MAIN_PAGE must be an http or https URL, got '{}'", page);
        }

        if self.url_prefix.is_empty() {
            anyhow::bail!("URL_PREFIX must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen port: {}", self.listen_port);
        tracing::info!("  URL prefix: {}", self.url_prefix);
        tracing::info!("  Main page: {}", self.main_page().unwrap_or("(built-in)"));
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Database: {}", self.sqlite_db);
        tracing::info!("  Log file: {}", self.log_file);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Auth: {}", if self.auth { "enabled" } else { "disabled" });
    }
}

/// Parses, resolves and validates configuration from the process arguments.
///
/// # Errors
///
/// Returns an error if validation fails. Argument syntax errors exit the
/// process through clap.
///
/// # Note
///
/// Environment variables should be loaded beforehand
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load() -> Result<Config> {
    let mut config = Config::parse();
    config.resolve_url_prefix();
    config.validate()?;
    Ok(config)
}
