//! Credential management tool for the shortener.
//!
//! Creates, checks, updates and deletes the accounts that `shorten --auth`
//! accepts. Passwords are read from the terminal without echo.
//!
//! # Usage
//!
//! ```bash
//! shortenpw urls.db create alice
//! shortenpw urls.db check alice
//! shortenpw urls.db update alice
//! shortenpw urls.db delete alice
//! ```
//!
//! # Exit Status
//!
//! - `0` on success, including a `check` that reports incorrect credentials
//! - `1` if the user already exists (create), does not exist
//!   (check/update/delete), or any other error occurs

use shorten::application::services::AuthService;
use shorten::error::ShortenError;
use shorten::infrastructure::persistence::{SqliteCredentialRepository, connect, init_schema};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::*;
use dialoguer::Password;
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for managing shortener credentials.
#[derive(Parser)]
#[command(name = "shortenpw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database
    database: String,

    /// Action to perform
    #[arg(value_enum)]
    action: Action,

    /// Account username
    username: String,
}

/// Credential lifecycle actions.
#[derive(Clone, Copy, ValueEnum)]
enum Action {
    /// Create a new user
    Create,
    /// Check a user's password
    Check,
    /// Replace a user's password
    Update,
    /// Delete a user
    Delete,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("❌ {e:#}").red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let pool = connect(&cli.database, 1)
        .await
        .context("Error opening database")?;
    init_schema(&pool)
        .await
        .context("Error initializing database")?;

    let repo = Arc::new(SqliteCredentialRepository::new(Arc::new(pool)));
    let service = AuthService::new(repo);

    match cli.action {
        Action::Create => create_user(&service, &cli.username).await,
        Action::Check => check_user(&service, &cli.username).await,
        Action::Update => update_user(&service, &cli.username).await,
        Action::Delete => delete_user(&service, &cli.username).await,
    }
}

async fn create_user(
    service: &AuthService<SqliteCredentialRepository>,
    username: &str,
) -> Result<()> {
    println!("{}", format!("👤 Create user {username}").bright_blue().bold());

    let password = prompt_password(true)?;

    match service.create_user(username, &password).await {
        Ok(()) => {
            println!("{}", "✅ User created successfully".green().bold());
            Ok(())
        }
        Err(ShortenError::DuplicateUsername) => bail!("User already exists"),
        Err(e) => Err(e).context("Error creating user"),
    }
}

async fn check_user(
    service: &AuthService<SqliteCredentialRepository>,
    username: &str,
) -> Result<()> {
    println!("{}", format!("🔍 Check user {username}").bright_blue().bold());

    let password = prompt_password(false)?;

    match service.check_credentials(username, &password).await {
        Ok(true) => println!("{}", "✅ Credentials are correct".green().bold()),
        Ok(false) => println!("{}", "⚠️  Credentials are incorrect".yellow().bold()),
        Err(ShortenError::NotFound) => bail!("User not found"),
        Err(e) => return Err(e).context("Error checking credentials"),
    }

    Ok(())
}

async fn update_user(
    service: &AuthService<SqliteCredentialRepository>,
    username: &str,
) -> Result<()> {
    println!("{}", format!("🔑 Update user {username}").bright_blue().bold());

    let password = prompt_password(true)?;

    match service.update_credentials(username, &password).await {
        Ok(()) => {
            println!("{}", "✅ Credentials updated successfully".green().bold());
            Ok(())
        }
        Err(ShortenError::NotFound) => bail!("User not found"),
        Err(e) => Err(e).context("Error updating credentials"),
    }
}

async fn delete_user(
    service: &AuthService<SqliteCredentialRepository>,
    username: &str,
) -> Result<()> {
    match service.delete_user(username).await {
        Ok(()) => {
            println!("{}", "✅ User deleted successfully".green().bold());
            Ok(())
        }
        Err(ShortenError::NotFound) => bail!("User not found"),
        Err(e) => Err(e).context("Error deleting user"),
    }
}

/// Reads a password without echo, optionally asking for it twice.
///
/// # Errors
///
/// Fails if the terminal cannot be read or the confirmation differs.
fn prompt_password(confirm: bool) -> Result<String> {
    let password = Password::new()
        .with_prompt("Enter password")
        .interact()
        .context("Error reading password")?;

    if confirm {
        let confirmation = Password::new()
            .with_prompt("Confirm password")
            .interact()
            .context("Error reading password")?;

        if password != confirmation {
            bail!("Passwords do not match");
        }
    }

    Ok(password)
}
