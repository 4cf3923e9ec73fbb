//! Operations tooling for the forum database: apply migrations and report
//! row counts.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use forum_backend::config::DatabaseSettings;
use forum_backend::domain::UserQueryService;
use forum_backend::domain::ports::UserQuery;
use forum_backend::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselFavoriteRepository, DieselFollowshipRepository,
    DieselUserRepository, run_migrations,
};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `forum-db` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "forum-db",
    about = "Manage the forum database schema. Connection settings come from FORUM_DB_* variables.",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Apply pending schema migrations.
    Migrate,
    /// Print the number of registered users.
    Status,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    // Flags belong to the subcommand; settings come from the environment
    // and config files only.
    let settings = DatabaseSettings::load_from_iter([OsString::from("forum-db")])
        .map_err(|error| io::Error::other(format!("load database settings: {error}")))?;

    match args.command {
        Command::Migrate => {
            let applied = run_migrations(&settings.url)
                .map_err(|error| io::Error::other(format!("migrate: {error}")))?;
            info!(applied, "schema up to date");
            Ok(())
        }
        Command::Status => {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
            runtime.block_on(report_status(&settings))
        }
    }
}

async fn report_status(settings: &DatabaseSettings) -> io::Result<()> {
    let pool = DbPool::new(settings.to_pool_config())
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let query = UserQueryService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselCommentRepository::new(pool.clone())),
        Arc::new(DieselFavoriteRepository::new(pool.clone())),
        Arc::new(DieselFollowshipRepository::new(pool)),
    );
    let users = query
        .total_user_count()
        .await
        .map_err(|error| io::Error::other(format!("count users: {error}")))?;

    println!("users={users}");
    Ok(())
}
