use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelstore_cli::cli::{Cli, Command};
use reelstore_cli::commands;
use reelstore_cli::config::DatabaseConfig;
use reelstore_cli::error::{exit, CliError};
use reelstore_db::models::movie::CreateMovie;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    // Diagnostics go to stderr so stdout carries only command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelstore=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Argument parsing ---
    // Malformed invocations never touch the database.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let explicit_help = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            return if explicit_help {
                ExitCode::from(exit::SUCCESS)
            } else {
                ExitCode::from(exit::USAGE)
            };
        }
    };

    let verb = cli.command.verb();
    match run(cli).await {
        Ok(()) => ExitCode::from(exit::SUCCESS),
        Err(err) => {
            tracing::error!(command = verb, error = %err, "command failed");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Connect, bootstrap the schema, and dispatch exactly one command.
async fn run(cli: Cli) -> Result<(), CliError> {
    let config = DatabaseConfig::from_env()?;

    let pool = reelstore_db::create_pool(&config.url, config.max_connections).await?;
    reelstore_db::health_check(&pool).await?;
    reelstore_db::ensure_schema(&pool).await?;

    let result = match cli.command {
        Command::Insert {
            title,
            year,
            genre,
            director,
        } => {
            commands::insert_movie(
                &pool,
                CreateMovie {
                    title,
                    release_year: year,
                    genre,
                    director,
                },
            )
            .await
        }
        Command::Show => commands::show_movies(&pool).await,
        Command::Update {
            customer_id,
            new_email,
        } => commands::update_customer_email(&pool, customer_id, &new_email).await,
        Command::Remove { customer_id } => commands::remove_customer(&pool, customer_id).await,
    };

    pool.close().await;
    result
}
