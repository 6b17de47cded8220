use clap::Parser;
use owo_colors::{OwoColorize, Style};
use std::sync::Arc;
use todo_core::clock::SystemClock;
use todo_core::db;
use todo_core::error::CoreError;
use tracing_subscriber::{prelude::*, EnvFilter};

use commands::App;

mod cli;
mod commands;
mod config;
mod parser;
mod timezone;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let config = match config::Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Invalid configuration: {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_level);

    let cli = cli::Cli::parse();

    if let Err(e) = run(cli, config).await {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .init();
}

async fn run(cli: cli::Cli, config: config::Config) -> anyhow::Result<()> {
    let timezone = timezone::resolve_timezone(&config.timezone)?;
    let pool = db::establish_connection(&config.database_path).await?;
    if config.seed_defaults {
        db::seed_defaults(&pool).await?;
    }
    tracing::debug!(database = %config.database_path, %timezone, "starting");

    let app = App::new(pool, Arc::new(SystemClock), timezone, config.default_user);

    match cli.command {
        cli::Commands::User(command) => commands::users::user_command(&app, command).await,
        cli::Commands::List(command) => commands::lists::list_command(&app, command).await,
        cli::Commands::Task(command) => commands::tasks::task_command(&app, command).await,
        cli::Commands::Note(command) => commands::notes::note_command(&app, command).await,
        cli::Commands::Category(command) => {
            commands::lookups::lookup_command(&app.categories, command).await
        }
        cli::Commands::Priority(command) => {
            commands::lookups::lookup_command(&app.priorities, command).await
        }
        cli::Commands::Status(command) => {
            commands::lookups::lookup_command(&app.statuses, command).await
        }
        cli::Commands::View(command) => commands::views::view_command(&app, command).await,
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::NotFound(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
        }
        Some(CoreError::AlreadyExists(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s.yellow());
        }
        Some(CoreError::InvalidArgument(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        Some(CoreError::NullArgument(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
        }
        Some(core_error) => {
            eprintln!("{} {}", "Error:".style(error_style), core_error);
            if let Some(source) = std::error::Error::source(core_error) {
                eprintln!("  caused by: {}", source);
            }
        }
        None => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
