//! Moto CLI - Browse, search, and favourite motorcycles from the terminal
//!
//! A thin frontend over moto-core: every subcommand is one user intent
//! (list, search, toggle, random pick, reset) routed through the catalogue
//! service.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::common::resolve_db_path;
use crate::commands::{list, random, reset, search, status, toggle};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("moto=warn".parse().expect("valid directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path);

    match cli.command {
        Some(Commands::List {
            sort,
            favourites,
            offline,
            json,
        }) => list::run_list(sort.into(), favourites, offline, json, &db_path).await?,
        Some(Commands::Search { query, sort, json }) => {
            search::run_search(&query, sort.into(), json, &db_path).await?;
        }
        Some(Commands::Fav { make, model }) => toggle::run_fav(&make, &model, &db_path).await?,
        Some(Commands::Unfav { make, model }) => {
            toggle::run_unfav(&make, &model, &db_path)?;
        }
        Some(Commands::Random { favourites, json }) => {
            random::run_random(favourites, json, &db_path).await?;
        }
        Some(Commands::Reset { yes }) => reset::run_reset(yes, &db_path).await?,
        Some(Commands::Status { json }) => status::run_status(json, &db_path)?,
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    Ok(())
}
