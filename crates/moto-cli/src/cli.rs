use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use moto_core::engine::SortOrder;

#[derive(Parser)]
#[command(name = "moto")]
#[command(about = "Browse, search, and favourite motorcycles from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the catalogue merged with your favourites (the default)
    #[command(alias = "ls")]
    List {
        /// Sort order by model name
        #[arg(long, value_enum, default_value_t = SortArg::Asc)]
        sort: SortArg,
        /// Show only favourites
        #[arg(short, long)]
        favourites: bool,
        /// Skip the remote fetch and show the local store only
        #[arg(long)]
        offline: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search the remote catalogue by model name
    Search {
        /// Model text to search for
        query: String,
        /// Sort order by model name
        #[arg(long, value_enum, default_value_t = SortArg::Asc)]
        sort: SortArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a motorcycle as favourite
    Fav {
        /// Make (e.g. Yamaha)
        make: String,
        /// Model (e.g. MT-07)
        model: String,
    },
    /// Remove a motorcycle from favourites
    Unfav {
        /// Make (e.g. Yamaha)
        make: String,
        /// Model (e.g. MT-07)
        model: String,
    },
    /// Pick a random motorcycle from the visible list
    Random {
        /// Pick among favourites only
        #[arg(short, long)]
        favourites: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear the local store and re-import the remote catalogue
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show database location and favourite count
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => Self::Ascending,
            SortArg::Desc => Self::Descending,
        }
    }
}
