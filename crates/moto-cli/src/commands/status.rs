use std::path::Path;

use moto_core::db::{Database, FavouriteStore, SqliteFavouriteStore};
use serde::Serialize;

use crate::commands::common::api_key_from_env;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct StatusReport {
    db_path: String,
    favourites: usize,
    api_key_configured: bool,
}

pub fn run_status(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db = Database::open(db_path)?;
    let store = SqliteFavouriteStore::new(db.connection());

    let report = StatusReport {
        db_path: db_path.display().to_string(),
        favourites: store.count()?,
        api_key_configured: api_key_from_env().is_ok(),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Database:   {}", report.db_path);
        println!("Favourites: {}", report.favourites);
        println!(
            "API key:    {}",
            if report.api_key_configured {
                "configured"
            } else {
                "missing (set MOTO_API_KEY)"
            }
        );
    }

    Ok(())
}
