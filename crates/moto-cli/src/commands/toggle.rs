use std::path::Path;

use moto_core::db::{FavouriteStore, SqliteFavouriteStore};
use moto_core::engine::{SortOrder, ViewMode};
use moto_core::{MotoKey, Motorcycle};

use crate::commands::common::{build_service, open_database};
use crate::error::CliError;

pub async fn run_fav(make: &str, model: &str, db_path: &Path) -> Result<(), CliError> {
    let mut service = build_service(db_path, SortOrder::default(), ViewMode::All)?;
    let key = MotoKey::new(make, model);

    if service.get_local(&key)?.is_some() {
        println!("{key} is already a favourite");
        return Ok(());
    }

    // Pull the spec fields from the catalogue when reachable; a bare record
    // still carries the natural key and that is all the store needs
    let record = match service.find_remote(&key).await {
        Ok(Some(record)) => record,
        Ok(None) => Motorcycle::new(make, model),
        Err(error) => {
            tracing::warn!(%error, "catalogue unreachable, saving bare record");
            Motorcycle::new(make, model)
        }
    };

    service.set_favourite(record, true)?;
    println!("Added {key} to favourites");
    Ok(())
}

pub fn run_unfav(make: &str, model: &str, db_path: &Path) -> Result<(), CliError> {
    // A pure local delete: no client, no API key
    let db = open_database(db_path)?;
    let store = SqliteFavouriteStore::new(db.connection());
    let key = MotoKey::new(make, model);

    if store.get(&key)?.is_none() {
        println!("{key} is not a favourite");
        return Ok(());
    }

    store.delete(&key)?;
    println!("Removed {key} from favourites");
    Ok(())
}
