use std::path::Path;

use moto_core::engine::{SortOrder, ViewMode};

use crate::commands::common::{build_service, local_engine, print_motos};
use crate::error::CliError;

pub async fn run_list(
    order: SortOrder,
    favourites_only: bool,
    offline: bool,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let view = if favourites_only {
        ViewMode::FavouritesOnly
    } else {
        ViewMode::All
    };

    if offline {
        let engine = local_engine(db_path, order, view)?;
        return print_motos(&engine.visible(), as_json);
    }

    let mut service = build_service(db_path, order, view)?;

    // Network failure degrades to the local list, per the last-good-value
    // policy: the local snapshot is already loaded
    if let Err(error) = service.refresh().await {
        eprintln!("warning: {error}; showing local favourites only");
    }

    print_motos(&service.visible(), as_json)
}
