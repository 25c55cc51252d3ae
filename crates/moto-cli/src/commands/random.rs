use std::path::Path;

use moto_core::engine::{SortOrder, ViewMode};
use moto_core::Motorcycle;

use crate::commands::common::{build_service, local_engine, MotoListItem};
use crate::error::CliError;

pub async fn run_random(
    favourites_only: bool,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    // Favourites-only draws never need the network
    let pick = if favourites_only {
        local_engine(db_path, SortOrder::default(), ViewMode::FavouritesOnly)?.random_pick()
    } else {
        let mut service = build_service(db_path, SortOrder::default(), ViewMode::All)?;
        if let Err(error) = service.refresh().await {
            eprintln!("warning: {error}; drawing from local favourites only");
        }
        service.random_pick()
    };

    match pick {
        Some(moto) => print_pick(&moto, as_json)?,
        None => println!("(nothing to pick from)"),
    }

    Ok(())
}

fn print_pick(moto: &Motorcycle, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&MotoListItem::from(moto))?);
    } else {
        let year = moto.year.as_deref().unwrap_or("-");
        println!("{} {} ({year})", moto.make, moto.model);
    }
    Ok(())
}
