use std::env;
use std::path::{Path, PathBuf};

use moto_core::db::{Database, FavouriteStore, SqliteFavouriteStore};
use moto_core::engine::{ReconcileEngine, SortOrder, ViewMode};
use moto_core::remote::CatalogueClient;
use moto_core::repository::CatalogueRepository;
use moto_core::services::CatalogueService;
use moto_core::Motorcycle;
use serde::Serialize;

use crate::error::CliError;

/// JSON projection of a visible-list entry
#[derive(Debug, Serialize)]
pub struct MotoListItem {
    pub make: String,
    pub model: String,
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub engine_type: Option<String>,
    pub displacement: Option<String>,
    pub power: Option<String>,
    pub favourite: bool,
}

impl From<&Motorcycle> for MotoListItem {
    fn from(moto: &Motorcycle) -> Self {
        Self {
            make: moto.make.clone(),
            model: moto.model.clone(),
            year: moto.year.clone(),
            engine_type: moto.engine_type.clone(),
            displacement: moto.displacement.clone(),
            power: moto.power.clone(),
            favourite: moto.favourite,
        }
    }
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os("MOTO_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moto")
        .join("moto.db")
}

pub fn api_key_from_env() -> Result<String, CliError> {
    match env::var("MOTO_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(CliError::ApiKeyMissing),
    }
}

fn build_client() -> Result<CatalogueClient, CliError> {
    let api_key = api_key_from_env()?;
    let client = match env::var("MOTO_API_URL") {
        Ok(base_url) if !base_url.trim().is_empty() => {
            CatalogueClient::with_base_url(base_url, api_key)?
        }
        _ => CatalogueClient::new(api_key)?,
    };
    Ok(client)
}

pub fn open_database(path: &Path) -> Result<Database, CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Database::open(path)?)
}

/// Build an engine over the local store only, for commands that never touch
/// the network (and therefore need no API key)
pub fn local_engine(
    db_path: &Path,
    order: SortOrder,
    view: ViewMode,
) -> Result<ReconcileEngine, CliError> {
    let db = open_database(db_path)?;
    let store = SqliteFavouriteStore::new(db.connection());
    let local = store.list_sorted(order)?;

    let mut engine = ReconcileEngine::new(order, view);
    engine.update_local(local);
    Ok(engine)
}

/// Build the screen-scoped service every network-touching command runs through
pub fn build_service(
    db_path: &Path,
    order: SortOrder,
    view: ViewMode,
) -> Result<CatalogueService, CliError> {
    let client = build_client()?;
    let db = open_database(db_path)?;
    let repo = CatalogueRepository::new(client, db);
    Ok(CatalogueService::new(repo, order, view)?)
}

pub fn format_moto_lines(motos: &[Motorcycle]) -> Vec<String> {
    motos
        .iter()
        .map(|moto| {
            let marker = if moto.favourite { "*" } else { " " };
            let year = moto.year.as_deref().unwrap_or("-");
            let kind = moto.engine_type.as_deref().unwrap_or("-");
            format!(
                "{marker} {:<12} {:<24} {year:<6} {kind}",
                moto.make, moto.model
            )
        })
        .collect()
}

pub fn print_motos(motos: &[Motorcycle], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let items = motos.iter().map(MotoListItem::from).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if motos.is_empty() {
        println!("(no motorcycles)");
    } else {
        for line in format_moto_lines(motos) {
            println!("{line}");
        }
    }
    Ok(())
}
