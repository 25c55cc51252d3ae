use std::path::Path;

use moto_core::engine::{SortOrder, ViewMode};

use crate::commands::common::{build_service, print_motos};
use crate::error::CliError;

pub async fn run_search(
    query: &str,
    order: SortOrder,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let mut service = build_service(db_path, order, ViewMode::All)?;

    let fetched = service.search(query).await?;
    tracing::debug!(fetched, query, "remote search completed");

    print_motos(&service.visible(), as_json)
}
