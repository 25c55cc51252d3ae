use std::io::{self, IsTerminal, Write};
use std::path::Path;

use moto_core::engine::{SortOrder, ViewMode};

use crate::commands::common::build_service;
use crate::error::CliError;

pub async fn run_reset(skip_confirm: bool, db_path: &Path) -> Result<(), CliError> {
    if !skip_confirm && !confirm()? {
        return Err(CliError::ResetAborted);
    }

    let mut service = build_service(db_path, SortOrder::default(), ViewMode::All)?;
    let imported = service.reset().await?;

    println!("Local store cleared; imported {imported} motorcycles from the catalogue");
    Ok(())
}

fn confirm() -> Result<bool, CliError> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        // Piped input cannot answer a prompt; require --yes
        return Ok(false);
    }

    print!("This clears every favourite and re-imports the remote catalogue. Continue? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    stdin.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
