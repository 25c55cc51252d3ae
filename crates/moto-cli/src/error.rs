use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] moto_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No API key configured. Set MOTO_API_KEY (or put it in a .env file).")]
    ApiKeyMissing,
    #[error("Reset aborted")]
    ResetAborted,
}
