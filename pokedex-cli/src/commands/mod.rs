pub(crate) mod add_dex;
pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod games;
pub(crate) mod lookup;
pub(crate) mod stats;

use std::path::Path;

use crate::CliError;

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}

pub(crate) fn open_db(db_path: &Path) -> Result<rusqlite::Connection, CliError> {
    pokedex_db::open_database(db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open database at {}: {}",
            db_path.display(),
            e
        ))
    })
}
