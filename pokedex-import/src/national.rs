//! Build the `pokemon` table from the national dex.

use pokedex_api::{Pokedex, PokedexEntry};
use pokedex_db::operations::{self, ImportLog, OperationError};
use rusqlite::Connection;
use thiserror::Error;

use crate::progress::ImportProgress;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("No species id in URL for '{name}': {url}")]
    BadSpeciesUrl { name: String, url: String },
}

/// Statistics from a single import run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    /// Entries in the fetched pokedex.
    pub total_entries: u64,
    /// Rows inserted or updated.
    pub written: u64,
    /// Entries whose species has no row in the table (regional imports only).
    pub unmatched: u64,
    /// Rows cleared before a replacing regional import.
    pub cleared: u64,
}

/// Upsert one row per national dex entry, all in one transaction.
///
/// The row id is the species id from the entry's URL and the name is the
/// species name. Existing rows keep their regional dex columns.
pub fn build_national(
    conn: &Connection,
    pokedex: &Pokedex,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats {
        total_entries: pokedex.pokemon_entries.len() as u64,
        ..Default::default()
    };

    let total = pokedex.pokemon_entries.len();
    if let Some(p) = progress {
        p.on_start(&pokedex.name, total);
    }

    let tx = conn.unchecked_transaction()?;

    for (i, entry) in pokedex.pokemon_entries.iter().enumerate() {
        let id = species_id(entry)?;
        operations::upsert_pokemon(&tx, id, &entry.pokemon_species.name)?;
        stats.written += 1;

        if let Some(p) = progress {
            p.on_entry(i + 1, total, entry, true);
        }
    }

    tx.commit()?;

    if let Some(p) = progress {
        p.on_finish(&pokedex.name, &stats);
    }
    Ok(stats)
}

/// Record an import run in `import_log`. Returns the new log id.
pub fn log_import(
    conn: &Connection,
    source_name: &str,
    stats: &ImportStats,
) -> Result<i64, ImportError> {
    let now = chrono::Utc::now().to_rfc3339();
    let log_entry = ImportLog {
        id: 0,
        source_name: source_name.to_string(),
        imported_at: now,
        records_written: stats.written as i64,
        records_unmatched: stats.unmatched as i64,
    };
    let id = operations::insert_import_log(conn, &log_entry)?;
    Ok(id)
}

pub(crate) fn species_id(entry: &PokedexEntry) -> Result<u32, ImportError> {
    entry
        .pokemon_species
        .id()
        .ok_or_else(|| ImportError::BadSpeciesUrl {
            name: entry.pokemon_species.name.clone(),
            url: entry.pokemon_species.url.clone(),
        })
}
