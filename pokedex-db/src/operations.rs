//! Write operations used by the catalogue builder and regional importers.

use pokedex_core::RegionalDex;
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// One row of the `import_log` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLog {
    pub id: i64,
    /// "national" for the builder, the dex column name for regional imports.
    pub source_name: String,
    pub imported_at: String,
    pub records_written: i64,
    pub records_unmatched: i64,
}

// ── Pokemon Operations ──────────────────────────────────────────────────────

/// Insert a national dex species, or rename it if the id already exists.
///
/// Regional dex columns of an existing row are left untouched.
pub fn upsert_pokemon(conn: &Connection, id: u32, name: &str) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO pokemon (id, name) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET name = excluded.name",
        params![id, name],
    )?;
    Ok(())
}

/// Set a Pokemon's entry number in one regional dex.
///
/// Returns `false` if no row with `id` exists (nothing is inserted).
pub fn set_dex_number(
    conn: &Connection,
    dex: RegionalDex,
    id: u32,
    number: u32,
) -> Result<bool, OperationError> {
    // Column names come from the closed RegionalDex set, never from input.
    let sql = format!("UPDATE pokemon SET {} = ?1 WHERE id = ?2", dex.column());
    let changed = conn.execute(&sql, params![number, id])?;
    Ok(changed > 0)
}

/// Null out a regional dex column for every Pokemon. Returns rows cleared.
pub fn clear_dex(conn: &Connection, dex: RegionalDex) -> Result<usize, OperationError> {
    let column = dex.column();
    let sql = format!("UPDATE pokemon SET {column} = NULL WHERE {column} IS NOT NULL");
    Ok(conn.execute(&sql, [])?)
}

// ── Import Log ──────────────────────────────────────────────────────────────

/// Record an import run. Returns the new row id.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_name, imported_at, records_written, records_unmatched)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            log.source_name,
            log.imported_at,
            log.records_written,
            log.records_unmatched,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
