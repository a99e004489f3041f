//! Read queries for the catalogue database.

use pokedex_core::{Pokemon, RegionalDex};
use rusqlite::{Connection, OptionalExtension, params};

use crate::operations::{ImportLog, OperationError};

/// One row of a per-dex sample listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DexSampleRow {
    pub id: u32,
    pub name: String,
    pub number: u32,
}

// ── Counts ──────────────────────────────────────────────────────────────────

/// Total number of Pokemon rows.
pub fn count_pokemon(conn: &Connection) -> Result<u64, OperationError> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM pokemon", [], |r| r.get(0))?;
    Ok(n as u64)
}

/// Number of Pokemon with an entry in `dex`.
pub fn count_in_dex(conn: &Connection, dex: RegionalDex) -> Result<u64, OperationError> {
    let sql = format!(
        "SELECT COUNT(*) FROM pokemon WHERE {} IS NOT NULL",
        dex.column()
    );
    let n: i64 = conn.query_row(&sql, [], |r| r.get(0))?;
    Ok(n as u64)
}

/// Entry counts for every regional dex, in column order.
pub fn dex_counts(conn: &Connection) -> Result<Vec<(RegionalDex, u64)>, OperationError> {
    RegionalDex::all()
        .iter()
        .map(|&dex| count_in_dex(conn, dex).map(|n| (dex, n)))
        .collect()
}

// ── Pokemon Lookups ─────────────────────────────────────────────────────────

/// The first `limit` Pokemon of a dex, ordered by their entry number.
pub fn dex_sample(
    conn: &Connection,
    dex: RegionalDex,
    limit: u32,
) -> Result<Vec<DexSampleRow>, OperationError> {
    let column = dex.column();
    let mut stmt = conn.prepare(&format!(
        "SELECT id, name, {column} FROM pokemon
         WHERE {column} IS NOT NULL ORDER BY {column} LIMIT ?1"
    ))?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(DexSampleRow {
            id: row.get(0)?,
            name: row.get(1)?,
            number: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Every Pokemon with its regional dex numbers, ordered by national id.
pub fn list_pokemon(conn: &Connection) -> Result<Vec<Pokemon>, OperationError> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY id", select_pokemon_sql()))?;
    let rows = stmt.query_map([], row_to_pokemon)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// A single Pokemon by national id.
pub fn get_pokemon(conn: &Connection, id: u32) -> Result<Option<Pokemon>, OperationError> {
    let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", select_pokemon_sql()))?;
    Ok(stmt.query_row(params![id], row_to_pokemon).optional()?)
}

// ── Import Log ──────────────────────────────────────────────────────────────

/// Most recent import runs, newest first.
pub fn list_import_logs(
    conn: &Connection,
    limit: Option<u32>,
) -> Result<Vec<ImportLog>, OperationError> {
    let limit = limit.unwrap_or(20);
    let mut stmt = conn.prepare(
        "SELECT id, source_name, imported_at, records_written, records_unmatched
         FROM import_log ORDER BY imported_at DESC, id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_name: row.get(1)?,
            imported_at: row.get(2)?,
            records_written: row.get(3)?,
            records_unmatched: row.get(4)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn select_pokemon_sql() -> String {
    let columns: Vec<&str> = RegionalDex::all().iter().map(|d| d.column()).collect();
    format!("SELECT id, name, {} FROM pokemon", columns.join(", "))
}

fn row_to_pokemon(row: &rusqlite::Row<'_>) -> rusqlite::Result<Pokemon> {
    let mut pokemon = Pokemon::new(row.get(0)?, row.get::<_, String>(1)?);
    for (i, &dex) in RegionalDex::all().iter().enumerate() {
        pokemon.set_dex_number(dex, row.get(i + 2)?);
    }
    Ok(pokemon)
}
