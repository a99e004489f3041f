//! Back-fill one regional dex column from a regional pokedex listing.

use pokedex_api::Pokedex;
use pokedex_core::RegionalDex;
use pokedex_db::operations;
use rusqlite::Connection;

use crate::national::{ImportError, ImportStats, species_id};
use crate::progress::ImportProgress;

#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalOptions {
    /// Null the column for every row before writing, so species dropped
    /// from the dex since the last import lose their number.
    pub replace: bool,
}

/// Write each entry's number into the `dex` column of the matching row.
///
/// Entries whose species has no row are counted as unmatched and skipped.
/// The whole import is one transaction: any error rolls it back.
pub fn import_regional_dex(
    conn: &Connection,
    dex: RegionalDex,
    pokedex: &Pokedex,
    options: RegionalOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let total = pokedex.pokemon_entries.len();
    let mut stats = ImportStats {
        total_entries: total as u64,
        ..Default::default()
    };

    if let Some(p) = progress {
        p.on_start(&pokedex.name, total);
    }

    let tx = conn.unchecked_transaction()?;

    if options.replace {
        stats.cleared = operations::clear_dex(&tx, dex)? as u64;
    }

    for (i, entry) in pokedex.pokemon_entries.iter().enumerate() {
        let id = species_id(entry)?;
        let matched = operations::set_dex_number(&tx, dex, id, entry.entry_number)?;
        if matched {
            stats.written += 1;
        } else {
            log::debug!(
                "No row for species #{} ({}); skipping {} entry {}",
                id,
                entry.pokemon_species.name,
                dex,
                entry.entry_number
            );
            stats.unmatched += 1;
        }

        if let Some(p) = progress {
            p.on_entry(i + 1, total, entry, matched);
        }
    }

    tx.commit()?;

    if stats.unmatched > 0 {
        log::warn!(
            "{} {} entries had no matching Pokemon; build the national table first",
            stats.unmatched,
            dex
        );
    }
    if let Some(p) = progress {
        p.on_finish(&pokedex.name, &stats);
    }
    Ok(stats)
}
