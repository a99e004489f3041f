//! Progress callbacks for the builder and regional importer.

use pokedex_api::PokedexEntry;

use crate::national::ImportStats;

/// Receives updates while one pokedex listing is written.
pub trait ImportProgress {
    /// Called before the transaction opens.
    fn on_start(&self, pokedex: &str, total: usize);

    /// Called per entry. `matched` is false when the species had no row.
    fn on_entry(&self, current: usize, total: usize, entry: &PokedexEntry, matched: bool);

    /// Called after the transaction commits.
    fn on_finish(&self, pokedex: &str, stats: &ImportStats);
}

/// Discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_start(&self, _pokedex: &str, _total: usize) {}
    fn on_entry(&self, _current: usize, _total: usize, _entry: &PokedexEntry, _matched: bool) {}
    fn on_finish(&self, _pokedex: &str, _stats: &ImportStats) {}
}

/// Reports through `log`: a line every 250 entries and a summary once
/// committed.
pub struct LogProgress;

const LOG_EVERY: usize = 250;

impl ImportProgress for LogProgress {
    fn on_start(&self, pokedex: &str, total: usize) {
        log::info!("Writing {} entries from pokedex '{}'", total, pokedex);
    }

    fn on_entry(&self, current: usize, total: usize, entry: &PokedexEntry, _matched: bool) {
        if current.is_multiple_of(LOG_EVERY) || current == total {
            log::info!(
                "  [{}/{}] #{} {}",
                current,
                total,
                entry.entry_number,
                entry.pokemon_species.name
            );
        }
    }

    fn on_finish(&self, pokedex: &str, stats: &ImportStats) {
        if stats.cleared > 0 {
            log::info!("Cleared {} stale numbers before '{}'", stats.cleared, pokedex);
        }
        log::info!(
            "Pokedex '{}': {} written, {} unmatched",
            pokedex,
            stats.written,
            stats.unmatched
        );
    }
}
