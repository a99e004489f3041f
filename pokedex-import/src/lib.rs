//! Populate the catalogue database from PokeAPI pokedex listings.
//!
//! The builder writes one row per national dex species; the regional importer
//! back-fills one dex column. Both run inside a single transaction, so a
//! failure leaves the database as it was.

pub mod national;
pub mod progress;
pub mod regional;

pub use national::{ImportError, ImportStats, build_national, log_import};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use regional::{RegionalOptions, import_regional_dex};
