//! SQLite persistence layer for the Pokemon catalogue.
//!
//! Provides schema creation, the write operations used by the offline
//! builder and importers, and the read queries behind export and stats.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    ImportLog, OperationError, clear_dex, insert_import_log, set_dex_number, upsert_pokemon,
};
pub use queries::{
    DexSampleRow, count_in_dex, count_pokemon, dex_counts, dex_sample, get_pokemon,
    list_import_logs, list_pokemon,
};
pub use schema::{SchemaError, open_database, open_memory};
