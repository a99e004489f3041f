use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_stats(db_path: PathBuf, history: u32) -> Result<(), CliError> {
    if !db_path.exists() {
        log::warn!("No database found at {}", db_path.display());
        log::info!("Run 'pokedex build' to create one.");
        return Ok(());
    }

    let conn = super::open_db(&db_path)?;
    let total = pokedex_db::count_pokemon(&conn)
        .map_err(|e| CliError::database(format!("Failed to count Pokemon: {}", e)))?;
    let counts = pokedex_db::dex_counts(&conn)
        .map_err(|e| CliError::database(format!("Failed to count dex entries: {}", e)))?;
    let logs = pokedex_db::list_import_logs(&conn, Some(history))
        .map_err(|e| CliError::database(format!("Failed to read import log: {}", e)))?;

    log::info!(
        "{}",
        "Pokedex Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  {:<16} {:>6}", "national", total);
    for (dex, count) in &counts {
        if *count == 0 {
            log::info!(
                "  {:<16} {:>6}",
                dex.column(),
                "-".if_supports_color(Stdout, |t| t.dimmed()),
            );
        } else {
            log::info!("  {:<16} {:>6}", dex.column(), count);
        }
    }

    if !logs.is_empty() {
        crate::log_blank();
        log::info!("{}", "Recent imports".if_supports_color(Stdout, |t| t.bold()));
        for entry in &logs {
            log::info!(
                "  {}  {:<16} {:>6} written  {:>4} unmatched",
                entry.imported_at,
                entry.source_name,
                entry.records_written,
                entry.records_unmatched,
            );
        }
    }
    Ok(())
}
