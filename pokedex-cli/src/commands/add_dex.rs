use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_api::PokeApiClient;
use pokedex_core::RegionalDex;
use pokedex_import::{LogProgress, RegionalOptions, import_regional_dex, log_import};

use crate::CliError;

const SAMPLE_SIZE: u32 = 5;

/// Fetch one regional dex and write its numbers into the matching column.
pub(crate) fn run_add_dex(
    dex: RegionalDex,
    replace: bool,
    db_path: PathBuf,
    api_url: String,
    quiet: bool,
) -> Result<(), CliError> {
    let conn = super::open_db(&db_path)?;
    let existing = pokedex_db::count_pokemon(&conn)
        .map_err(|e| CliError::database(e.to_string()))?;
    if existing == 0 {
        log::warn!("The pokemon table is empty; every entry will be unmatched.");
        log::info!("Run 'pokedex build' first.");
    }

    let client = PokeApiClient::with_base_url(api_url).map_err(|e| CliError::api(e.to_string()))?;
    let rt = super::runtime()?;

    let pb = crate::spinner::start(quiet, format!("Fetching pokedex '{}'", dex.api_slug()));
    let fetched = rt.block_on(client.fetch_regional(dex));
    pb.finish_and_clear();
    let pokedex = fetched.map_err(|e| CliError::api(e.to_string()))?;

    let stats = import_regional_dex(
        &conn,
        dex,
        &pokedex,
        RegionalOptions { replace },
        Some(&LogProgress),
    )
    .map_err(|e| CliError::import(e.to_string()))?;
    log_import(&conn, dex.column(), &stats).map_err(|e| CliError::import(e.to_string()))?;

    let total = pokedex_db::count_in_dex(&conn, dex)
        .map_err(|e| CliError::database(e.to_string()))?;
    let sample = pokedex_db::dex_sample(&conn, dex, SAMPLE_SIZE)
        .map_err(|e| CliError::database(e.to_string()))?;

    crate::log_blank();
    log::info!(
        "{} {} Pokemon have a {} number",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        total,
        dex.column().if_supports_color(Stdout, |t| t.cyan()),
    );
    if stats.unmatched > 0 {
        log::info!(
            "  {} entries skipped (no matching national dex row)",
            stats.unmatched
        );
    }
    if !sample.is_empty() {
        crate::log_blank();
        for row in &sample {
            log::info!("  {:>4}  #{:<5} {}", row.number, row.id, row.name);
        }
    }
    Ok(())
}
