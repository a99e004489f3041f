use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_api::PokeApiClient;
use pokedex_import::{LogProgress, build_national, log_import};

use crate::CliError;

/// Fetch the national dex and upsert one row per species.
pub(crate) fn run_build(db_path: PathBuf, api_url: String, quiet: bool) -> Result<(), CliError> {
    let client = PokeApiClient::with_base_url(api_url).map_err(|e| CliError::api(e.to_string()))?;
    let rt = super::runtime()?;

    let pb = crate::spinner::start(quiet, format!("Fetching national dex from {}", client.base_url()));
    let fetched = rt.block_on(client.fetch_national());
    pb.finish_and_clear();
    let pokedex = fetched.map_err(|e| CliError::api(e.to_string()))?;

    let conn = super::open_db(&db_path)?;
    let stats = build_national(&conn, &pokedex, Some(&LogProgress))
        .map_err(|e| CliError::import(e.to_string()))?;
    log_import(&conn, "national", &stats).map_err(|e| CliError::import(e.to_string()))?;

    log::info!(
        "{} Stored {} Pokemon in {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.written,
        db_path.display(),
    );
    log::info!("Next: 'pokedex add-dex <dex>' for each regional dex, then 'pokedex export'.");
    Ok(())
}
