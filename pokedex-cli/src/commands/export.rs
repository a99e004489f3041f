use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Write every database row as the flat JSON catalogue read by `lookup`.
pub(crate) fn run_export(db_path: PathBuf, output: PathBuf) -> Result<(), CliError> {
    let out = output.display().to_string();
    if out.starts_with("http://") || out.starts_with("https://") {
        return Err(CliError::catalogue(format!(
            "Cannot export to a URL ({out}); pass --output <file>"
        )));
    }
    if !db_path.exists() {
        return Err(CliError::database(format!(
            "No database found at {}. Run 'pokedex build' to create one.",
            db_path.display()
        )));
    }

    let conn = super::open_db(&db_path)?;
    let pokemon =
        pokedex_db::list_pokemon(&conn).map_err(|e| CliError::database(e.to_string()))?;
    // Stale numbers from an earlier import can collide with renumbered ones.
    pokedex_lib::validate_catalogue(&pokemon).map_err(|e| {
        CliError::catalogue(format!(
            "{e}. Re-import the affected dex with 'pokedex add-dex <dex> --replace'."
        ))
    })?;
    let json = serde_json::to_string_pretty(&pokemon)
        .map_err(|e| CliError::catalogue(format!("Failed to serialize catalogue: {e}")))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = output.with_extension("json.tmp");
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, &output)?;

    log::info!(
        "{} Exported {} Pokemon to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        pokemon.len(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
