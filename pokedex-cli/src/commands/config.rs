use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_lib::settings::{self, Settings};

use crate::CliError;

/// Show each setting's resolved value and whether it came from the file.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings::settings_path();
    let saved = settings::load_settings_from(&path).map_err(|e| CliError::config(e.to_string()))?;

    log::info!(
        "{}",
        "Pokedex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let rows = [
        (
            "db_path",
            saved.resolve_db_path(None).display().to_string(),
            saved.db_path.is_some(),
        ),
        (
            "catalogue",
            saved.resolve_catalogue(None),
            saved.catalogue.is_some(),
        ),
        (
            "api_base_url",
            saved.resolve_api_base_url(None),
            saved.api_base_url.is_some(),
        ),
    ];
    for (key, value, from_file) in rows {
        let source = if from_file { "settings.toml" } else { "default" };
        log::info!(
            "  {:<13} {} {}",
            key,
            value,
            format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Update one key in settings.toml, creating the file if needed.
pub(crate) fn run_config_set(key: &str, value: &str) -> Result<(), CliError> {
    let path = settings::settings_path();
    let mut saved: Settings =
        settings::load_settings_from(&path).map_err(|e| CliError::config(e.to_string()))?;
    saved
        .set(key, value)
        .map_err(|e| CliError::config(e.to_string()))?;
    settings::save_settings_to(&path, &saved).map_err(|e| CliError::config(e.to_string()))?;

    if value.trim().is_empty() {
        log::info!("Cleared {} in {}", key, path.display());
    } else {
        log::info!("Set {} = {} in {}", key, value.trim(), path.display());
    }
    Ok(())
}
