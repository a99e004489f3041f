use std::collections::HashSet;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_lib::{AnySource, CatalogueLoader, GameName, UNKNOWN_REGION, group_for_game};

use crate::CliError;

/// Load the catalogue and print `game`'s Pokemon grouped by regional dex.
///
/// `game` may be a title or any alias. The catalogue is loaded even for an
/// unknown game so that a broken source is still reported.
pub(crate) fn run_lookup(game: &str, catalogue: String, json: bool) -> Result<(), CliError> {
    let source =
        AnySource::from_location(&catalogue).map_err(|e| CliError::catalogue(e.to_string()))?;
    let loader = CatalogueLoader::new(source);

    let rt = super::runtime()?;
    let pokemon = rt
        .block_on(loader.load())
        .map_err(|e| CliError::catalogue(e.to_string()))?;

    let known = game.parse::<GameName>().ok();
    if known.is_none() {
        log::warn!("Unknown game '{}'. Run 'pokedex games' for the list.", game);
    }
    let groups = known
        .map(|g| group_for_game(&pokemon, g))
        .unwrap_or_default();

    if json {
        let doc = serde_json::json!({
            "game": known.map_or(game, |g| g.title()),
            "region": known.map_or(UNKNOWN_REGION, |g| g.region().name()),
            "groups": groups,
        });
        let text = serde_json::to_string_pretty(&doc)
            .map_err(|e| CliError::catalogue(e.to_string()))?;
        println!("{text}");
        return Ok(());
    }

    let Some(game) = known else {
        return Ok(());
    };

    let mut distinct = HashSet::new();
    for group in &groups {
        crate::log_blank();
        log::info!(
            "{} ({})",
            group.dex.column().if_supports_color(Stdout, |t| t.bold()),
            group.len(),
        );
        for entry in &group.pokemon {
            distinct.insert(entry.pokemon.id);
            log::info!(
                "  {:>4}  {}",
                entry.dex_number,
                entry.pokemon.name.if_supports_color(Stdout, |t| t.cyan()),
            );
        }
    }

    crate::log_blank();
    log::info!(
        "{} Pokemon in {} ({})",
        distinct.len(),
        game.title().if_supports_color(Stdout, |t| t.bold()),
        game.region(),
    );
    Ok(())
}
