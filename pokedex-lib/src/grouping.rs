//! Group a catalogue by the regional dexes of a game.

use pokedex_core::{GameName, Pokemon, RegionalDex, dexes_for_game};
use serde::Serialize;

/// A Pokemon paired with its entry number in one dex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonInDex<'a> {
    pub pokemon: &'a Pokemon,
    pub dex_number: u32,
}

/// Every Pokemon in one regional dex, in entry-number order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DexGroup<'a> {
    pub dex: RegionalDex,
    pub pokemon: Vec<PokemonInDex<'a>>,
}

impl DexGroup<'_> {
    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

/// Group `catalogue` by the dexes of `game`, one group per dex in the game's
/// order. Unrecognized games produce no groups.
pub fn group_by_dex<'a>(catalogue: &'a [Pokemon], game: &str) -> Vec<DexGroup<'a>> {
    group_dexes(catalogue, dexes_for_game(game))
}

/// Typed form of [`group_by_dex`].
pub fn group_for_game(catalogue: &[Pokemon], game: GameName) -> Vec<DexGroup<'_>> {
    group_dexes(catalogue, game.dexes())
}

fn group_dexes<'a>(catalogue: &'a [Pokemon], dexes: &[RegionalDex]) -> Vec<DexGroup<'a>> {
    dexes
        .iter()
        .map(|&dex| {
            let mut pokemon: Vec<PokemonInDex<'a>> = catalogue
                .iter()
                .filter_map(|p| {
                    p.dex_number(dex).map(|dex_number| PokemonInDex {
                        pokemon: p,
                        dex_number,
                    })
                })
                .collect();
            // Stable: ties keep catalogue order.
            pokemon.sort_by_key(|entry| entry.dex_number);
            DexGroup { dex, pokemon }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/grouping_tests.rs"]
mod tests;
