//! Core types for the Pokedex reference tool.
//!
//! Defines the closed sets the rest of the workspace is keyed on (regional
//! dexes, regions, game titles), the game-to-dex mapping table, and the
//! `Pokemon` catalogue record with its JSON representation.

pub mod dex;
pub mod game;
pub mod pokemon;
pub mod region;

pub use dex::{DexParseError, RegionalDex};
pub use game::{
    GameConfig, GameName, GameParseError, dexes_for_game, pokemon_in_game, region_for_game,
};
pub use pokemon::{DexNumbers, Pokemon, PokemonError};
pub use region::{Region, UNKNOWN_REGION};
