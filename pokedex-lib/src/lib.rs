//! Catalogue loading and dex grouping for the Pokedex reference tool.
//!
//! Consumers create a [`CatalogueLoader`] over a [`CatalogueSource`] and ask
//! it for a game's Pokemon grouped by regional dex. The mapping from games to
//! dexes lives in `pokedex-core`.

pub mod error;
pub mod grouping;
pub mod loader;
pub mod settings;
pub mod source;

pub use error::CatalogueError;
pub use grouping::{DexGroup, PokemonInDex, group_by_dex, group_for_game};
pub use loader::CatalogueLoader;
pub use settings::{Settings, SettingsError};
pub use source::{
    AnySource, CatalogueSource, HttpSource, JsonFileSource, parse_catalogue, validate_catalogue,
};

// Re-export core types so frontends only need this crate for lookups.
pub use pokedex_core::{
    GameName, Pokemon, Region, RegionalDex, UNKNOWN_REGION, dexes_for_game, pokemon_in_game,
    region_for_game,
};
