//! Minimal PokeAPI client for the pokedex endpoints the catalogue tooling needs.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, PokeApiClient};
pub use error::ApiError;
pub use types::{NamedResource, Pokedex, PokedexEntry, species_id_from_url};
