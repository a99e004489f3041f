use serde::Deserialize;

/// A `/pokedex/{name}` response, reduced to the fields the importers read.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokedex {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_entries: Vec<PokedexEntry>,
}

/// One species entry within a pokedex.
#[derive(Debug, Clone, Deserialize)]
pub struct PokedexEntry {
    pub entry_number: u32,
    pub pokemon_species: NamedResource,
}

/// PokeAPI's `{name, url}` reference to another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// The numeric id embedded in the resource URL, if any.
    pub fn id(&self) -> Option<u32> {
        species_id_from_url(&self.url)
    }
}

/// Extract the id from a resource URL of the form
/// `https://pokeapi.co/api/v2/pokemon-species/{id}/`.
///
/// The id is the last non-empty path segment, so the trailing slash is optional.
pub fn species_id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
