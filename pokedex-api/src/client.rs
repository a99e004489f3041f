use std::time::Duration;

use pokedex_core::RegionalDex;

use crate::error::ApiError;
use crate::types::Pokedex;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the PokeAPI pokedex endpoints.
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client pointed at the public PokeAPI.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a different API root (mirrors, local caches).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `/pokedex/{name}`.
    pub async fn fetch_pokedex(&self, name: &str) -> Result<Pokedex, ApiError> {
        let url = format!("{}/pokedex/{}", self.base_url, name);
        log::debug!("GET {url}");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let text = resp.text().await?;
        let pokedex: Pokedex = serde_json::from_str(&text).map_err(|e| ApiError::Parse {
            url: url.clone(),
            message: format!("{e}. Response: {}", truncate(&text, 200)),
        })?;

        log::debug!(
            "{} entries in pokedex '{}'",
            pokedex.pokemon_entries.len(),
            pokedex.name
        );
        Ok(pokedex)
    }

    /// Fetch the national dex (every species).
    pub async fn fetch_national(&self) -> Result<Pokedex, ApiError> {
        self.fetch_pokedex("national").await
    }

    /// Fetch the pokedex backing a regional dex column.
    pub async fn fetch_regional(&self, dex: RegionalDex) -> Result<Pokedex, ApiError> {
        self.fetch_pokedex(dex.api_slug()).await
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
