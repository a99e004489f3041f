//! Where the catalogue comes from.
//!
//! A source performs exactly one read and returns validated records. The
//! loader decides how often that read happens.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

use pokedex_core::{Pokemon, RegionalDex};

use crate::error::CatalogueError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// A readable catalogue resource.
#[allow(async_fn_in_trait)]
pub trait CatalogueSource {
    /// Human-readable location, for log messages.
    fn describe(&self) -> String;

    /// Read and validate the full catalogue.
    async fn fetch(&self) -> Result<Vec<Pokemon>, CatalogueError>;
}

/// A JSON catalogue file on local disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogueSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Pokemon>, CatalogueError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogueError::unavailable(format!("{}: {e}", self.path.display()))
        })?;
        parse_catalogue(&text)
    }
}

/// A JSON catalogue served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogueError> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

impl CatalogueSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Pokemon>, CatalogueError> {
        let resp = self.http.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogueError::unavailable(format!(
                "HTTP {} for {}",
                status, self.url
            )));
        }
        let text = resp.text().await?;
        parse_catalogue(&text)
    }
}

/// Either a file or a URL, chosen from a user-supplied location string.
#[derive(Debug, Clone)]
pub enum AnySource {
    File(JsonFileSource),
    Http(HttpSource),
}

impl AnySource {
    /// `http://` and `https://` locations are fetched; anything else is a path.
    pub fn from_location(location: &str) -> Result<Self, CatalogueError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Self::Http(HttpSource::new(location)?))
        } else {
            Ok(Self::File(JsonFileSource::new(location)))
        }
    }
}

impl CatalogueSource for AnySource {
    fn describe(&self) -> String {
        match self {
            Self::File(s) => s.describe(),
            Self::Http(s) => s.describe(),
        }
    }

    async fn fetch(&self) -> Result<Vec<Pokemon>, CatalogueError> {
        match self {
            Self::File(s) => s.fetch().await,
            Self::Http(s) => s.fetch().await,
        }
    }
}

/// Parse a JSON array of flat Pokemon records and validate it.
pub fn parse_catalogue(text: &str) -> Result<Vec<Pokemon>, CatalogueError> {
    let catalogue: Vec<Pokemon> =
        serde_json::from_str(text).map_err(|e| CatalogueError::malformed(e.to_string()))?;
    validate_catalogue(&catalogue)?;
    Ok(catalogue)
}

/// Check the cross-record invariants: unique national ids, and unique entry
/// numbers within each regional dex.
///
/// Per-record checks (positive ids and numbers, non-empty names) happen
/// during deserialization.
pub fn validate_catalogue(catalogue: &[Pokemon]) -> Result<(), CatalogueError> {
    let mut ids = HashSet::with_capacity(catalogue.len());
    let mut seen: HashMap<(RegionalDex, u32), u32> = HashMap::new();

    for pokemon in catalogue {
        if !ids.insert(pokemon.id) {
            return Err(CatalogueError::malformed(format!(
                "duplicate id {}",
                pokemon.id
            )));
        }
        for (&dex, &number) in &pokemon.dex_numbers {
            if let Some(other) = seen.insert((dex, number), pokemon.id) {
                return Err(CatalogueError::malformed(format!(
                    "Pokemon #{other} and #{} share {dex} number {number}",
                    pokemon.id
                )));
            }
        }
    }
    Ok(())
}
