//! Catalog client.
//!
//! Turns the provider's resource graph into view models. Each public
//! operation is a single call from the caller's point of view but may fan
//! out to several requests:
//!
//! ```text
//! fetch_list    : listing ──┬─> pokemon/1 ─┐
//!                           ├─> pokemon/2 ─┼─> Page (listing order)
//!                           └─> pokemon/n ─┘
//! fetch_details : pokemon ─┬─> EntryDetail
//!                 species ─┴─> evolution-chain (only if referenced)
//! ```
//!
//! Nothing is cached: repeated calls re-fetch.

pub mod mapping;

use std::sync::Arc;

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::adapters::pokeapi::{
    EvolutionChain, NamedResource, Pokemon, ResourceList, Species, DEFAULT_BASE_URL,
};
use crate::adapters::Transport;
use crate::domain::{Entry, EntryDetail, Page};

pub use mapping::{flatten_evolution_chain, id_from_resource_url, resolve_description};

/// Categories the provider lists that are not real gameplay types
pub const EXCLUDED_TYPES: [&str; 2] = ["stellar", "unknown"];

/// Page size used when the caller has no preference
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Errors surfaced by the catalog client
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("Malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No numeric id in resource URL: {0}")]
    InvalidResourceUrl(String),
}

impl CatalogError {
    /// Whether the upstream reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Status { status: 404, .. })
    }
}

/// Locale and endpoint settings for the catalog client
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    /// API root, without trailing slash
    pub base_url: String,

    /// Description language tried first
    pub primary_locale: String,

    /// Description language tried when the primary has no entry
    pub fallback_locale: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            primary_locale: "fr".to_string(),
            fallback_locale: "en".to_string(),
        }
    }
}

/// Stateless client for the remote catalog
#[derive(Clone)]
pub struct CatalogClient {
    transport: Arc<dyn Transport>,
    settings: CatalogSettings,
}

impl CatalogClient {
    /// Create a client over the given transport
    pub fn new(transport: Arc<dyn Transport>, settings: CatalogSettings) -> Self {
        let settings = CatalogSettings {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            ..settings
        };

        Self {
            transport,
            settings,
        }
    }

    /// Fetch one page of summaries.
    ///
    /// Details for every row are fetched concurrently; the first failure
    /// fails the whole page.
    #[instrument(skip(self))]
    pub async fn fetch_list(&self, limit: u32, offset: u32) -> Result<Page, CatalogError> {
        let url = format!(
            "{}/pokemon?limit={}&offset={}",
            self.settings.base_url, limit, offset
        );
        let listing: ResourceList = self.get(&url).await?;

        let rows = listing.results.iter().map(|row| self.fetch_row(row));
        let results = try_join_all(rows).await?;

        debug!(count = results.len(), total = listing.count, "Fetched page");

        Ok(Page {
            results,
            has_more: listing.next.is_some(),
            total: listing.count,
        })
    }

    /// Fetch the full detail view for one entry
    #[instrument(skip(self))]
    pub async fn fetch_details(&self, id: u32) -> Result<EntryDetail, CatalogError> {
        let pokemon_url = format!("{}/pokemon/{}", self.settings.base_url, id);
        let species_url = format!("{}/pokemon-species/{}", self.settings.base_url, id);

        let (pokemon, species) = tokio::try_join!(
            self.get::<Pokemon>(&pokemon_url),
            self.get::<Species>(&species_url)
        )?;

        let evolution_chain = match &species.evolution_chain {
            Some(resource) => {
                let chain: EvolutionChain = self.get(&resource.url).await?;
                flatten_evolution_chain(&chain.chain)?
            }
            None => {
                debug!(id, "Species has no evolution chain");
                Vec::new()
            }
        };

        Ok(mapping::detail_from_parts(
            &pokemon,
            &species,
            evolution_chain,
            &self.settings.primary_locale,
            &self.settings.fallback_locale,
        ))
    }

    /// Look up a single entry by exact name or numeric id.
    ///
    /// Never fails: not-found and every other error yield `None`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Option<Entry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        // Names are [a-z0-9-]; anything else cannot match and must not alter the path
        if !needle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            debug!(query = %needle, "Query cannot name a resource");
            return None;
        }

        let url = format!("{}/pokemon/{}", self.settings.base_url, needle);
        match self.get::<Pokemon>(&url).await {
            Ok(pokemon) => Some(mapping::entry_from_pokemon(&pokemon)),
            Err(e) if e.is_not_found() => {
                debug!(query = %needle, "No match");
                None
            }
            Err(e) => {
                warn!(query = %needle, error = %e, "Search failed");
                None
            }
        }
    }

    /// All gameplay type names, in provider order
    #[instrument(skip(self))]
    pub async fn list_types(&self) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/type", self.settings.base_url);
        let listing: ResourceList = self.get(&url).await?;

        Ok(listing
            .results
            .into_iter()
            .map(|t| t.name)
            .filter(|name| !EXCLUDED_TYPES.contains(&name.as_str()))
            .collect())
    }

    /// Resolve one listing row into a summary
    async fn fetch_row(&self, row: &NamedResource) -> Result<Entry, CatalogError> {
        let id = id_from_resource_url(&row.url)?;
        let pokemon: Pokemon = self.get(&row.url).await?;
        Ok(mapping::entry_from_listing(id, &row.name, &pokemon))
    }

    /// GET and decode into a provider shape
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let value = self.transport.get_json(url).await?;
        serde_json::from_value(value).map_err(|source| CatalogError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
