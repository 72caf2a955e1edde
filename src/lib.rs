//! pokedex - catalog browser for the PokeAPI creature database
//!
//! Lists entries, shows details (stats, types, description, evolution
//! chain), searches by name or id, and keeps a locally persisted set of
//! favorites.
//!
//! # Modules
//!
//! - `adapters`: Remote API boundary (Transport, PokeAPI shapes)
//! - `catalog`: Aggregation of remote resources into view models
//! - `domain`: View models (Entry, EntryDetail, Page)
//! - `favorites`: Persisted favorites store
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! pokedex list --limit 20 --offset 0
//! pokedex show 25
//! pokedex favorites add pikachu
//! ```

pub mod adapters;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod favorites;

// Re-export main types at crate root for convenience
pub use adapters::{HttpTransport, Transport};
pub use catalog::{CatalogClient, CatalogError, CatalogSettings};
pub use domain::{Entry, EntryDetail, EvolutionStep, Favorite, Page, Stat};
pub use favorites::{FavoritesError, FavoritesStore, SlotStorage};
