//! Favorites store.
//!
//! A single ordered set of bookmarked entries, unique by id, in bookmarking
//! order. The set is loaded once from a named storage slot and written back
//! in full after every mutation.
//!
//! The store is constructed once at startup and handed to whoever needs it.
//! Observers that want to react to changes call [`FavoritesStore::subscribe`].

pub mod storage;

use std::collections::HashSet;

use thiserror::Error;
use tokio::sync::watch;

use crate::domain::{Entry, Favorite};

pub use storage::SlotStorage;

/// Storage slot holding the serialized set
pub const FAVORITES_SLOT: &str = "pokedex-favorites";

/// Errors that can occur when persisting favorites
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Process-wide favorites set backed by a storage slot
pub struct FavoritesStore {
    storage: SlotStorage,
    items: Vec<Favorite>,
    changes: watch::Sender<Vec<Favorite>>,
}

impl FavoritesStore {
    /// Load the set from storage.
    ///
    /// Absent, unreadable, or malformed content yields an empty set.
    pub fn load(storage: SlotStorage) -> Self {
        let items = match storage.read(FAVORITES_SLOT) {
            Ok(Some(content)) => parse_favorites(&content),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites, starting empty: {}", e);
                Vec::new()
            }
        };

        tracing::debug!(count = items.len(), "Loaded favorites");

        let (changes, _) = watch::channel(items.clone());
        Self {
            storage,
            items,
            changes,
        }
    }

    /// Current favorites in bookmarking order
    pub fn list(&self) -> &[Favorite] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bookmark an entry. Returns `false` if its id was already present.
    ///
    /// The in-memory set only changes once the write has succeeded.
    pub fn add(&mut self, entry: Entry) -> Result<bool, FavoritesError> {
        if self.is_favorite(entry.id) {
            return Ok(false);
        }

        let mut next = self.items.clone();
        next.push(entry);
        self.commit(next)?;
        Ok(true)
    }

    /// Remove the favorite with `id`. Returns `false` if none matched,
    /// in which case storage is left untouched.
    pub fn remove(&mut self, id: u32) -> Result<bool, FavoritesError> {
        if !self.is_favorite(id) {
            return Ok(false);
        }

        let next: Vec<Favorite> = self
            .items
            .iter()
            .filter(|f| f.id != id)
            .cloned()
            .collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Membership test by id
    pub fn is_favorite(&self, id: u32) -> bool {
        self.items.iter().any(|f| f.id == id)
    }

    /// Add if absent, remove if present. Returns whether it is now a favorite.
    pub fn toggle(&mut self, entry: Entry) -> Result<bool, FavoritesError> {
        if self.is_favorite(entry.id) {
            self.remove(entry.id)?;
            Ok(false)
        } else {
            self.add(entry)?;
            Ok(true)
        }
    }

    /// Receive the full set after every mutation
    pub fn subscribe(&self) -> watch::Receiver<Vec<Favorite>> {
        self.changes.subscribe()
    }

    /// Write `next` to the slot, then adopt it and notify observers
    fn commit(&mut self, next: Vec<Favorite>) -> Result<(), FavoritesError> {
        let content = serde_json::to_string(&next)?;
        self.storage.write(FAVORITES_SLOT, &content)?;

        self.items = next;
        self.changes.send_replace(self.items.clone());
        Ok(())
    }
}

/// Decode stored content, keeping the first occurrence of each id
fn parse_favorites(content: &str) -> Vec<Favorite> {
    let parsed: Vec<Favorite> = match serde_json::from_str(content) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Ignoring malformed favorites: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    parsed.into_iter().filter(|f| seen.insert(f.id)).collect()
}
