//! Catalog view models.
//!
//! These are derived from remote resources on every fetch and never cached.
//! Only [`Entry`] is ever persisted (as a [`Favorite`]).

use serde::{Deserialize, Serialize};

/// Summary shape of a catalog entry, used by list views and search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Numeric identity (always positive)
    pub id: u32,

    /// Lowercase resource name
    pub name: String,

    /// Artwork URL, falling back to the default sprite
    pub image: Option<String>,

    /// Type names in API order
    pub types: Vec<String>,

    /// Generation bucket derived from `id`
    pub generation: u8,
}

/// A bookmarked entry, stored verbatim
pub type Favorite = Entry;

/// Full shape of a catalog entry, used by the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDetail {
    #[serde(flatten)]
    pub entry: Entry,

    /// Base stats in API order
    pub stats: Vec<Stat>,

    /// Height in decimetres
    pub height: u32,

    /// Weight in hectograms
    pub weight: u32,

    /// Flavor text in the preferred locale, empty if none matched
    pub description: String,

    /// Pre-order flattening of the evolution tree, root first
    pub evolution_chain: Vec<EvolutionStep>,
}

impl EntryDetail {
    /// The summary shape of this entry, suitable for bookmarking
    pub fn summary(&self) -> Entry {
        self.entry.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStep {
    pub id: u32,
    pub name: String,
}

/// One page of the catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Entries in upstream order
    pub results: Vec<Entry>,

    /// Whether the upstream listing has a next page
    pub has_more: bool,

    /// Total number of entries upstream, independent of paging
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Entry {
        Entry {
            id: 1,
            name: "bulbasaur".to_string(),
            image: Some("https://img.example/1.png".to_string()),
            types: vec!["grass".to_string(), "poison".to_string()],
            generation: 1,
        }
    }

    #[test]
    fn test_detail_serializes_flat_camel_case() {
        let detail = EntryDetail {
            entry: bulbasaur(),
            stats: vec![Stat {
                name: "hp".to_string(),
                value: 45,
            }],
            height: 7,
            weight: 69,
            description: String::new(),
            evolution_chain: vec![EvolutionStep {
                id: 1,
                name: "bulbasaur".to_string(),
            }],
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["types"][1], "poison");
        assert_eq!(json["evolutionChain"][0]["name"], "bulbasaur");
        assert!(json.get("entry").is_none());
        assert_eq!(detail.summary(), bulbasaur());
    }

    #[test]
    fn test_entry_without_image_uses_null() {
        let mut entry = bulbasaur();
        entry.image = None;

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"image\":null"));

        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
