//! PokeAPI response shapes.
//!
//! Field names follow the provider's JSON exactly. Only the fields the
//! catalog reads are modelled; everything else is ignored by serde.

use serde::Deserialize;

/// Default upstream endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// A `{name, url}` reference to another resource
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare `{url}` reference (used by species -> evolution chain)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// Paged listing (`/pokemon?limit=&offset=`, `/type`)
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList {
    pub count: u64,
    pub next: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `/pokemon/{id or name}`
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<SpriteSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// `/pokemon-species/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// `/evolution-chain/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

/// One node of the evolution tree
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl Sprites {
    /// Official artwork if present, else the default sprite
    pub fn preferred_image(&self) -> Option<String> {
        let artwork = self
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref());

        artwork
            .filter(|url| !url.is_empty())
            .or_else(|| self.front_default.as_deref().filter(|url| !url.is_empty()))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_parses_nested_wrappers() {
        let json = serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "sprites": {
                "front_default": "https://img.example/sprite/25.png",
                "other": {
                    "official-artwork": { "front_default": "https://img.example/art/25.png" },
                    "home": { "front_default": null }
                }
            },
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "https://x/type/13/" } }],
            "stats": [{ "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://x/stat/1/" } }]
        });

        let pokemon: Pokemon = serde_json::from_value(json).unwrap();
        assert_eq!(pokemon.types[0].kind.name, "electric");
        assert_eq!(pokemon.stats[0].base_stat, 35);
        assert_eq!(
            pokemon.sprites.preferred_image().as_deref(),
            Some("https://img.example/art/25.png")
        );
    }

    #[test]
    fn test_image_falls_back_to_default_sprite() {
        let sprites: Sprites = serde_json::from_value(serde_json::json!({
            "front_default": "https://img.example/sprite/1.png",
            "other": { "official-artwork": { "front_default": null } }
        }))
        .unwrap();
        assert_eq!(
            sprites.preferred_image().as_deref(),
            Some("https://img.example/sprite/1.png")
        );

        let bare: Sprites =
            serde_json::from_value(serde_json::json!({ "front_default": null })).unwrap();
        assert_eq!(bare.preferred_image(), None);
    }

    #[test]
    fn test_species_without_chain() {
        let species: Species =
            serde_json::from_value(serde_json::json!({ "evolution_chain": null })).unwrap();
        assert!(species.evolution_chain.is_none());
        assert!(species.flavor_text_entries.is_empty());
    }
}
