//! Pure reshaping from provider JSON into view models.

use crate::adapters::pokeapi::{ChainLink, FlavorText, Pokemon, Species};
use crate::domain::{generation_for, Entry, EntryDetail, EvolutionStep, Stat};

use super::CatalogError;

/// Extract the numeric id encoded in a resource URL.
///
/// Resource URLs look like `https://pokeapi.co/api/v2/pokemon/42/`; the id is
/// the last non-empty path segment.
pub fn id_from_resource_url(url: &str) -> Result<u32, CatalogError> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| CatalogError::InvalidResourceUrl(url.to_string()))
}

/// Flatten an evolution tree in pre-order: parent first, then each child
/// subtree in source order.
pub fn flatten_evolution_chain(root: &ChainLink) -> Result<Vec<EvolutionStep>, CatalogError> {
    let mut steps = Vec::new();
    let mut stack = vec![root];

    while let Some(link) = stack.pop() {
        steps.push(EvolutionStep {
            id: id_from_resource_url(&link.species.url)?,
            name: link.species.name.clone(),
        });
        // Reversed so the first child is popped next
        stack.extend(link.evolves_to.iter().rev());
    }

    Ok(steps)
}

/// First flavor text in `primary`, else first in `fallback`, else empty
pub fn resolve_description(entries: &[FlavorText], primary: &str, fallback: &str) -> String {
    let in_language = |language: &str| {
        entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.flavor_text.as_str())
            .filter(|text| !text.is_empty())
    };

    in_language(primary)
        .or_else(|| in_language(fallback))
        .unwrap_or_default()
        .to_string()
}

/// Summary entry from a full pokemon resource
pub fn entry_from_pokemon(pokemon: &Pokemon) -> Entry {
    Entry {
        id: pokemon.id,
        name: pokemon.name.clone(),
        image: pokemon.sprites.preferred_image(),
        types: type_names(pokemon),
        generation: generation_for(pokemon.id),
    }
}

/// Summary entry for a listing row. Identity comes from the row's URL,
/// not from the fetched resource.
pub fn entry_from_listing(id: u32, name: &str, pokemon: &Pokemon) -> Entry {
    Entry {
        id,
        name: name.to_string(),
        image: pokemon.sprites.preferred_image(),
        types: type_names(pokemon),
        generation: generation_for(id),
    }
}

/// Assemble the detail view
pub fn detail_from_parts(
    pokemon: &Pokemon,
    species: &Species,
    evolution_chain: Vec<EvolutionStep>,
    primary_locale: &str,
    fallback_locale: &str,
) -> EntryDetail {
    EntryDetail {
        entry: entry_from_pokemon(pokemon),
        stats: pokemon
            .stats
            .iter()
            .map(|slot| Stat {
                name: slot.stat.name.clone(),
                value: slot.base_stat,
            })
            .collect(),
        height: pokemon.height,
        weight: pokemon.weight,
        description: resolve_description(
            &species.flavor_text_entries,
            primary_locale,
            fallback_locale,
        ),
        evolution_chain,
    }
}

fn type_names(pokemon: &Pokemon) -> Vec<String> {
    pokemon.types.iter().map(|t| t.kind.name.clone()).collect()
}
