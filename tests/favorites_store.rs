//! Favorites Store Integration Tests
//!
//! Persistence behaviour across store instances sharing one storage root.

use pokedex::favorites::FAVORITES_SLOT;
use pokedex::{Entry, FavoritesStore, SlotStorage};
use tempfile::TempDir;

fn entry(id: u32, name: &str, types: &[&str]) -> Entry {
    Entry {
        id,
        name: name.to_string(),
        image: Some(format!("https://img.test/art/{}.png", id)),
        types: types.iter().map(|t| t.to_string()).collect(),
        generation: pokedex::domain::generation_for(id),
    }
}

#[test]
fn test_empty_when_slot_absent() {
    let temp = TempDir::new().unwrap();
    let store = FavoritesStore::load(SlotStorage::new(temp.path()));

    assert!(store.is_empty());
    assert!(!store.is_favorite(1));
}

#[test]
fn test_round_trip_preserves_order() {
    let temp = TempDir::new().unwrap();

    let mut store = FavoritesStore::load(SlotStorage::new(temp.path()));
    store.add(entry(150, "mewtwo", &["psychic"])).unwrap();
    store.add(entry(1, "bulbasaur", &["grass", "poison"])).unwrap();
    store.add(entry(25, "pikachu", &["electric"])).unwrap();
    let saved = store.list().to_vec();
    drop(store);

    let reloaded = FavoritesStore::load(SlotStorage::new(temp.path()));
    assert_eq!(reloaded.list(), saved.as_slice());

    let ids: Vec<_> = reloaded.list().iter().map(|f| f.id).collect();
    assert_eq!(ids, [150, 1, 25]);
}

#[test]
fn test_remove_is_persisted() {
    let temp = TempDir::new().unwrap();

    let mut store = FavoritesStore::load(SlotStorage::new(temp.path()));
    store.add(entry(4, "charmander", &["fire"])).unwrap();
    store.add(entry(7, "squirtle", &["water"])).unwrap();
    assert!(store.remove(4).unwrap());

    let reloaded = FavoritesStore::load(SlotStorage::new(temp.path()));
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.is_favorite(7));
    assert!(!reloaded.is_favorite(4));
}

#[test]
fn test_slot_holds_json_array() {
    let temp = TempDir::new().unwrap();
    let storage = SlotStorage::new(temp.path());

    let mut store = FavoritesStore::load(storage.clone());
    store.add(entry(25, "pikachu", &["electric"])).unwrap();

    let raw = storage.read(FAVORITES_SLOT).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value[0]["id"], 25);
    assert_eq!(value[0]["name"], "pikachu");
    assert_eq!(value[0]["types"][0], "electric");
    assert_eq!(value[0]["generation"], 1);
}

#[test]
fn test_malformed_slot_is_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    let storage = SlotStorage::new(temp.path());
    storage.write(FAVORITES_SLOT, "{ not json").unwrap();

    let mut store = FavoritesStore::load(storage.clone());
    assert!(store.is_empty());

    // Next mutation overwrites the corrupt content
    store.add(entry(1, "bulbasaur", &["grass"])).unwrap();
    let reloaded = FavoritesStore::load(storage);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_wrong_shape_is_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    let storage = SlotStorage::new(temp.path());
    storage.write(FAVORITES_SLOT, r#"{"id": 1}"#).unwrap();

    assert!(FavoritesStore::load(storage).is_empty());
}

#[test]
fn test_double_add_single_element() {
    let temp = TempDir::new().unwrap();
    let mut store = FavoritesStore::load(SlotStorage::new(temp.path()));

    store.add(entry(25, "pikachu", &["electric"])).unwrap();
    store.add(entry(25, "pikachu", &["electric"])).unwrap();

    let reloaded = FavoritesStore::load(SlotStorage::new(temp.path()));
    assert_eq!(reloaded.len(), 1);
}
