//! Domain types for the pokedex.
//!
//! This module contains the view models handed to the presentation layer:
//! - Entry: list/search summary (also the stored Favorite shape)
//! - EntryDetail: full detail view
//! - Generation: id to era mapping

pub mod entry;
pub mod generation;

// Re-export commonly used types
pub use entry::{Entry, EntryDetail, EvolutionStep, Favorite, Page, Stat};
pub use generation::generation_for;
