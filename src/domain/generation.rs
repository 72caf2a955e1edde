//! Generation buckets.
//!
//! The table is tied to the upstream dataset's national numbering. Each
//! threshold is the last id (inclusive) belonging to that generation.

/// Upper bound (inclusive) for generations 1 through 8
const GENERATION_THRESHOLDS: [(u32, u8); 8] = [
    (151, 1),
    (251, 2),
    (386, 3),
    (493, 4),
    (649, 5),
    (721, 6),
    (809, 7),
    (905, 8),
];

/// Anything past the last threshold
const LATEST_GENERATION: u8 = 9;

/// Map an entry id to its generation number
pub fn generation_for(id: u32) -> u8 {
    GENERATION_THRESHOLDS
        .iter()
        .find(|(threshold, _)| id <= *threshold)
        .map(|(_, generation)| *generation)
        .unwrap_or(LATEST_GENERATION)
}
