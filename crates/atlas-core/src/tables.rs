// crates/atlas-core/src/tables.rs

//! The built-in state tables.
//!
//! The JSON document in `data/state_data.json` is compiled into the crate
//! and parsed on first use. Remote data fetched at runtime is layered over
//! it with [`crate::model::LayeredTable`].

use crate::model::{Helpline, StateTable};
use once_cell::sync::Lazy;

static EMBEDDED_JSON: &str = include_str!("../data/state_data.json");

static EMBEDDED: Lazy<StateTable> = Lazy::new(|| match serde_json::from_str(EMBEDDED_JSON) {
    Ok(table) => table,
    Err(e) => {
        tracing::error!("embedded state table is malformed: {e}");
        StateTable::default()
    }
});

/// The compiled-in table, parsed once per process.
pub fn embedded() -> &'static StateTable {
    &EMBEDDED
}

/// Names used to synthesize filler spots, in the order they are used.
pub const PLACEHOLDER_SPOTS: [&str; 15] = [
    "Old Fort",
    "City Museum",
    "Central Park",
    "Sunset Point",
    "Riverfront Walk",
    "Heritage Street",
    "Grand Bazaar",
    "Botanical Garden",
    "Hill View",
    "Art District",
    "Lakeside Promenade",
    "Cultural Center",
    "Ancient Temple",
    "Cliff View",
    "Valley View",
];

pub const PLACEHOLDER_DESCRIPTION: &str = "A must-visit local favorite.";

pub const DEFAULT_QUOTE: &str = "Incredible India Awaits You!";

pub const DEFAULT_PRECAUTIONS: [&str; 2] = [
    "Stay aware in crowded places; keep valuables secured.",
    "Prefer verified transport and well-reviewed stays.",
];

/// Helplines shown when a state has none of its own.
pub fn default_helplines() -> Vec<Helpline> {
    vec![
        Helpline::new("Police", "112"),
        Helpline::new("Women Helpline", "181"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StateLookup;

    #[test]
    fn embedded_table_parses() {
        let t = embedded();
        assert!(t.len() >= 10, "expected the bundled states, got {}", t.len());
        let kerala = t.record("Kerala").expect("Kerala is bundled");
        assert!(kerala.spots.len() >= 10);
        assert!(kerala
            .helplines
            .iter()
            .any(|h| h.service == "Police" && h.number == "112"));
    }

    #[test]
    fn every_bundled_spot_has_a_name() {
        for (state, record) in embedded().iter() {
            assert!(!record.spots.is_empty(), "{state} has no spots");
            assert!(record.spots.iter().all(|s| !s.name.trim().is_empty()));
        }
    }
}
