// crates/atlas-core/src/geo/fallback.rs
use super::{FeatureCollection, GeoFeature, Position, Properties};
use serde_json::Value;

/// Coarse outlines for five states, `(name, ring as [lon, lat])`.
const FALLBACK_STATES: [(&str, &[[f64; 2]]); 5] = [
    (
        "Karnataka",
        &[[74.0, 18.0], [76.5, 18.0], [78.0, 15.0], [75.0, 12.0], [73.0, 14.0], [74.0, 18.0]],
    ),
    (
        "Maharashtra",
        &[[72.0, 22.0], [79.5, 22.0], [79.5, 16.0], [72.0, 16.0], [72.0, 22.0]],
    ),
    (
        "Kerala",
        &[[74.5, 12.5], [77.0, 12.5], [77.0, 8.5], [74.5, 8.5], [74.5, 12.5]],
    ),
    (
        "Tamil Nadu",
        &[[77.0, 12.5], [80.5, 12.5], [80.5, 8.5], [77.0, 8.5], [77.0, 12.5]],
    ),
    (
        "Delhi",
        &[[76.9, 28.7], [77.4, 28.7], [77.4, 28.4], [76.9, 28.4], [76.9, 28.7]],
    ),
];

/// Minimal boundary set drawn when the real one is unavailable, so the map
/// always has something clickable.
pub fn fallback_collection() -> FeatureCollection {
    let features = FALLBACK_STATES
        .iter()
        .map(|(name, ring)| {
            let mut props = Properties::new();
            props.insert("name".into(), Value::from(*name));
            props.insert("STATE/UT".into(), Value::from(*name));
            let ring: Vec<Position> = ring.iter().map(|p| p.to_vec()).collect();
            GeoFeature::polygon(props, ring)
        })
        .collect();
    FeatureCollection { features }
}
