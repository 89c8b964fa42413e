// crates/atlas-core/src/geo/feature.rs
use crate::error::{AtlasError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Free-form GeoJSON `properties` bag.
pub type Properties = Map<String, Value>;

/// `[lon, lat]`, optionally followed by altitude.
pub type Position = Vec<f64>;

/// The geometry kinds a state boundary can take.
///
/// Anything else (points, lines, collections) is kept as `Unsupported` so a
/// stray feature does not invalidate the whole document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Every position of every ring, outer and inner.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Geometry::Polygon { coordinates } => Box::new(coordinates.iter().flatten()),
            Geometry::MultiPolygon { coordinates } => {
                Box::new(coordinates.iter().flatten().flatten())
            }
            Geometry::Unsupported => Box::new(std::iter::empty()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Geometry::Unsupported)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct GeoFeature {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Properties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl GeoFeature {
    pub fn polygon(properties: Properties, ring: Vec<Position>) -> Self {
        Self {
            properties,
            geometry: Some(Geometry::Polygon {
                coordinates: vec![ring],
            }),
        }
    }

    /// Display name, see [`super::resolve_name`].
    pub fn name(&self) -> &str {
        super::resolve_name(&self.properties)
    }

    pub fn bounds(&self) -> Option<super::Bounds> {
        self.geometry
            .as_ref()
            .and_then(|g| super::Bounds::from_positions(g.positions()))
    }

    /// Whether the map can draw this feature as an interactive polygon.
    pub fn is_drawable(&self) -> bool {
        self.geometry.as_ref().is_some_and(Geometry::is_supported)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<GeoFeature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Parse a document that must be a GeoJSON `FeatureCollection`.
///
/// Any other top-level object (including the `{}` the server returns when it
/// has no boundary file) is rejected with [`AtlasError::InvalidGeoJson`].
pub fn parse_collection(text: &str) -> Result<FeatureCollection> {
    let value: Value = serde_json::from_str(text)?;
    match value.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {}
        Some(other) => {
            return Err(AtlasError::InvalidGeoJson(format!(
                "expected FeatureCollection, found {other}"
            )))
        }
        None => {
            return Err(AtlasError::InvalidGeoJson(
                "document has no \"type\" member".to_string(),
            ))
        }
    }
    Ok(serde_json::from_value(value)?)
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Properties, D::Error> {
    Ok(Option::<Properties>::deserialize(d)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_collections() {
        assert!(matches!(
            parse_collection("{}"),
            Err(AtlasError::InvalidGeoJson(_))
        ));
        assert!(matches!(
            parse_collection(r#"{"type": "Feature", "properties": {}, "geometry": null}"#),
            Err(AtlasError::InvalidGeoJson(_))
        ));
        assert!(matches!(parse_collection("<html>"), Err(AtlasError::Json(_))));
    }

    #[test]
    fn tolerates_null_properties_and_odd_geometry() {
        let fc = parse_collection(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": null, "geometry": {"type": "Point", "coordinates": [77.0, 28.0]}},
                {"type": "Feature", "properties": {"ST_NM": "Goa"}, "geometry": null},
                {"type": "Feature", "properties": {"ST_NM": "Goa"},
                 "geometry": {"type": "MultiPolygon", "coordinates": [[[[73.7, 15.8], [74.3, 15.8], [74.3, 14.9], [73.7, 15.8]]]]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(fc.len(), 3);
        assert!(fc.features[0].properties.is_empty());
        assert_eq!(fc.features[0].geometry, Some(Geometry::Unsupported));
        assert!(!fc.features[0].is_drawable());
        assert!(!fc.features[1].is_drawable());
        assert!(fc.features[2].is_drawable());
        assert_eq!(fc.features[2].name(), "Goa");
    }
}
