// crates/atlas-core/src/geo/regions.rs
use super::{fallback_collection, parse_collection, Bounds, FeatureCollection, GeoFeature};
use crate::markup::Markup;
use serde::Serialize;

/// Where the drawn boundaries came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoSource {
    Remote,
    Fallback,
}

/// One clickable polygon on the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub bounds: Option<Bounds>,
}

impl Region {
    fn from_feature(f: &GeoFeature) -> Self {
        Self {
            name: f.name().to_string(),
            bounds: f.bounds(),
        }
    }

    /// Tooltip content: the name in bold, escaped.
    pub fn tooltip(&self) -> Markup {
        let mut m = Markup::new();
        m.element("b", &self.name);
        m
    }
}

/// The regions currently on the map.
///
/// `collection` holds only drawable features and `regions[i]` describes
/// `collection.features[i]`; the browser shell relies on that alignment
/// when it wires per-layer handlers in feature order.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionSet {
    pub source: GeoSource,
    pub collection: FeatureCollection,
    pub regions: Vec<Region>,
}

impl RegionSet {
    pub fn new(collection: FeatureCollection, source: GeoSource) -> Self {
        let features: Vec<GeoFeature> = collection
            .features
            .into_iter()
            .filter(GeoFeature::is_drawable)
            .collect();
        let regions = features.iter().map(Region::from_feature).collect();
        Self {
            source,
            collection: FeatureCollection { features },
            regions,
        }
    }

    pub fn fallback() -> Self {
        Self::new(fallback_collection(), GeoSource::Fallback)
    }

    /// Build from a fetched response body, or fall back.
    ///
    /// `None` means the fetch itself failed. A body that does not parse, is
    /// not a `FeatureCollection`, or contains nothing drawable also yields
    /// the embedded fallback.
    pub fn from_response(body: Option<&str>) -> Self {
        let Some(body) = body else {
            tracing::debug!("boundary fetch failed, using fallback geography");
            return Self::fallback();
        };
        match parse_collection(body) {
            Ok(fc) => {
                let set = Self::new(fc, GeoSource::Remote);
                if set.is_empty() {
                    tracing::debug!("boundary document has no drawable features, using fallback");
                    Self::fallback()
                } else {
                    set
                }
            }
            Err(e) => {
                tracing::debug!("boundary document rejected ({e}), using fallback");
                Self::fallback()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Index of the first region with the given display name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.name == name)
    }

    /// Bounds of the whole set, if any region has coordinates.
    pub fn bounds(&self) -> Option<Bounds> {
        self.regions
            .iter()
            .filter_map(|r| r.bounds)
            .reduce(Bounds::union)
    }
}
