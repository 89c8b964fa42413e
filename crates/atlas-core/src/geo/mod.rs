// crates/atlas-core/src/geo/mod.rs

//! # Geography Layer
//!
//! The GeoJSON side of the map: parsing boundary collections, resolving a
//! display name for every feature, computing bounds, and the embedded
//! fallback used when the boundary file cannot be fetched. Drawing is left
//! to the browser shell; this module only decides *what* is drawn and how
//! it reacts to hover and click.

mod bounds;
mod fallback;
mod feature;
mod naming;
mod regions;
mod style;

pub use bounds::Bounds;
pub use fallback::fallback_collection;
pub use feature::{parse_collection, FeatureCollection, GeoFeature, Geometry, Position, Properties};
pub use naming::{resolve_name, NAME_KEYS, UNKNOWN_NAME};
pub use regions::{GeoSource, Region, RegionSet};
pub use style::{MapOptions, PathStyle, TileLayerOptions, TooltipOptions};
