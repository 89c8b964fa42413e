// crates/atlas-core/src/geo/style.rs
use crate::config::MapConfig;
use serde::{Deserialize, Serialize};

/// Leaflet path options. Unset fields are left out so a partial style only
/// overrides what it names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
}

impl PathStyle {
    /// Resting look of every region.
    pub fn region() -> Self {
        Self {
            color: Some("#1e3a8a".into()),
            weight: Some(1.8),
            fill_color: Some("#e0f2fe".into()),
            fill_opacity: Some(0.7),
            dash_array: Some("3".into()),
        }
    }

    /// Applied on top of [`PathStyle::region`] while hovered.
    pub fn highlight() -> Self {
        Self {
            color: Some("#2563eb".into()),
            weight: Some(3.0),
            fill_opacity: Some(0.9),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub sticky: bool,
    pub direction: String,
    pub class_name: String,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            sticky: true,
            direction: "top".into(),
            class_name: "state-tip".into(),
        }
    }
}

/// Options for `L.map`. The attribution control is always off.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub zoom_control: bool,
    pub attribution_control: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_bounds_viscosity: f64,
}

impl From<&MapConfig> for MapOptions {
    fn from(cfg: &MapConfig) -> Self {
        Self {
            zoom_control: true,
            attribution_control: false,
            min_zoom: cfg.min_zoom,
            max_zoom: cfg.max_zoom,
            max_bounds_viscosity: 1.0,
        }
    }
}

/// Options for `L.tileLayer`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub opacity: f64,
    pub attribution: String,
}

impl From<&MapConfig> for TileLayerOptions {
    fn from(cfg: &MapConfig) -> Self {
        Self {
            min_zoom: cfg.min_zoom,
            max_zoom: cfg.max_zoom,
            opacity: cfg.tile_opacity,
            attribution: String::new(),
        }
    }
}
