// crates/atlas-core/src/config.rs

//! Site configuration.
//!
//! Every section deserializes with defaults, so a config file only needs the
//! keys it wants to change:
//!
//! ```rust
//! use atlas_core::config::AtlasConfig;
//!
//! let cfg: AtlasConfig = serde_json::from_str(r#"{"dashboard": {"state_param": "STATE/UT"}}"#).unwrap();
//! assert_eq!(cfg.dashboard.state_param, "STATE/UT");
//! assert_eq!(cfg.panel.min_spots, 10);
//! ```

use serde::{Deserialize, Serialize};

pub const TABLEAU_BASE: &str = "https://public.tableau.com/views/crimedataanalysis_17622781570350/Dashboard1?:language=en-US&publish=yes&:sid=&:redirect=auth&:display_count=n&:origin=viz_share_link";

/// Filter field name in the Tableau workbook.
pub const DEFAULT_STATE_PARAM: &str = "State/Ut";

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=1200&q=60";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub dashboard: DashboardConfig,
    pub panel: PanelConfig,
    pub map: MapConfig,
    pub intro: IntroConfig,
    pub endpoints: Endpoints,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub base_url: String,
    /// Query parameter key the dashboard filters states on.
    pub state_param: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: TABLEAU_BASE.to_string(),
            state_param: DEFAULT_STATE_PARAM.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Spots tab is padded with placeholders up to this many cards.
    pub min_spots: usize,
    pub max_spots: usize,
    pub placeholder_image: String,
    pub default_quote: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_spots: 10,
            max_spots: 30,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            default_quote: crate::tables::DEFAULT_QUOTE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// `[[south, west], [north, east]]`
    pub max_bounds: [[f64; 2]; 2],
    /// Zoom ceiling when fitting to a clicked region.
    pub focus_max_zoom: f64,
    /// Pixel padding when fitting to the whole collection.
    pub fit_padding: f64,
    pub tile_url: String,
    /// Tile layer opacity. `0.0` keeps the plain background and only the
    /// state outlines show.
    pub tile_opacity: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [22.0, 79.0],
            zoom: 5.0,
            min_zoom: 4.0,
            max_zoom: 10.0,
            max_bounds: [[6.5, 68.0], [37.5, 97.5]],
            focus_max_zoom: 8.0,
            fit_padding: 40.0,
            tile_url: "https://tiles.stadiamaps.com/tiles/alidade_smooth/{z}/{x}/{y}{r}.png"
                .to_string(),
            tile_opacity: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// Delay between pressing start and revealing the map.
    pub duration_ms: u32,
    /// Delay between successive clouds leaving the screen.
    pub cloud_stagger_ms: u32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3200,
            cloud_stagger_ms: 180,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub state_data: String,
    pub india_states: String,
    pub background_image: String,
    pub config: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            state_data: "/api/state-data".to_string(),
            india_states: "/api/india-states".to_string(),
            background_image: "/static/assets/map-bg.jpg".to_string(),
            config: "/api/config".to_string(),
        }
    }
}

#[cfg(feature = "json")]
impl AtlasConfig {
    /// Read a JSON config file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let reader = crate::loader::open_stream(path.as_ref())?;
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_default() {
        let cfg: AtlasConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, AtlasConfig::default());
    }

    #[test]
    fn round_trips_through_json() {
        let mut cfg = AtlasConfig::default();
        cfg.panel.min_spots = 12;
        let text = serde_json::to_string(&cfg).unwrap();
        let back: AtlasConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back.panel.min_spots, 12);
        assert_eq!(back.map.max_bounds, [[6.5, 68.0], [37.5, 97.5]]);
    }

    #[test]
    fn tiles_are_hidden_unless_configured() {
        assert_eq!(AtlasConfig::default().map.tile_opacity, 0.0);
        let cfg: AtlasConfig = serde_json::from_str(r#"{"map": {"tile_opacity": 0.6}}"#).unwrap();
        assert_eq!(cfg.map.tile_opacity, 0.6);
        assert_eq!(cfg.map.zoom, 5.0);
    }
}
