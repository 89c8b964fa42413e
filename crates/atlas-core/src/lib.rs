// crates/atlas-core/src/lib.rs

//! # atlas-core
//!
//! Everything behind the India Atlas map site that is not DOM or HTTP:
//! the state tables, the GeoJSON model, the panel state machine, escaped
//! panel rendering, the intro sequence and the controller tying them
//! together.
//!
//! ```rust
//! use atlas_core::prelude::*;
//!
//! let mut atlas = Atlas::default();
//! atlas.handle(UiEvent::GeographyFailed); // embedded five-state fallback
//! let kerala = atlas.regions().unwrap().position("Kerala").unwrap();
//!
//! let effects = atlas.handle(UiEvent::RegionClicked(kerala));
//! assert!(effects.iter().any(|e| matches!(e, Effect::ShowPanel(v) if v.title == "Kerala")));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod atlas;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod geo;
pub mod intro;
pub mod loader;
pub mod markup;
pub mod model;
pub mod panel;
pub mod prelude;
pub mod render;
pub mod tables;
pub mod text;

// Re-exports
pub use crate::atlas::{Atlas, Effect, UiEvent};
pub use crate::config::AtlasConfig;
pub use crate::error::{AtlasError, Result};
pub use crate::model::{Helpline, LayeredTable, Spot, StateLookup, StateRecord, StateTable};
pub use crate::panel::{Panel, Tab};
pub use crate::render::{render_panel, render_tab, PanelView};
