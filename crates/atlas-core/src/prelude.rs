// crates/atlas-core/src/prelude.rs
pub use crate::atlas::{Atlas, Effect, UiEvent};
pub use crate::config::AtlasConfig;
pub use crate::error::{AtlasError, Result};
pub use crate::geo::{GeoSource, Region, RegionSet};
pub use crate::model::{StateLookup, StateRecord, StateTable};
pub use crate::panel::{Panel, Tab};
pub use crate::render::{render_panel, render_tab, PanelView};
pub use crate::tables::embedded;
