//! atlas-wasm — browser shell for the India Atlas site
//!
//! The page's behaviour lives in `atlas-core`; this crate wires it to the
//! DOM and to Leaflet. On module load it attaches the landing, tab and
//! close handlers and starts fetching the site config and state data.
//! Everything after that is driven by [`atlas_core::Effect`]s returned from
//! the controller.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { open_state } from '/pkg/atlas_wasm.js';
//!
//! await init();          // wires the page
//! open_state('Kerala');  // same as clicking the region
//! ```
//!
//! Notes
//! -----
//! - Leaflet must be loaded before the module (`window.L`).
//! - The markup ids the shell expects are listed in `static/index.html`.

mod dom;
pub mod leaflet;
mod shell;

use atlas_core::geo::{resolve_name, Properties};
use atlas_core::{render_tab, Tab};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing India Atlas...".into());
    shell::boot();
}

/* --------------------------------------------------------------------------
   Page hooks
-------------------------------------------------------------------------- */

/// Open the info panel on a state, as a region click would.
#[wasm_bindgen]
pub fn open_state(name: &str) {
    let effects = shell::with_atlas(|atlas| atlas.open_state(name));
    for effect in effects {
        shell::apply(effect);
    }
}

#[wasm_bindgen]
pub fn close_panel() {
    shell::dispatch(atlas_core::UiEvent::CloseClicked);
}

/* --------------------------------------------------------------------------
   Pure helpers
-------------------------------------------------------------------------- */

/// Panel body for one state and tab, using the data fetched so far.
#[wasm_bindgen]
pub fn render_panel_html(state: &str, tab: &str) -> Result<String, JsValue> {
    let tab: Tab = tab.parse().map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(shell::with_atlas(|atlas| {
        render_tab(state, tab, &atlas.tables(), atlas.config()).body
    }))
}

/// Display name of a GeoJSON feature's `properties` object.
#[wasm_bindgen]
pub fn resolve_feature_name(properties: JsValue) -> String {
    let props: Properties = serde_wasm_bindgen::from_value(properties).unwrap_or_default();
    resolve_name(&props).to_string()
}

/// Names of the states with bundled content.
#[wasm_bindgen]
pub fn bundled_states() -> JsValue {
    let names: Vec<&str> = atlas_core::tables::embedded().names().collect();
    shell::to_js(&names)
}
