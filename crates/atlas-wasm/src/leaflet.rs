//! Minimal Leaflet bindings: just the calls the shell makes.
//!
//! Leaflet is loaded as a classic script, so everything hangs off the
//! global `L` namespace.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(container_id: &str, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = setMaxBounds)]
    pub fn set_max_bounds(this: &Map, bounds: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = panInsideBounds)]
    pub fn pan_inside_bounds(this: &Map, bounds: &JsValue, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &JsValue, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[derive(Debug, Clone)]
    pub type GeoJson;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON)]
    pub fn geo_json(data: &JsValue, options: &JsValue) -> GeoJson;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &GeoJson, map: &Map) -> GeoJson;

    #[wasm_bindgen(method, js_name = resetStyle)]
    pub fn reset_style(this: &GeoJson, layer: &Path) -> GeoJson;

    /// A vector layer, one per drawn feature.
    #[derive(Debug, Clone)]
    pub type Path;

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &Path, style: &JsValue) -> Path;

    #[wasm_bindgen(method, js_name = bindTooltip)]
    pub fn bind_tooltip(this: &Path, content: &str, options: &JsValue) -> Path;

    #[wasm_bindgen(method, js_name = openTooltip)]
    pub fn open_tooltip(this: &Path) -> Path;

    #[wasm_bindgen(method, js_name = closeTooltip)]
    pub fn close_tooltip(this: &Path) -> Path;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on(this: &Path, event: &str, handler: &js_sys::Function) -> Path;
}
