//! Executes controller [`Effect`]s against the page.
//!
//! The controller lives in a thread-local and is only borrowed while an
//! event is handled; effects run afterwards, so callbacks they register
//! may dispatch again without tripping the `RefCell`.

use crate::dom;
use crate::leaflet;
use atlas_core::geo::{Bounds, FeatureCollection, GeoSource, MapOptions, TileLayerOptions};
use atlas_core::intro::{IntroPlan, StyleStep};
use atlas_core::loader::parse_state_table;
use atlas_core::{Atlas, AtlasConfig, Effect, PanelView, Tab, UiEvent};
use gloo_net::http::{Method, Request, RequestBuilder};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

thread_local! {
    static ATLAS: RefCell<Atlas> = RefCell::new(Atlas::default());
    static MAP: RefCell<Option<MapView>> = const { RefCell::new(None) };
}

struct MapView {
    map: leaflet::Map,
    geo: Option<leaflet::GeoJson>,
    /// Indexed like the controller's regions.
    layers: Vec<leaflet::Path>,
}

/// Feed one event to the controller and run what comes back.
pub fn dispatch(event: UiEvent) {
    let effects = ATLAS.with(|a| a.borrow_mut().handle(event));
    for effect in effects {
        apply(effect);
    }
}

/// Run `f` against the controller without dispatching anything.
pub fn with_atlas<R>(f: impl FnOnce(&mut Atlas) -> R) -> R {
    ATLAS.with(|a| f(&mut a.borrow_mut()))
}

fn config() -> AtlasConfig {
    ATLAS.with(|a| a.borrow().config().clone())
}

pub fn apply(effect: Effect) {
    match effect {
        Effect::PlayIntro(plan) => play_intro(plan),
        Effect::RevealMap => reveal_map(),
        Effect::InitMap => init_map(),
        Effect::DrawRegions { collection, source } => draw_regions(&collection, source),
        Effect::FitBounds {
            bounds,
            max_zoom,
            padding,
        } => fit_bounds(bounds, max_zoom, padding),
        Effect::SetMapBackground(url) => {
            if let Some(el) = dom::by_id("map") {
                dom::toggle_class(&el, "has-bg", true);
                dom::set_styles(&el, [("background-image", format!("url('{url}')").as_str())]);
            }
        }
        Effect::Highlight { region, style } => with_layer(region, |_, layer| {
            layer.set_style(&to_js(&style));
        }),
        Effect::ShowTooltip {
            region,
            html,
            options,
        } => with_layer(region, |_, layer| {
            layer.bind_tooltip(&html, &to_js(&options)).open_tooltip();
        }),
        Effect::ResetStyle { region } => with_layer(region, |view, layer| {
            if let Some(geo) = &view.geo {
                geo.reset_style(layer);
            }
        }),
        Effect::HideTooltip { region } => with_layer(region, |_, layer| {
            layer.close_tooltip();
        }),
        Effect::ShowPanel(view) => show_panel(&view),
        Effect::HidePanel => hide_panel(),
    }
}

// ========== Landing ==========

fn apply_step(el: HtmlElement, step: StyleStep) {
    let run = move || {
        dom::set_styles(&el, step.properties.iter().map(|(k, v)| (*k, v.as_str())));
    };
    if step.delay_ms == 0 {
        run();
    } else {
        dom::set_timeout(step.delay_ms, run);
    }
}

fn play_intro(plan: IntroPlan) {
    if let Some(plane) = dom::by_id("plane") {
        apply_step(plane, plan.plane);
    }
    for (cloud, step) in dom::query_all(".cloud").into_iter().zip(plan.clouds) {
        apply_step(cloud, step);
    }
    if let Some(card) = dom::by_id("welcomeCard") {
        apply_step(card, plan.welcome);
    }
    dom::set_timeout(plan.reveal_after_ms, || dispatch(UiEvent::IntroFinished));
}

fn reveal_map() {
    if let Some(landing) = dom::by_id("landing") {
        dom::set_styles(&landing, [("display", "none")]);
    }
    if let Some(reveal) = dom::by_id("mapReveal") {
        dom::toggle_class(&reveal, "visible", true);
        dom::set_styles(&reveal, [("opacity", "1")]);
    }
}

// ========== Map ==========

fn init_map() {
    let cfg = config();
    let map_cfg = &cfg.map;

    let map = leaflet::map("map", &to_js(&MapOptions::from(map_cfg)));
    map.set_view(&to_js(&map_cfg.center), map_cfg.zoom);
    leaflet::tile_layer(&map_cfg.tile_url, &to_js(&TileLayerOptions::from(map_cfg))).add_to(&map);

    let max_bounds = to_js(&map_cfg.max_bounds);
    map.set_max_bounds(&max_bounds);
    let dragged = map.clone();
    let on_drag = Closure::<dyn FnMut()>::new(move || {
        let opts = js_sys::Object::new();
        set(&opts, "animate", &JsValue::FALSE);
        dragged.pan_inside_bounds(&max_bounds, &opts);
    });
    map.on("drag", on_drag.as_ref().unchecked_ref());
    on_drag.forget();

    MAP.with(|m| {
        *m.borrow_mut() = Some(MapView {
            map,
            geo: None,
            layers: Vec::new(),
        })
    });

    let geography = cfg.endpoints.india_states.clone();
    spawn_local(async move {
        let event = match fetch_text(&geography).await {
            Ok(body) => UiEvent::GeographyLoaded(body),
            Err(e) => {
                dom::warn(&format!("boundaries unavailable, using fallback: {e}"));
                UiEvent::GeographyFailed
            }
        };
        dispatch(event);
    });

    let background = cfg.endpoints.background_image.clone();
    spawn_local(async move {
        let found = match RequestBuilder::new(&background).method(Method::HEAD).send().await {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        };
        dispatch(UiEvent::BackgroundProbed(found));
    });
}

fn draw_regions(collection: &FeatureCollection, source: GeoSource) {
    let Some(map) = MAP.with(|m| m.borrow().as_ref().map(|v| v.map.clone())) else {
        dom::warn("regions arrived before the map existed");
        return;
    };
    if source == GeoSource::Fallback {
        dom::log("drawing fallback boundaries");
    }

    let layers: Rc<RefCell<Vec<leaflet::Path>>> = Rc::default();
    let collected = Rc::clone(&layers);
    let on_each = Closure::<dyn FnMut(JsValue, leaflet::Path)>::new(
        move |_feature: JsValue, layer: leaflet::Path| {
            let index = collected.borrow().len();
            bind_region_events(&layer, index);
            collected.borrow_mut().push(layer);
        },
    );

    let options = js_sys::Object::new();
    set(&options, "style", &to_js(&atlas_core::geo::PathStyle::region()));
    set(&options, "onEachFeature", on_each.as_ref());

    let geo = leaflet::geo_json(&to_js(collection), &options).add_to(&map);
    drop(on_each);

    let layers = layers.take();
    MAP.with(|m| {
        if let Some(view) = m.borrow_mut().as_mut() {
            view.geo = Some(geo);
            view.layers = layers;
        }
    });
}

fn bind_region_events(layer: &leaflet::Path, index: usize) {
    let handlers: [(&str, fn(usize) -> UiEvent); 3] = [
        ("mouseover", UiEvent::RegionHovered),
        ("mouseout", UiEvent::RegionLeft),
        ("click", UiEvent::RegionClicked),
    ];
    for (name, event) in handlers {
        let cb = Closure::<dyn FnMut()>::new(move || dispatch(event(index)));
        layer.on(name, cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

fn fit_bounds(bounds: Bounds, max_zoom: Option<f64>, padding: Option<f64>) {
    MAP.with(|m| {
        let Some(view) = m.borrow().as_ref().map(|v| v.map.clone()) else {
            return;
        };
        let options = js_sys::Object::new();
        if let Some(zoom) = max_zoom {
            set(&options, "maxZoom", &zoom.into());
        }
        if let Some(px) = padding {
            set(&options, "padding", &to_js(&[px, px]));
        }
        view.fit_bounds(&to_js(&bounds.corners()), &options);
    });
}

fn with_layer(region: usize, f: impl FnOnce(&MapView, &leaflet::Path)) {
    MAP.with(|m| {
        if let Some(view) = m.borrow().as_ref() {
            if let Some(layer) = view.layers.get(region) {
                f(view, layer);
            }
        }
    });
}

// ========== Panel ==========

fn show_panel(view: &PanelView) {
    if let Some(title) = dom::by_id("stateName") {
        title.set_text_content(Some(&view.title));
    }
    for button in dom::query_all(".panelButtons button[data-tab]") {
        let active = button
            .get_attribute("data-tab")
            .and_then(|t| t.parse::<Tab>().ok())
            == Some(view.tab);
        dom::toggle_class(&button, "active", active);
    }
    if let Some(content) = dom::by_id("panelContent") {
        content.set_inner_html(&view.body);
    }
    if let Some(panel) = dom::by_id("infoPanel") {
        dom::toggle_class(&panel, "open", true);
        let _ = panel.set_attribute("aria-hidden", "false");
    }
}

fn hide_panel() {
    if let Some(panel) = dom::by_id("infoPanel") {
        dom::toggle_class(&panel, "open", false);
        let _ = panel.set_attribute("aria-hidden", "true");
    }
}

// ========== Wiring and fetches ==========

/// Attach the page's static handlers and start the background fetches.
pub fn boot() {
    if let Some(start) = dom::by_id("startBtn") {
        dom::on_click(&start, || {
            let clouds = dom::query_all(".cloud").len();
            dispatch(UiEvent::StartClicked { clouds });
        });
    }
    if let Some(close) = dom::by_id("closePanel") {
        dom::on_click(&close, || dispatch(UiEvent::CloseClicked));
    }
    for button in dom::query_all(".panelButtons button[data-tab]") {
        let Some(tab) = button
            .get_attribute("data-tab")
            .and_then(|t| t.parse::<Tab>().ok())
        else {
            continue;
        };
        dom::on_click(&button, move || dispatch(UiEvent::TabSelected(tab)));
    }

    let endpoints = config().endpoints;
    let config_url = endpoints.config.clone();
    spawn_local(async move {
        match fetch_text(&config_url).await {
            Ok(body) => match serde_json::from_str::<AtlasConfig>(&body) {
                Ok(cfg) => dispatch(UiEvent::ConfigLoaded(cfg)),
                Err(e) => dom::warn(&format!("ignoring malformed config: {e}")),
            },
            Err(e) => dom::log(&format!("no site config, using defaults: {e}")),
        }
    });
    spawn_local(async move {
        let event = match fetch_text(&endpoints.state_data).await {
            Ok(body) => match parse_state_table(&body) {
                Ok(table) => UiEvent::StateDataLoaded(table),
                Err(e) => {
                    dom::warn(&format!("state data malformed, using bundled tables: {e}"));
                    UiEvent::StateDataFailed
                }
            },
            Err(e) => {
                dom::warn(&format!("state data unavailable, using bundled tables: {e}"));
                UiEvent::StateDataFailed
            }
        };
        dispatch(event);
    });
}

async fn fetch_text(url: &str) -> Result<String, gloo_net::Error> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "{url} answered {}",
            resp.status()
        )));
    }
    resp.text().await
}

// ========== JS values ==========

/// Plain JS objects rather than `Map`s, which is what Leaflet expects.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}
