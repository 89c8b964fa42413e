//! Small web-sys helpers. Missing elements are logged and skipped; the page
//! keeps working with whatever parts of the markup are present.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    let el = document()?.get_element_by_id(id);
    if el.is_none() {
        log(&format!("#{id} not found"));
    }
    el.and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_styles<'a, I>(el: &HtmlElement, properties: I)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let style = el.style();
    for (name, value) in properties {
        let _ = style.set_property(name, value);
    }
}

pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Attach a click handler for the lifetime of the page.
pub fn on_click(el: &Element, mut handler: impl FnMut() + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(move |_e: Event| handler());
    if el
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .is_err()
    {
        log("failed to attach click handler");
    }
    cb.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    let delay = i32::try_from(ms).unwrap_or(i32::MAX);
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)
        .is_err()
    {
        log("setTimeout failed");
    }
}

pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}
