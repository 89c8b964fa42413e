use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use atlas_wasm::{bundled_states, render_panel_html, resolve_feature_name};

#[wasm_bindgen_test]
fn renders_bundled_kerala_helplines() {
    let html = render_panel_html("Kerala", "precautions").unwrap();
    assert!(html.contains("<li><strong>Police:</strong> 112</li>"));
}

#[wasm_bindgen_test]
fn short_tab_alias_is_accepted() {
    assert!(render_panel_html("Goa", "prec").is_ok());
    assert!(render_panel_html("Goa", "weather").is_err());
}

#[wasm_bindgen_test]
fn feature_names_follow_key_order() {
    let props = js_sys::Object::new();
    js_sys::Reflect::set(&props, &"name".into(), &"Goa".into()).unwrap();
    js_sys::Reflect::set(&props, &"ST_NM".into(), &"Kerala".into()).unwrap();
    assert_eq!(resolve_feature_name(props.into()), "Kerala");
    assert_eq!(resolve_feature_name(JsValue::NULL), "Unknown");
}

#[wasm_bindgen_test]
fn bundled_state_list_is_an_array() {
    let names = js_sys::Array::from(&bundled_states());
    assert!(names.length() >= 10);
}
