use atlas_core::geo::{resolve_name, GeoSource, Properties, RegionSet, UNKNOWN_NAME};
use serde_json::json;

fn feature(props: serde_json::Value) -> serde_json::Value {
    json!({
        "type": "Feature",
        "properties": props,
        "geometry": {"type": "Polygon", "coordinates": [[[80.0, 20.0], [81.0, 20.0], [81.0, 21.0], [80.0, 20.0]]]}
    })
}

#[test]
fn mixed_naming_schemas_resolve() {
    let doc = json!({
        "type": "FeatureCollection",
        "features": [
            feature(json!({"ST_NM": "Odisha"})),
            feature(json!({"STATE/UT": "Assam", "ST_NM": "ASSAM"})),
            feature(json!({"State": "Bihar"})),
            feature(json!({"STATE_UT": "Punjab", "name": "punjab"})),
            feature(json!({"OBJECTID": 3})),
            feature(serde_json::Value::Null),
        ]
    });
    let set = RegionSet::from_response(Some(&doc.to_string()));
    assert_eq!(set.source, GeoSource::Remote);
    let names: Vec<_> = set.regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Odisha", "Assam", "Bihar", "Punjab", UNKNOWN_NAME, UNKNOWN_NAME]);
}

#[test]
fn unknown_only_when_no_key_is_usable() {
    let props: Properties = json!({"name": ""}).as_object().cloned().unwrap();
    assert_eq!(resolve_name(&props), UNKNOWN_NAME);
    let props: Properties = json!({"name": "", "State": "Goa"}).as_object().cloned().unwrap();
    assert_eq!(resolve_name(&props), "Goa");
}

#[test]
fn html_error_pages_fall_back() {
    let set = RegionSet::from_response(Some("<!doctype html><title>502</title>"));
    assert_eq!(set.source, GeoSource::Fallback);
    assert_eq!(set.len(), 5);
}
