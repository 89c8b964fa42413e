// crates/atlas-core/src/geo/naming.rs
use super::Properties;
use serde_json::Value;

/// Property keys that may carry a state's display name, highest priority
/// first.
///
/// Boundary files in circulation disagree: census-derived sets use
/// `ST_NM`, the crime dataset uses `STATE/UT` (or `STATE_UT` once exported
/// through tools that reject slashes), and generic sets use `name`.
pub const NAME_KEYS: [&str; 6] = ["STATE/UT", "STATE_UT", "State/Ut", "ST_NM", "name", "State"];

pub const UNKNOWN_NAME: &str = "Unknown";

/// Resolve a feature's display name from its properties.
///
/// The first key in [`NAME_KEYS`] holding a non-blank string wins; the value
/// is trimmed. Non-string values are skipped. Falls back to
/// [`UNKNOWN_NAME`].
///
/// ```rust
/// use atlas_core::geo::{resolve_name, Properties};
/// use serde_json::json;
///
/// let props: Properties = json!({"name": "Kerala", "ST_NM": "KERALA"})
///     .as_object().cloned().unwrap();
/// assert_eq!(resolve_name(&props), "KERALA");
/// assert_eq!(resolve_name(&Properties::new()), "Unknown");
/// ```
pub fn resolve_name(props: &Properties) -> &str {
    NAME_KEYS
        .iter()
        .filter_map(|key| props.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(v: Value) -> Properties {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn follows_priority_order() {
        let all = props(json!({
            "State": "e", "name": "d", "ST_NM": "c", "State/Ut": "b2", "STATE_UT": "b", "STATE/UT": "a"
        }));
        assert_eq!(resolve_name(&all), "a");

        let mut p = all.clone();
        for (removed, expected) in [
            ("STATE/UT", "b"),
            ("STATE_UT", "b2"),
            ("State/Ut", "c"),
            ("ST_NM", "d"),
            ("name", "e"),
        ] {
            p.remove(removed);
            assert_eq!(resolve_name(&p), expected, "after removing {removed}");
        }
        p.remove("State");
        assert_eq!(resolve_name(&p), UNKNOWN_NAME);
    }

    #[test]
    fn skips_blank_and_non_string_values() {
        let p = props(json!({"STATE/UT": "   ", "ST_NM": 42, "name": " Goa "}));
        assert_eq!(resolve_name(&p), "Goa");
    }

    #[test]
    fn unrelated_keys_fall_back() {
        let p = props(json!({"NAME_1": "Assam", "id": 7}));
        assert_eq!(resolve_name(&p), "Unknown");
    }
}
