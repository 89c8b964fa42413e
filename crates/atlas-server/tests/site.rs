//! The served landing page carries exactly the element ids the browser
//! shell looks up.

const INDEX: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../index.html"));

const SHELL_IDS: [&str; 10] = [
    "landing",
    "plane",
    "welcomeCard",
    "startBtn",
    "mapReveal",
    "map",
    "infoPanel",
    "stateName",
    "closePanel",
    "panelContent",
];

fn ids(html: &str) -> Vec<&str> {
    html.split("id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[test]
fn every_shell_id_is_present() {
    let found = ids(INDEX);
    for id in SHELL_IDS {
        assert!(found.contains(&id), "missing #{id}");
    }
}

#[test]
fn page_has_no_unused_ids() {
    for id in ids(INDEX) {
        assert!(SHELL_IDS.contains(&id), "#{id} is not used by the shell");
    }
}

#[test]
fn tab_buttons_parse_as_tabs() {
    let tabs: Vec<&str> = INDEX
        .split("data-tab=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();
    assert_eq!(tabs.len(), 3);
    for t in tabs {
        assert!(t.parse::<atlas_core::Tab>().is_ok(), "{t}");
    }
}
