// crates/atlas-core/src/render.rs

//! # Panel rendering
//!
//! [`render_panel`] is a pure function of the panel state, the state tables
//! and the configuration. It never fails: a state without a record gets
//! synthesized spots and the default precautions and helplines.

use crate::config::{AtlasConfig, PanelConfig};
use crate::dashboard::dashboard_url;
use crate::markup::{Markup, Render};
use crate::model::{Helpline, Spot, StateLookup, StateRecord};
use crate::panel::{Panel, Tab};
use crate::tables::{default_helplines, DEFAULT_PRECAUTIONS, PLACEHOLDER_DESCRIPTION, PLACEHOLDER_SPOTS};
use serde::Serialize;

/// Everything the shell needs to show the panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PanelView {
    /// Header text. Plain text: the shell assigns it as text content.
    pub title: String,
    pub tab: Tab,
    pub body: String,
}

/// Render the open panel, or `None` when it is closed.
pub fn render_panel<L: StateLookup + ?Sized>(
    panel: &Panel,
    tables: &L,
    cfg: &AtlasConfig,
) -> Option<PanelView> {
    match panel {
        Panel::Open { state, tab } => Some(render_tab(state, *tab, tables, cfg)),
        Panel::Closed => None,
    }
}

/// Render one tab for one state.
pub fn render_tab<L: StateLookup + ?Sized>(
    state: &str,
    tab: Tab,
    tables: &L,
    cfg: &AtlasConfig,
) -> PanelView {
    let empty = StateRecord::default();
    let record = tables.record(state).unwrap_or(&empty);
    let body = match tab {
        Tab::Spots => render_spots(state, record, &cfg.panel),
        Tab::Crime => render_crime(state, &dashboard_url(&cfg.dashboard, state)),
        Tab::Precautions => render_precautions(record),
    };
    PanelView {
        title: state.to_string(),
        tab,
        body: body.into_string(),
    }
}

/// The record's spots, padded with placeholders and capped.
///
/// Placeholders are `"{state} {name}"` for each name of
/// [`PLACEHOLDER_SPOTS`] in order, appended until `min_spots` is reached.
/// Past the end of the list the names repeat with an ordinal suffix
/// (`"{state} Old Fort 2"`). The result is then cut to
/// `max(min_spots, min(max_spots, len))`.
pub fn ensure_min_spots(spots: &[Spot], state: &str, cfg: &PanelConfig) -> Vec<Spot> {
    let mut out = spots.to_vec();
    let missing = cfg.min_spots.saturating_sub(out.len());
    out.extend((0..missing).map(|i| {
        let place = PLACEHOLDER_SPOTS[i % PLACEHOLDER_SPOTS.len()];
        let name = match i / PLACEHOLDER_SPOTS.len() {
            0 => format!("{state} {place}"),
            round => format!("{state} {place} {}", round + 1),
        };
        Spot::new(name)
            .with_image(cfg.placeholder_image.as_str())
            .with_description(PLACEHOLDER_DESCRIPTION)
    }));
    let keep = cfg.min_spots.max(cfg.max_spots.min(out.len()));
    out.truncate(keep);
    out
}

struct SpotCard<'a> {
    spot: &'a Spot,
    fallback_image: &'a str,
}

impl Render for SpotCard<'_> {
    fn render(&self, out: &mut Markup) {
        let img = self
            .spot
            .image
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(self.fallback_image);
        out.raw("<div class=\"spotCard\">")
            .open("img")
            .attr("src", img)
            .attr("alt", &self.spot.name)
            .attr("loading", "lazy")
            .raw(">")
            .raw("<div class=\"meta\"><div class=\"spotName\">")
            .text(&self.spot.name)
            .raw("</div><div class=\"spotDesc\">")
            .text(self.spot.description.as_deref().unwrap_or(""))
            .raw("</div></div></div>");
    }
}

impl Render for Helpline {
    fn render(&self, out: &mut Markup) {
        out.raw("<li><strong>")
            .text(&self.service)
            .raw(":</strong> ")
            .text(&self.number)
            .raw("</li>");
    }
}

fn render_spots(state: &str, record: &StateRecord, cfg: &PanelConfig) -> Markup {
    let quote = record
        .quote
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .unwrap_or(&cfg.default_quote);
    let spots = ensure_min_spots(&record.spots, state, cfg);

    let mut m = Markup::new();
    m.raw("<h3>🌄 ")
        .text(state)
        .raw(" — “")
        .text(quote)
        .raw("”</h3><div class=\"spotList\">");
    for spot in &spots {
        m.component(&SpotCard {
            spot,
            fallback_image: &cfg.placeholder_image,
        });
    }
    m.raw("</div>");
    m
}

fn render_crime(state: &str, src: &str) -> Markup {
    let mut m = Markup::new();
    m.raw("<h3>Crime Overview — ")
        .text(state)
        .raw("</h3>")
        .raw("<div class=\"dashLoading\">Loading dashboard…</div>")
        .open("iframe")
        .attr("src", src)
        .attr("title", &format!("Crime dashboard for {state}"))
        .raw(" class=\"dashFrame\" loading=\"lazy\"")
        .raw(" onload=\"this.previousElementSibling.style.display='none'\"></iframe>");
    m
}

fn render_precautions(record: &StateRecord) -> Markup {
    let defaults;
    let helplines: &[Helpline] = if record.helplines.is_empty() {
        defaults = default_helplines();
        &defaults
    } else {
        &record.helplines
    };

    let mut m = Markup::new();
    m.raw("<div class=\"precautions-grid\"><div class=\"prec-box\"><h4>Necessary Precautions</h4><ul>");
    if record.precautions.is_empty() {
        for p in DEFAULT_PRECAUTIONS {
            m.element("li", p);
        }
    } else {
        for p in &record.precautions {
            m.element("li", p);
        }
    }
    m.raw("</ul></div><div class=\"prec-box\"><h4>Emergency Helplines</h4><ul class=\"helplines\">")
        .each(helplines)
        .raw("</ul></div></div>");
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StateTable;

    fn cfg() -> AtlasConfig {
        AtlasConfig::default()
    }

    #[test]
    fn pads_unknown_state_to_minimum() {
        let spots = ensure_min_spots(&[], "Atlantis", &cfg().panel);
        assert_eq!(spots.len(), 10);
        assert_eq!(spots[0].name, "Atlantis Old Fort");
        assert_eq!(spots[9].name, "Atlantis Art District");
        assert!(spots.iter().all(|s| s.description.as_deref() == Some(PLACEHOLDER_DESCRIPTION)));
    }

    #[test]
    fn keeps_long_lists_up_to_the_cap() {
        let many: Vec<Spot> = (0..40).map(|i| Spot::new(format!("s{i}"))).collect();
        let out = ensure_min_spots(&many, "X", &cfg().panel);
        assert_eq!(out.len(), 30);
        assert_eq!(out[0].name, "s0");

        let some: Vec<Spot> = (0..12).map(|i| Spot::new(format!("s{i}"))).collect();
        assert_eq!(ensure_min_spots(&some, "X", &cfg().panel).len(), 12);
    }

    #[test]
    fn minimum_beyond_placeholders_cycles_with_suffix() {
        let mut c = cfg().panel;
        c.min_spots = 20;
        let out = ensure_min_spots(&[Spot::new("real")], "X", &c);
        assert_eq!(out.len(), 20);
        assert_eq!(out[15].name, "X Valley View");
        assert_eq!(out[16].name, "X Old Fort 2");
        assert_eq!(out[19].name, "X Sunset Point 2");
    }

    #[test]
    fn large_minimum_is_honoured_when_rendering() {
        let mut c = cfg();
        c.panel.min_spots = 20;
        c.panel.max_spots = 25;
        let view = render_tab("Atlantis", Tab::Spots, &StateTable::new(), &c);
        assert!(view.body.matches("class=\"spotCard\"").count() >= 20);
    }

    #[test]
    fn unknown_state_renders_placeholder_cards() {
        let table = StateTable::new();
        let view = render_tab("Atlantis", Tab::Spots, &table, &cfg());
        assert_eq!(view.body.matches("class=\"spotCard\"").count(), 10);
        assert!(view.body.contains("Incredible India Awaits You!"));
    }

    #[test]
    fn names_are_escaped_everywhere() {
        let table = StateTable::new();
        let evil = "<script>alert('x')</script>";
        for tab in Tab::ALL {
            let view = render_tab(evil, tab, &table, &cfg());
            assert!(!view.body.contains("<script>"), "{tab} leaked markup");
            if tab != Tab::Precautions {
                assert!(view.body.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
            }
            assert_eq!(view.title, evil);
        }
    }

    #[test]
    fn precautions_fall_back_to_defaults() {
        let table = StateTable::new();
        let view = render_tab("Atlantis", Tab::Precautions, &table, &cfg());
        assert!(view.body.contains("<li><strong>Police:</strong> 112</li>"));
        assert!(view.body.contains("<li><strong>Women Helpline:</strong> 181</li>"));
        assert!(view.body.contains("Stay aware in crowded places; keep valuables secured."));
    }

    #[test]
    fn crime_tab_embeds_filtered_dashboard() {
        let table = StateTable::new();
        let view = render_tab("Tamil Nadu", Tab::Crime, &table, &cfg());
        assert!(view.body.contains("State%2FUt=Tamil+Nadu"));
        assert!(view.body.contains("<h3>Crime Overview — Tamil Nadu</h3>"));
    }

    #[test]
    fn closed_panel_renders_nothing() {
        assert_eq!(render_panel(&Panel::Closed, &StateTable::new(), &cfg()), None);
    }
}
