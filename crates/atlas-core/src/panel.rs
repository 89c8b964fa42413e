// crates/atlas-core/src/panel.rs

//! Panel selection state.
//!
//! The panel is either closed or open on one state with one active tab.
//! Transitions are plain methods; rendering lives in [`crate::render`].

use crate::error::AtlasError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Spots,
    Crime,
    #[serde(alias = "prec")]
    Precautions,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Spots, Tab::Crime, Tab::Precautions];

    /// Identifier used in `data-tab` attributes and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Spots => "spots",
            Tab::Crime => "crime",
            Tab::Precautions => "precautions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Spots => "Tourist Spots",
            Tab::Crime => "Crime Overview",
            Tab::Precautions => "Precautions",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = AtlasError;

    /// Accepts the canonical ids plus the short `prec` used by older markup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spots" => Ok(Tab::Spots),
            "crime" => Ok(Tab::Crime),
            "precautions" | "prec" => Ok(Tab::Precautions),
            _ => Err(AtlasError::UnknownTab(s.to_string())),
        }
    }
}

/// What the information panel is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Closed,
    Open { state: String, tab: Tab },
}

impl Panel {
    /// Open on `state` with the default tab, whatever was showing before.
    pub fn open(&mut self, state: impl Into<String>) {
        *self = Panel::Open {
            state: state.into(),
            tab: Tab::default(),
        };
    }

    /// Switch tab, keeping the state. Does nothing while closed.
    ///
    /// Returns `true` when the panel is open (and so needs a re-render).
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        match self {
            Panel::Open { tab: current, .. } => {
                *current = tab;
                true
            }
            Panel::Closed => false,
        }
    }

    pub fn close(&mut self) {
        *self = Panel::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Panel::Open { .. })
    }

    pub fn current_state(&self) -> Option<&str> {
        match self {
            Panel::Open { state, .. } => Some(state),
            Panel::Closed => None,
        }
    }

    pub fn current_tab(&self) -> Option<Tab> {
        match self {
            Panel::Open { tab, .. } => Some(*tab),
            Panel::Closed => None,
        }
    }
}
