// crates/atlas-core/src/atlas.rs

//! # Interaction controller
//!
//! [`Atlas`] owns the whole UI state (intro, panel, regions, fetched data)
//! and turns [`UiEvent`]s into [`Effect`]s. It touches no DOM and performs
//! no I/O, so the browser shell stays a thin executor and every flow can be
//! driven from plain tests.

use crate::config::AtlasConfig;
use crate::geo::{Bounds, FeatureCollection, GeoSource, PathStyle, RegionSet, TooltipOptions};
use crate::intro::{IntroPlan, IntroSequence};
use crate::model::{LayeredTable, StateTable};
use crate::panel::{Panel, Tab};
use crate::render::{render_panel, PanelView};
use crate::tables;

/// Something the user or the network did.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// The landing "start" button; `clouds` is how many cloud elements exist.
    StartClicked { clouds: usize },
    /// The reveal timer of the intro fired.
    IntroFinished,
    ConfigLoaded(AtlasConfig),
    StateDataLoaded(StateTable),
    StateDataFailed,
    /// Body of the boundary request.
    GeographyLoaded(String),
    GeographyFailed,
    /// Result of the background image HEAD probe.
    BackgroundProbed(bool),
    RegionHovered(usize),
    RegionLeft(usize),
    RegionClicked(usize),
    TabSelected(Tab),
    CloseClicked,
}

/// Something the shell must do in response.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PlayIntro(IntroPlan),
    /// Hide the landing view and show the map container.
    RevealMap,
    /// Create the map, then fetch boundaries and probe the background.
    InitMap,
    DrawRegions {
        collection: FeatureCollection,
        source: GeoSource,
    },
    FitBounds {
        bounds: Bounds,
        max_zoom: Option<f64>,
        padding: Option<f64>,
    },
    SetMapBackground(String),
    Highlight { region: usize, style: PathStyle },
    ShowTooltip {
        region: usize,
        html: String,
        options: TooltipOptions,
    },
    ResetStyle { region: usize },
    HideTooltip { region: usize },
    ShowPanel(PanelView),
    HidePanel,
}

#[derive(Debug, Default)]
pub struct Atlas {
    config: AtlasConfig,
    intro: IntroSequence,
    panel: Panel,
    remote: StateTable,
    regions: Option<RegionSet>,
}

impl Atlas {
    pub fn new(config: AtlasConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn intro(&self) -> &IntroSequence {
        &self.intro
    }

    pub fn regions(&self) -> Option<&RegionSet> {
        self.regions.as_ref()
    }

    /// Fetched records over the embedded ones.
    pub fn tables(&self) -> LayeredTable<'_, StateTable, StateTable> {
        LayeredTable::new(&self.remote, tables::embedded())
    }

    /// Current panel content, if open.
    pub fn view(&self) -> Option<PanelView> {
        render_panel(&self.panel, &self.tables(), &self.config)
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::StartClicked { clouds } => self
                .intro
                .trigger(clouds, &self.config.intro)
                .map(Effect::PlayIntro)
                .into_iter()
                .collect(),

            UiEvent::IntroFinished => {
                if self.intro.finish() {
                    vec![Effect::RevealMap, Effect::InitMap]
                } else {
                    Vec::new()
                }
            }

            UiEvent::ConfigLoaded(config) => {
                self.config = config;
                self.refresh()
            }

            UiEvent::StateDataLoaded(table) => {
                self.remote = table;
                self.refresh()
            }

            UiEvent::StateDataFailed => {
                self.remote = StateTable::default();
                self.refresh()
            }

            UiEvent::GeographyLoaded(body) => self.install_regions(RegionSet::from_response(Some(&body))),

            UiEvent::GeographyFailed => self.install_regions(RegionSet::from_response(None)),

            UiEvent::BackgroundProbed(true) => {
                vec![Effect::SetMapBackground(
                    self.config.endpoints.background_image.clone(),
                )]
            }
            UiEvent::BackgroundProbed(false) => Vec::new(),

            UiEvent::RegionHovered(region) => match self.region_tooltip(region) {
                Some(html) => vec![
                    Effect::Highlight {
                        region,
                        style: PathStyle::highlight(),
                    },
                    Effect::ShowTooltip {
                        region,
                        html,
                        options: TooltipOptions::default(),
                    },
                ],
                None => Vec::new(),
            },

            UiEvent::RegionLeft(region) => {
                if self.region_exists(region) {
                    vec![Effect::ResetStyle { region }, Effect::HideTooltip { region }]
                } else {
                    Vec::new()
                }
            }

            UiEvent::RegionClicked(region) => self.click_region(region),

            UiEvent::TabSelected(tab) => {
                if self.panel.select_tab(tab) {
                    self.view().map(Effect::ShowPanel).into_iter().collect()
                } else {
                    Vec::new()
                }
            }

            UiEvent::CloseClicked => {
                self.panel.close();
                vec![Effect::HidePanel]
            }
        }
    }

    /// Open the panel on a state by name, as a region click would.
    pub fn open_state(&mut self, name: &str) -> Vec<Effect> {
        self.panel.open(name);
        self.view().map(Effect::ShowPanel).into_iter().collect()
    }

    fn click_region(&mut self, index: usize) -> Vec<Effect> {
        let Some(region) = self.regions.as_ref().and_then(|r| r.get(index)) else {
            return Vec::new();
        };
        let name = region.name.clone();
        let mut effects: Vec<Effect> = region
            .bounds
            .map(|bounds| Effect::FitBounds {
                bounds,
                max_zoom: Some(self.config.map.focus_max_zoom),
                padding: None,
            })
            .into_iter()
            .collect();
        effects.extend(self.open_state(&name));
        effects
    }

    fn install_regions(&mut self, set: RegionSet) -> Vec<Effect> {
        let mut effects = vec![Effect::DrawRegions {
            collection: set.collection.clone(),
            source: set.source,
        }];
        if let Some(bounds) = set.bounds().filter(Bounds::is_valid) {
            effects.push(Effect::FitBounds {
                bounds,
                max_zoom: None,
                padding: Some(self.config.map.fit_padding),
            });
        }
        self.regions = Some(set);
        effects
    }

    fn refresh(&self) -> Vec<Effect> {
        self.view().map(Effect::ShowPanel).into_iter().collect()
    }

    fn region_exists(&self, index: usize) -> bool {
        self.regions.as_ref().is_some_and(|r| r.get(index).is_some())
    }

    fn region_tooltip(&self, index: usize) -> Option<String> {
        self.regions
            .as_ref()
            .and_then(|r| r.get(index))
            .map(|r| r.tooltip().into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed() -> Atlas {
        let mut atlas = Atlas::default();
        atlas.handle(UiEvent::StartClicked { clouds: 2 });
        atlas.handle(UiEvent::IntroFinished);
        atlas.handle(UiEvent::GeographyFailed);
        atlas
    }

    #[test]
    fn start_then_finish_initializes_map_once() {
        let mut atlas = Atlas::default();
        let fx = atlas.handle(UiEvent::StartClicked { clouds: 3 });
        assert!(matches!(fx.as_slice(), [Effect::PlayIntro(p)] if p.clouds.len() == 3));
        assert!(atlas.handle(UiEvent::StartClicked { clouds: 3 }).is_empty());
        assert_eq!(
            atlas.handle(UiEvent::IntroFinished),
            vec![Effect::RevealMap, Effect::InitMap]
        );
        assert!(atlas.handle(UiEvent::IntroFinished).is_empty());
    }

    #[test]
    fn stray_reveal_timer_does_not_initialize_map() {
        let mut atlas = Atlas::default();
        assert!(atlas.handle(UiEvent::IntroFinished).is_empty());
        assert!(!atlas.intro().map_initialized());
        atlas.handle(UiEvent::StartClicked { clouds: 1 });
        assert_eq!(
            atlas.handle(UiEvent::IntroFinished),
            vec![Effect::RevealMap, Effect::InitMap]
        );
    }

    #[test]
    fn failed_geography_draws_fallback_and_fits() {
        let mut atlas = Atlas::default();
        let fx = atlas.handle(UiEvent::GeographyFailed);
        assert!(matches!(
            &fx[0],
            Effect::DrawRegions { collection, source: GeoSource::Fallback } if collection.len() == 5
        ));
        assert!(matches!(fx[1], Effect::FitBounds { padding: Some(_), .. }));
    }

    #[test]
    fn hover_and_leave_pair_up() {
        let mut atlas = revealed();
        let fx = atlas.handle(UiEvent::RegionHovered(2));
        assert!(matches!(&fx[1], Effect::ShowTooltip { html, .. } if html == "<b>Kerala</b>"));
        assert_eq!(
            atlas.handle(UiEvent::RegionLeft(2)),
            vec![Effect::ResetStyle { region: 2 }, Effect::HideTooltip { region: 2 }]
        );
    }

    #[test]
    fn unknown_region_is_ignored() {
        let mut atlas = revealed();
        assert!(atlas.handle(UiEvent::RegionClicked(99)).is_empty());
        assert!(atlas.handle(UiEvent::RegionHovered(99)).is_empty());
        assert!(!atlas.panel().is_open());
    }

    #[test]
    fn background_probe_sets_image_only_on_success() {
        let mut atlas = Atlas::default();
        assert!(atlas.handle(UiEvent::BackgroundProbed(false)).is_empty());
        assert_eq!(
            atlas.handle(UiEvent::BackgroundProbed(true)),
            vec![Effect::SetMapBackground("/static/assets/map-bg.jpg".into())]
        );
    }

    #[test]
    fn remote_data_rerenders_open_panel() {
        let mut atlas = revealed();
        atlas.open_state("Atlantis");
        let mut remote = StateTable::new();
        remote.insert(
            "Atlantis",
            crate::model::StateRecord {
                quote: Some("Beneath the waves".into()),
                ..Default::default()
            },
        );
        let fx = atlas.handle(UiEvent::StateDataLoaded(remote));
        assert!(matches!(&fx[0], Effect::ShowPanel(v) if v.body.contains("Beneath the waves")));
    }

    #[test]
    fn tabs_while_closed_do_nothing() {
        let mut atlas = revealed();
        assert!(atlas.handle(UiEvent::TabSelected(Tab::Crime)).is_empty());
        assert_eq!(atlas.handle(UiEvent::CloseClicked), vec![Effect::HidePanel]);
    }
}
