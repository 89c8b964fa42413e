// crates/atlas-core/src/intro.rs

//! Landing-screen takeoff sequence.
//!
//! The sequence is described as data ([`IntroPlan`]) so the browser shell
//! only has to apply styles at the given offsets. [`IntroSequence`] guards
//! both ends: the plan is handed out once, and the map is initialized once.

use crate::config::IntroConfig;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntroPhase {
    #[default]
    Landing,
    Animating,
    Revealed,
}

/// Inline style changes applied to one element at one moment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleStep {
    pub delay_ms: u32,
    pub properties: Vec<(&'static str, String)>,
}

/// The whole takeoff, relative to the trigger.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntroPlan {
    pub plane: StyleStep,
    /// One step per cloud, in document order.
    pub clouds: Vec<StyleStep>,
    pub welcome: StyleStep,
    /// When to hide the landing view and reveal the map.
    pub reveal_after_ms: u32,
}

impl IntroPlan {
    pub fn new(cloud_count: usize, cfg: &IntroConfig) -> Self {
        let plane = StyleStep {
            delay_ms: 0,
            properties: vec![
                ("left", "120%".to_string()),
                ("top", "10%".to_string()),
                ("transform", "rotate(-6deg) scale(1.05)".to_string()),
            ],
        };
        let clouds = (0..cloud_count)
            .map(|i| {
                let transform = if i % 2 == 0 {
                    "translate(-150vw, -50vh) scale(1.5)"
                } else {
                    "translate(150vw, 50vh) scale(1.5)"
                };
                StyleStep {
                    delay_ms: u32::try_from(i)
                        .unwrap_or(u32::MAX)
                        .saturating_mul(cfg.cloud_stagger_ms),
                    properties: vec![
                        ("transform", transform.to_string()),
                        ("opacity", "0".to_string()),
                    ],
                }
            })
            .collect();
        let welcome = StyleStep {
            delay_ms: 0,
            properties: vec![("opacity", "0".to_string())],
        };
        Self {
            plane,
            clouds,
            welcome,
            reveal_after_ms: cfg.duration_ms,
        }
    }
}

/// One-shot state of the landing animation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntroSequence {
    phase: IntroPhase,
    map_initialized: bool,
}

impl IntroSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Start the takeoff. Only the first call returns a plan.
    pub fn trigger(&mut self, cloud_count: usize, cfg: &IntroConfig) -> Option<IntroPlan> {
        if self.phase != IntroPhase::Landing {
            return None;
        }
        self.phase = IntroPhase::Animating;
        Some(IntroPlan::new(cloud_count, cfg))
    }

    /// The reveal timer fired. Returns `true` exactly once, and only after
    /// [`IntroSequence::trigger`]: the caller initializes the map then and
    /// never again.
    pub fn finish(&mut self) -> bool {
        if self.phase != IntroPhase::Animating || self.map_initialized {
            return false;
        }
        self.phase = IntroPhase::Revealed;
        self.map_initialized = true;
        true
    }

    pub fn map_initialized(&self) -> bool {
        self.map_initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clouds_are_staggered_and_alternate() {
        let plan = IntroPlan::new(4, &IntroConfig::default());
        let delays: Vec<_> = plan.clouds.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, [0, 180, 360, 540]);
        assert!(plan.clouds[0].properties[0].1.starts_with("translate(-150vw"));
        assert!(plan.clouds[1].properties[0].1.starts_with("translate(150vw"));
        assert_eq!(plan.reveal_after_ms, 3200);
    }

    #[test]
    fn trigger_is_one_shot() {
        let mut seq = IntroSequence::new();
        let cfg = IntroConfig::default();
        assert!(seq.trigger(3, &cfg).is_some());
        assert_eq!(seq.phase(), IntroPhase::Animating);
        assert!(seq.trigger(3, &cfg).is_none());
    }

    #[test]
    fn map_initializes_once() {
        let mut seq = IntroSequence::new();
        seq.trigger(0, &IntroConfig::default());
        assert!(seq.finish());
        assert!(!seq.finish());
        assert!(seq.map_initialized());
        assert_eq!(seq.phase(), IntroPhase::Revealed);
    }

    #[test]
    fn finish_before_trigger_is_ignored() {
        let mut seq = IntroSequence::new();
        assert!(!seq.finish());
        assert_eq!(seq.phase(), IntroPhase::Landing);
        assert!(!seq.map_initialized());

        seq.trigger(2, &IntroConfig::default());
        assert!(seq.finish());
    }
}
