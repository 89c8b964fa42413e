//! Panel walkthrough for india-atlas
//!
//! This demo drives the controller the way the browser does:
//! - Play the intro and reveal the map
//! - Draw the boundaries (bundled fallback here)
//! - Hover, click and switch tabs on a state
//!
//! Run with `cargo run --example panel_walkthrough`.

use india_atlas::prelude::*;

fn describe(effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::PlayIntro(plan) => println!(
                "  play intro: {} clouds, reveal after {} ms",
                plan.clouds.len(),
                plan.reveal_after_ms
            ),
            Effect::DrawRegions { collection, source } => {
                println!("  draw {} regions ({source:?})", collection.len())
            }
            Effect::FitBounds { bounds, .. } => println!("  fit to {:?}", bounds.corners()),
            Effect::ShowTooltip { html, .. } => println!("  tooltip {html}"),
            Effect::ShowPanel(view) => println!(
                "  panel '{}' on {} ({} bytes of markup)",
                view.title,
                view.tab.label(),
                view.body.len()
            ),
            other => println!("  {other:?}"),
        }
    }
}

fn main() -> Result<()> {
    println!("=== India Atlas Panel Walkthrough ===\n");

    let mut atlas = Atlas::default();

    println!("--- Step 1: Landing ---");
    describe(&atlas.handle(UiEvent::StartClicked { clouds: 4 }));
    describe(&atlas.handle(UiEvent::IntroFinished));
    println!();

    println!("--- Step 2: Boundaries ---");
    describe(&atlas.handle(UiEvent::GeographyFailed));
    println!();

    let kerala = atlas
        .regions()
        .and_then(|r| r.position("Kerala"))
        .ok_or_else(|| AtlasError::NotFound("Kerala".into()))?;

    println!("--- Step 3: Hover and click Kerala ---");
    describe(&atlas.handle(UiEvent::RegionHovered(kerala)));
    describe(&atlas.handle(UiEvent::RegionClicked(kerala)));
    println!();

    println!("--- Step 4: Tabs ---");
    for tab in ["crime", "prec", "spots"] {
        let tab: Tab = tab.parse()?;
        describe(&atlas.handle(UiEvent::TabSelected(tab)));
    }
    println!();

    println!("--- Step 5: Close ---");
    describe(&atlas.handle(UiEvent::CloseClicked));

    println!("\n✓ Walkthrough complete");
    Ok(())
}
