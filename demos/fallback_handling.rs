//! Fallback handling demo for india-atlas
//!
//! Shows what the site does when its inputs are missing or broken:
//! unknown states, malformed state data, unusable boundary files and
//! hostile names.

use india_atlas::loader::parse_state_table_or_empty;
use india_atlas::prelude::*;

fn main() -> Result<()> {
    println!("=== India Atlas Fallback Handling ===\n");

    let config = AtlasConfig::default();
    let bundled = india_atlas::tables::embedded();

    println!("--- Example 1: A state with no bundled record ---");
    let view = render_tab("Atlantis", Tab::Spots, bundled, &config);
    println!(
        "  {} spot cards synthesized",
        view.body.matches("class=\"spotCard\"").count()
    );
    println!();

    println!("--- Example 2: Malformed state data ---");
    let remote = parse_state_table_or_empty("{ this is not json");
    println!("  parsed {} records; bundled tables stay in use", remote.len());
    println!();

    println!("--- Example 3: Unusable boundary responses ---");
    for body in [None, Some("<html>502</html>"), Some(r#"{"type":"FeatureCollection","features":[]}"#)] {
        let set = RegionSet::from_response(body);
        println!("  {:<45} -> {:?}, {} regions", format!("{body:?}"), set.source, set.len());
    }
    println!();

    println!("--- Example 4: Hostile names are escaped ---");
    let view = render_tab("<img src=x onerror=alert(1)>", Tab::Precautions, bundled, &config);
    println!("  contains raw tag: {}", view.body.contains("<img"));
    println!();

    println!("--- Example 5: Unknown tab names ---");
    match "weather".parse::<Tab>() {
        Ok(tab) => println!("  unexpectedly parsed {tab}"),
        Err(e) => println!("  rejected: {e}"),
    }

    Ok(())
}
