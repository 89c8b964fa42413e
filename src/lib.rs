//! India Atlas workspace crate.
//!
//! Re-exports [`atlas_core`] so the demos under `demos/` can be written
//! against a single crate name.

pub use atlas_core::*;
