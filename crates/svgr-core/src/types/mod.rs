//! Type aliases shared across the svgr crates.
//!
//! - [`aliases`]: shared-state and callback aliases used by the conversion drivers.

pub mod aliases;

pub use aliases::*;
