//! Defaults shared by the conversion drivers, settings and CLI.

/// Magic string opening every output document
pub const OUTPUT_MAGIC: &str = "Rustangelo SVG file ( svgr.rustangelo.com )";

/// Header field separator
pub const HEADER_SEPARATOR: char = '|';

/// Default number of parallel workers
pub const DEFAULT_WORKERS: usize = 20;

/// Default curve sampling step
pub const DEFAULT_FLATTEN_STEP: f32 = 0.1;

/// Smallest accepted curve sampling step
pub const MIN_FLATTEN_STEP: f32 = 1e-4;
