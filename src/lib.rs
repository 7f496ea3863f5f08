//! # svgr
//!
//! Converts SVG documents into flattened straight-line segment files for
//! fast downstream consumption. Curves are sampled into polylines, every
//! coordinate passes through the document's group transform, and the result
//! is written as a single header followed by `x1,y1,x2,y2;` records.
//!
//! ## Architecture
//!
//! svgr is organized as a workspace with multiple crates:
//!
//! 1. **svgr-core** - Path model, transform, output header, errors
//! 2. **svgr-flatten** - Flattener, emitter, partitioner, assembler, progress, drivers
//! 3. **svgr-source** - SVG and JSON path sources
//! 4. **svgr-settings** - Conversion settings persistence
//! 5. **svgr** - Command line binary that integrates all crates
//!
//! Conversion runs either sequentially or as one blocking task per chunk
//! with `--threaded`; both produce byte-identical output.

pub mod cli;

pub use svgr_core::{
    DocumentError, Error, OutputDocument, OutputError, PathData, PathError, PathPoint,
    PathPointType, PathSource, PointKind, Result, Segment, SourceDocument, Transform,
};
pub use svgr_flatten::{ConversionOptions, Converter, FlattenStep};
pub use svgr_settings::{ConversionSettings, SettingsError};
pub use svgr_source::{JsonPathSource, SvgPathSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to the console messages
/// - RUST_LOG environment variable support, `warn` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
