//! # svgr Source
//!
//! Path sources turn an input file into a [`SourceDocument`]: the declared
//! document size, the group transform and a point/type path.
//!
//! - [`SvgPathSource`] reads SVG documents (paths and basic shapes)
//! - [`JsonPathSource`] reads pre-flattened point/type documents

pub mod attributes;
pub mod json_source;
pub mod path_data;
pub mod recorder;
pub mod shapes;
pub mod svg_source;

pub use json_source::JsonPathSource;
pub use path_data::{parse_path_data, Pen};
pub use recorder::PathRecorder;
pub use svg_source::SvgPathSource;

use std::path::Path;
use svgr_core::{PathSource, SourceDocument};

/// Pick a source by file extension: `.json` is JSON, anything else SVG
pub fn source_for(input: &Path) -> Box<dyn PathSource> {
    let is_json = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Box::new(JsonPathSource::new())
    } else {
        Box::new(SvgPathSource::new())
    }
}

/// Load `input` with the source chosen by [`source_for`]
pub fn load(input: &Path) -> svgr_core::Result<SourceDocument> {
    source_for(input).load(input)
}
