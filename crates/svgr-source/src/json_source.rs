//! JSON path source
//!
//! Reads a serialised [`SourceDocument`] so raw point/type arrays can be
//! converted without an SVG parser:
//!
//! ```json
//! {"width": 100, "height": 50,
//!  "transform": {"kind": "translate", "tx": 5, "ty": 5},
//!  "path": {"points": [{"x": 0, "y": 0}, {"x": 10, "y": 0}], "types": [0, 1]}}
//! ```

use std::fs;
use std::path::Path;
use svgr_core::{DocumentError, Error, PathSource, Result, SourceDocument};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPathSource;

impl JsonPathSource {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_str(&self, content: &str) -> Result<SourceDocument> {
        let document: SourceDocument =
            serde_json::from_str(content).map_err(|e| Error::parse_failure(e.to_string()))?;
        debug!(points = document.path.len(), "parsed json document");
        Ok(document)
    }
}

impl PathSource for JsonPathSource {
    fn load(&self, input: &Path) -> Result<SourceDocument> {
        if !input.is_file() {
            return Err(DocumentError::InputNotFound {
                path: input.to_path_buf(),
            }
            .into());
        }
        let content = fs::read_to_string(input)?;
        self.parse_str(&content)
    }
}
