//! Source and output documents
//!
//! A [`SourceDocument`] is what a path source hands to the converter: the
//! declared size, the resolved transform and the point/type path. An
//! [`OutputDocument`] describes the header written in front of the segment
//! records.

use crate::constants::{HEADER_SEPARATOR, OUTPUT_MAGIC};
use crate::error::Result;
use crate::path::PathData;
use crate::transform::Transform;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A document reduced to what the converter needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Declared width in document units
    pub width: f32,
    /// Declared height in document units
    pub height: f32,
    /// Transform taken from document metadata
    #[serde(default)]
    pub transform: Transform,
    /// Flattened point/type path of the whole document
    pub path: PathData,
}

impl SourceDocument {
    /// The output header that matches this document's size
    pub fn output_document(&self, magic: impl Into<String>) -> OutputDocument {
        OutputDocument::new(magic, self.width, self.height)
    }
}

/// Anything that can turn an input file into a [`SourceDocument`]
pub trait PathSource {
    /// Read and parse the document at `input`
    fn load(&self, input: &Path) -> Result<SourceDocument>;
}

/// Output document header: `<magic>|<width>x<height>|`
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    pub magic: String,
    pub width: f32,
    pub height: f32,
}

impl OutputDocument {
    pub fn new(magic: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            magic: magic.into(),
            width,
            height,
        }
    }

    /// Header with the default magic string
    pub fn with_default_magic(width: f32, height: f32) -> Self {
        Self::new(OUTPUT_MAGIC, width, height)
    }

    pub fn header(&self) -> String {
        format!(
            "{}{sep}{}x{}{sep}",
            self.magic,
            self.width,
            self.height,
            sep = HEADER_SEPARATOR
        )
    }
}
