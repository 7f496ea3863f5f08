//! SVG path source
//!
//! Streams the document with the `svg` event parser and collects:
//! - the root size from `width`/`height`, falling back to the `viewBox`
//! - the transform of the first direct child `<g>` carrying one
//! - every drawable element as a separate figure
//!
//! Element-level transforms are not applied to geometry. Content under
//! non-rendered containers such as `<defs>` is skipped.

use crate::attributes::{group_transform, length, view_box_size};
use crate::path_data::parse_path_data;
use crate::recorder::PathRecorder;
use crate::shapes;
use lyon::path::Path as LyonPath;
use std::fs;
use std::path::Path;
use svg::node::element::tag::Type;
use svg::node::Attributes;
use svg::parser::Event;
use svgr_core::{DocumentError, Error, PathSource, Result, SourceDocument, Transform};
use tracing::{debug, warn};

/// Containers whose content is never drawn directly
const NON_RENDERED: &[&str] = &["defs", "clipPath", "mask", "symbol", "pattern", "marker"];

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgPathSource;

impl SvgPathSource {
    pub fn new() -> Self {
        Self
    }

    /// Parse SVG text into a source document
    pub fn parse_str(&self, content: &str) -> Result<SourceDocument> {
        let parser = svg::read(content)?;

        let mut walker = Walker::default();
        for event in parser {
            match event {
                Event::Error(e) => return Err(Error::parse_failure(e.to_string())),
                Event::Tag(name, kind, attributes) => walker.tag(name, kind, &attributes)?,
                _ => {}
            }
        }
        walker.finish()
    }
}

impl PathSource for SvgPathSource {
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

#[derive(Default)]
struct Walker {
    depth: usize,
    skip_until: Option<usize>,
    size: Option<(f32, f32)>,
    transform: Option<Transform>,
    recorder: PathRecorder,
}

impl Walker {
    fn tag(&mut self, name: &str, kind: Type, attributes: &Attributes) -> Result<()> {
        if let Type::End = kind {
            self.depth = self.depth.saturating_sub(1);
            if self.skip_until == Some(self.depth) {
                self.skip_until = None;
            }
            return Ok(());
        }

        let level = self.depth;
        let opens = matches!(kind, Type::Start);
        if opens {
            self.depth += 1;
        }
        if self.skip_until.is_some() {
            return Ok(());
        }
        if NON_RENDERED.contains(&name) {
            if opens {
                self.skip_until = Some(level);
            }
            return Ok(());
        }

        match name {
            "svg" if level == 0 => self.size = document_size(attributes),
            "g" if level == 1 && self.transform.is_none() => {
                if let Some(value) = attributes.get("transform") {
                    let transform = group_transform(value);
                    debug!(?transform, "using group transform");
                    self.transform = Some(transform);
                }
            }
            "path" => {
                if let Some(d) = attributes.get("d") {
                    let path = parse_path_data(d)?;
                    self.recorder.record(&path);
                }
            }
            "line" => self.record(shapes::line(attributes)),
            "polyline" => self.record(shapes::poly(attributes, false)),
            "polygon" => self.record(shapes::poly(attributes, true)),
            "rect" => self.record(shapes::rect(attributes)),
            "circle" => self.record(shapes::circle(attributes)),
            "ellipse" => self.record(shapes::ellipse(attributes)),
            _ => {}
        }
        Ok(())
    }

    fn record(&mut self, path: Option<LyonPath>) {
        if let Some(path) = path {
            self.recorder.record(&path);
        }
    }

    fn finish(self) -> Result<SourceDocument> {
        let (width, height) = self
            .size
            .ok_or_else(|| Error::parse_failure("document declares no width/height or viewBox"))?;

        debug!(
            figures = self.recorder.figures(),
            points = self.recorder.len(),
            width,
            height,
            "parsed svg document"
        );
        Ok(SourceDocument {
            width,
            height,
            transform: self.transform.unwrap_or_default(),
            path: self.recorder.finish()?,
        })
    }
}

/// Size from `width`/`height`, each falling back to the `viewBox` value
fn document_size(attributes: &Attributes) -> Option<(f32, f32)> {
    let view_box = attributes
        .get("viewBox")
        .and_then(|value| view_box_size(value));
    let width = attributes
        .get("width")
        .and_then(|value| length(value))
        .or(view_box.map(|(w, _)| w));
    let height = attributes
        .get("height")
        .and_then(|value| length(value))
        .or(view_box.map(|(_, h)| h));

    match (width, height) {
        (Some(w), Some(h)) => Some((w, h)),
        _ => {
            warn!("svg root has no usable size");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> SourceDocument {
        SvgPathSource::new().parse_str(content).unwrap()
    }

    fn codes(doc: &SourceDocument) -> Vec<u8> {
        doc.path.types().iter().map(|t| t.code()).collect()
    }

    #[test]
    fn test_size_from_attributes_with_units() {
        let doc = parse(r#"<svg width="210mm" height="297mm"></svg>"#);
        assert_eq!((doc.width, doc.height), (210.0, 297.0));
        assert!(doc.path.is_empty());
    }

    #[test]
    fn test_size_falls_back_to_view_box() {
        let doc = parse(r#"<svg viewBox="0 0 640 480"></svg>"#);
        assert_eq!((doc.width, doc.height), (640.0, 480.0));
    }

    #[test]
    fn test_missing_size_is_parse_failure() {
        let err = SvgPathSource::new()
            .parse_str(r#"<svg><path d="M 0 0 L 1 1"/></svg>"#)
            .unwrap_err();
        assert!(err.is_document_error());
    }

    #[test]
    fn test_path_and_shapes_become_figures() {
        let doc = parse(
            r#"<svg width="100" height="100">
                 <path d="M 0 0 L 10 0 L 10 10 Z"/>
                 <line x1="1" y1="1" x2="2" y2="2"/>
               </svg>"#,
        );
        assert_eq!(codes(&doc), vec![0, 1, 129, 0, 1]);
    }

    #[test]
    fn test_first_direct_child_group_transform_wins() {
        let doc = parse(
            r#"<svg width="10" height="10">
                 <g id="plain"><g transform="translate(100 100)"/></g>
                 <g transform="scale(2) translate(5,5)"><path d="M 0 0 L 1 1"/></g>
                 <g transform="translate(9,9)"/>
               </svg>"#,
        );
        assert_eq!(
            doc.transform,
            Transform::ScaleThenTranslate {
                sx: 2.0,
                sy: 2.0,
                tx: 5.0,
                ty: 5.0
            }
        );
    }

    #[test]
    fn test_group_with_unsupported_transform_is_still_first() {
        let doc = parse(
            r#"<svg width="10" height="10">
                 <g transform="rotate(30)"/>
                 <g transform="translate(9,9)"/>
               </svg>"#,
        );
        assert_eq!(doc.transform, Transform::None);
    }

    #[test]
    fn test_defs_content_is_skipped() {
        let doc = parse(
            r#"<svg width="10" height="10">
                 <defs><path d="M 0 0 L 5 5"/><g><rect width="1" height="1"/></g></defs>
                 <path d="M 1 1 L 2 2"/>
               </svg>"#,
        );
        assert_eq!(doc.path.len(), 2);
        assert_eq!(doc.path.point(0), svgr_core::PathPoint::new(1.0, 1.0));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SvgPathSource::new()
            .load(Path::new("/definitely/not/here.svg"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Document(DocumentError::InputNotFound { .. })
        ));
    }
}
