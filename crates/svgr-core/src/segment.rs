//! Output line segments

use crate::path::PathPoint;
use std::fmt;

/// One straight piece of flattened output
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    pub fn new(from: PathPoint, to: PathPoint) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }

    pub fn from(&self) -> PathPoint {
        PathPoint::new(self.x1, self.y1)
    }

    pub fn to(&self) -> PathPoint {
        PathPoint::new(self.x2, self.y2)
    }
}

/// Renders the `x1,y1,x2,y2;` record. `f32` `Display` is the shortest
/// representation that round-trips.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{};", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Render a run of segments as concatenated records
pub fn render_segments(segments: &[Segment]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(segments.len() * 24);
    for segment in segments {
        // Writing to a String cannot fail
        let _ = write!(out, "{}", segment);
    }
    out
}
