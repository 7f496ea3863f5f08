//! Point/type path model
//!
//! A path is two parallel arrays: the points, and a raw type code per point.
//! Raw codes follow the GDI+ figure encoding, where the low bits carry the
//! command and the high bits carry flags. Only the mapping in
//! [`PathPointType::kind`] gives a code meaning; flag bits are not
//! interpreted beyond it.

use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in document space, single precision
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for PathPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Semantic class of a raw point-type code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Begins a subpath, draws nothing
    Start,
    /// Straight segment from the previous point
    Line,
    /// First of a curve triple: two control points then the end point
    CubicEnd,
    /// Anything else; only advances the previous point
    Other,
}

impl PointKind {
    /// Whether a chunk may begin at a point of this kind
    pub fn is_boundary(self) -> bool {
        matches!(self, PointKind::Start | PointKind::Line)
    }
}

/// Raw point-type code as supplied by the path source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPointType(pub u8);

impl PathPointType {
    /// Figure start
    pub const START: u8 = 0x00;
    /// Straight line
    pub const LINE: u8 = 0x01;
    /// Cubic bezier point
    pub const BEZIER: u8 = 0x03;
    /// Marker flag
    pub const MARKER: u8 = 0x20;
    /// Close-subpath flag
    pub const CLOSE_SUBPATH: u8 = 0x80;

    pub const fn start() -> Self {
        Self(Self::START)
    }

    pub const fn line() -> Self {
        Self(Self::LINE)
    }

    pub const fn bezier() -> Self {
        Self(Self::BEZIER)
    }

    /// The raw code
    pub const fn code(self) -> u8 {
        self.0
    }

    /// This code with the close-subpath flag set
    pub const fn closed(self) -> Self {
        Self(self.0 | Self::CLOSE_SUBPATH)
    }

    /// Classify the raw code.
    ///
    /// Line-with-flags codes 129 and 160 and curve-with-close 131 map to
    /// their base classes; every unlisted code is `Other`.
    pub fn kind(self) -> PointKind {
        match self.0 {
            0 => PointKind::Start,
            1 | 129 | 160 => PointKind::Line,
            3 | 131 => PointKind::CubicEnd,
            _ => PointKind::Other,
        }
    }
}

impl From<u8> for PathPointType {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for PathPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.0, self.kind())
    }
}

/// An immutable point/type array pair of equal length
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPathData")]
pub struct PathData {
    points: Vec<PathPoint>,
    types: Vec<PathPointType>,
}

#[derive(Deserialize)]
struct RawPathData {
    points: Vec<PathPoint>,
    types: Vec<PathPointType>,
}

impl TryFrom<RawPathData> for PathData {
    type Error = PathError;

    fn try_from(raw: RawPathData) -> Result<Self, Self::Error> {
        Self::new(raw.points, raw.types)
    }
}

impl PathData {
    /// Pair up points and type codes
    pub fn new(points: Vec<PathPoint>, types: Vec<PathPointType>) -> Result<Self, PathError> {
        if points.len() != types.len() {
            return Err(PathError::LengthMismatch {
                points: points.len(),
                types: types.len(),
            });
        }
        Ok(Self { points, types })
    }

    /// Build from `(x, y, code)` triples
    pub fn from_raw(raw: &[(f32, f32, u8)]) -> Self {
        let (points, types) = raw
            .iter()
            .map(|&(x, y, code)| (PathPoint::new(x, y), PathPointType(code)))
            .unzip();
        Self { points, types }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn types(&self) -> &[PathPointType] {
        &self.types
    }

    pub fn point(&self, index: usize) -> PathPoint {
        self.points[index]
    }

    pub fn kind(&self, index: usize) -> PointKind {
        self.types[index].kind()
    }

    /// Number of indices a walk consumes at `index`
    pub fn step_at(&self, index: usize) -> usize {
        match self.kind(index) {
            PointKind::CubicEnd => 3,
            _ => 1,
        }
    }

    /// The point before `index`, or `None` at the start of the path
    pub fn seed_for(&self, index: usize) -> Option<PathPoint> {
        index.checked_sub(1).map(|i| self.points[i])
    }

    /// Check that no curve triple is truncated by the end of the array
    pub fn validate(&self) -> Result<(), PathError> {
        let len = self.len();
        let mut i = 0;
        while i < len {
            let step = self.step_at(i);
            if i + step > len {
                return Err(PathError::MalformedPath { index: i, end: len });
            }
            i += step;
        }
        Ok(())
    }
}
