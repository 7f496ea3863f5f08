//! Segment Emitter
//!
//! Walks a range of a point/type path and produces line segments in path
//! order. The only state carried across the walk is the previous point,
//! which starts as the caller-supplied seed.

use crate::bezier::{flatten_cubic, FlattenStep};
use crate::partition::Chunk;
use std::ops::Range;
use svgr_core::{AdvanceCallback, PathData, PathError, PathPoint, PointKind, Segment, Transform};

/// Emits segments for path ranges under a fixed transform and flatten step
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentEmitter {
    transform: Transform,
    step: FlattenStep,
}

impl SegmentEmitter {
    pub fn new(transform: Transform, step: FlattenStep) -> Self {
        Self { transform, step }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn step(&self) -> FlattenStep {
        self.step
    }

    /// Emit the whole path from an undefined previous point
    pub fn emit_all(&self, path: &PathData) -> Result<Vec<Segment>, PathError> {
        self.emit_range(path, 0..path.len(), None, &mut |_| {})
    }

    /// Emit one partition chunk using its own seed
    pub fn emit_chunk(&self, path: &PathData, chunk: &Chunk) -> Result<Vec<Segment>, PathError> {
        self.emit_range(path, chunk.range(), chunk.seed, &mut |_| {})
    }

    /// Emit `range`, starting from `seed` as the previous point.
    ///
    /// `on_advance` receives the number of indices consumed by every step
    /// (3 for a curve triple, otherwise 1).
    pub fn emit_range(
        &self,
        path: &PathData,
        range: Range<usize>,
        seed: Option<PathPoint>,
        on_advance: AdvanceCallback<'_>,
    ) -> Result<Vec<Segment>, PathError> {
        if range.start > range.end || range.end > path.len() {
            return Err(PathError::RangeOutOfBounds {
                start: range.start,
                stop: range.end.saturating_sub(1),
                len: path.len(),
            });
        }

        let mut segments = Vec::new();
        let mut previous = seed;
        let mut i = range.start;

        while i < range.end {
            let current = path.point(i);
            let consumed = match path.kind(i) {
                PointKind::Start | PointKind::Other => {
                    previous = Some(current);
                    1
                }
                PointKind::Line => {
                    if let Some(prev) = previous {
                        segments.push(Segment::new(
                            self.transform.apply(prev),
                            self.transform.apply(current),
                        ));
                    }
                    previous = Some(current);
                    1
                }
                PointKind::CubicEnd => {
                    if i + 2 >= range.end {
                        return Err(PathError::MalformedPath {
                            index: i,
                            end: range.end,
                        });
                    }
                    let control2 = path.point(i + 1);
                    let end = path.point(i + 2);

                    if let Some(prev) = previous {
                        self.push_curve(&mut segments, prev, current, control2, end);
                    }
                    previous = Some(end);
                    3
                }
            };

            on_advance(consumed);
            i += consumed;
        }

        Ok(segments)
    }

    fn push_curve(
        &self,
        segments: &mut Vec<Segment>,
        start: PathPoint,
        control1: PathPoint,
        control2: PathPoint,
        end: PathPoint,
    ) {
        let flattened: Vec<PathPoint> = flatten_cubic(start, control1, control2, end, self.step)
            .into_iter()
            .map(|p| self.transform.apply(p))
            .collect();

        segments.extend(flattened.windows(2).map(|w| Segment::new(w[0], w[1])));
    }
}
