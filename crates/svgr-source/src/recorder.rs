//! Records lyon path events as point/type arrays.
//!
//! Every figure starts with a `START` point. Lines add one `LINE` point and
//! curves add three `BEZIER` points (quadratics are elevated to cubics
//! first). Closing a figure sets the close flag on its last point.

use lyon::geom::QuadraticBezierSegment;
use lyon::math::Point;
use lyon::path::{Event, Path};
use svgr_core::{PathData, PathError, PathPoint, PathPointType};

#[derive(Debug, Default)]
pub struct PathRecorder {
    points: Vec<PathPoint>,
    types: Vec<PathPointType>,
    figures: usize,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of figures recorded so far
    pub fn figures(&self) -> usize {
        self.figures
    }

    fn push(&mut self, p: Point, kind: PathPointType) {
        self.points.push(PathPoint::new(p.x, p.y));
        self.types.push(kind);
    }

    fn push_cubic(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.push(ctrl1, PathPointType::bezier());
        self.push(ctrl2, PathPointType::bezier());
        self.push(to, PathPointType::bezier());
    }

    pub fn record(&mut self, path: &Path) {
        for event in path.iter() {
            match event {
                Event::Begin { at } => {
                    self.figures += 1;
                    self.push(at, PathPointType::start());
                }
                Event::Line { to, .. } => self.push(to, PathPointType::line()),
                Event::Quadratic { from, ctrl, to } => {
                    let cubic = QuadraticBezierSegment { from, ctrl, to }.to_cubic();
                    self.push_cubic(cubic.ctrl1, cubic.ctrl2, cubic.to);
                }
                Event::Cubic {
                    ctrl1, ctrl2, to, ..
                } => self.push_cubic(ctrl1, ctrl2, to),
                Event::End { close, .. } => {
                    if close {
                        if let Some(last) = self.types.last_mut() {
                            *last = last.closed();
                        }
                    }
                }
            }
        }
    }

    pub fn finish(self) -> Result<PathData, PathError> {
        PathData::new(self.points, self.types)
    }
}
