//! Cubic bezier flattening by uniform parameter sampling.

use svgr_core::{PathPoint, DEFAULT_FLATTEN_STEP};

pub use svgr_core::MIN_FLATTEN_STEP;

/// Sampling step for curve flattening, guaranteed in `[MIN_FLATTEN_STEP, 1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenStep(f32);

impl FlattenStep {
    /// Returns `None` unless `dt` is finite, at least [`MIN_FLATTEN_STEP`]
    /// and below 1
    pub fn new(dt: f32) -> Option<Self> {
        (dt.is_finite() && (MIN_FLATTEN_STEP..1.0).contains(&dt)).then_some(Self(dt))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for FlattenStep {
    fn default() -> Self {
        Self(DEFAULT_FLATTEN_STEP)
    }
}

#[inline]
fn bernstein(t: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let mt = 1.0 - t;
    a * mt * mt * mt + b * 3.0 * t * mt * mt + c * 3.0 * t * t * mt + d * t * t * t
}

/// Evaluate the cubic at parameter `t`
pub fn point_at(t: f32, p0: PathPoint, p1: PathPoint, p2: PathPoint, p3: PathPoint) -> PathPoint {
    PathPoint::new(
        bernstein(t, p0.x, p1.x, p2.x, p3.x),
        bernstein(t, p0.y, p1.y, p2.y, p3.y),
    )
}

/// Sample the cubic at `t = 0, dt, 2dt, ...` while `t < 1`, then append `p3`.
///
/// `t` is accumulated by repeated `f32` addition. The last element is always
/// `p3` itself.
pub fn flatten_cubic(
    p0: PathPoint,
    p1: PathPoint,
    p2: PathPoint,
    p3: PathPoint,
    step: FlattenStep,
) -> Vec<PathPoint> {
    let dt = step.get();
    let mut points = Vec::with_capacity((1.0 / dt) as usize + 2);

    let mut t = 0.0f32;
    while t < 1.0 {
        points.push(point_at(t, p0, p1, p2, p3));
        t += dt;
    }

    points.push(p3);
    points
}
