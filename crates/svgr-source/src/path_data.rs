//! SVG path data to lyon paths
//!
//! Path data is tokenised by the `svg` crate. The [`Pen`] then resolves
//! relative coordinates, smooth-curve reflections and implicit subpaths
//! while driving a lyon builder. Elliptical arcs become cubic curves.

use lyon::geom::{ArcFlags, SvgArc};
use lyon::math::{point, vector, Angle, Point};
use lyon::path::path::Builder;
use lyon::path::Path;
use svg::node::element::path::{Command, Data, Position};
use svgr_core::{Error, Result};

/// Parse a `d` attribute into a lyon path
pub fn parse_path_data(d: &str) -> Result<Path> {
    let data = Data::parse(d).map_err(|e| Error::parse_failure(format!("invalid path data: {e}")))?;
    let mut pen = Pen::new();
    for command in data.iter() {
        pen.apply(command);
    }
    Ok(pen.finish())
}

/// Stateful cursor over a lyon builder with SVG subpath semantics
pub struct Pen {
    builder: Builder,
    current: Point,
    start: Point,
    active: bool,
    last_cubic_ctrl: Option<Point>,
    last_quad_ctrl: Option<Point>,
}

impl Default for Pen {
    fn default() -> Self {
        Self::new()
    }
}

impl Pen {
    pub fn new() -> Self {
        Self {
            builder: Path::builder(),
            current: point(0.0, 0.0),
            start: point(0.0, 0.0),
            active: false,
            last_cubic_ctrl: None,
            last_quad_ctrl: None,
        }
    }

    pub fn current(&self) -> Point {
        self.current
    }

    fn begin_if_needed(&mut self) {
        if !self.active {
            self.builder.begin(self.current);
            self.start = self.current;
            self.active = true;
        }
    }

    pub fn move_to(&mut self, to: Point) {
        if self.active {
            self.builder.end(false);
        }
        self.builder.begin(to);
        self.active = true;
        self.current = to;
        self.start = to;
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    pub fn line_to(&mut self, to: Point) {
        self.begin_if_needed();
        self.builder.line_to(to);
        self.current = to;
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.begin_if_needed();
        self.builder.cubic_bezier_to(ctrl1, ctrl2, to);
        self.current = to;
        self.last_cubic_ctrl = Some(ctrl2);
        self.last_quad_ctrl = None;
    }

    pub fn quadratic_to(&mut self, ctrl: Point, to: Point) {
        self.begin_if_needed();
        self.builder.quadratic_bezier_to(ctrl, to);
        self.current = to;
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = Some(ctrl);
    }

    /// Elliptical arc from the current point, following SVG's endpoint
    /// parameterisation
    pub fn arc_to(&mut self, radii: (f32, f32), x_rotation: f32, flags: ArcFlags, to: Point) {
        if to == self.current {
            return;
        }
        let arc = SvgArc {
            from: self.current,
            to,
            radii: vector(radii.0.abs(), radii.1.abs()),
            x_rotation: Angle::degrees(x_rotation),
            flags,
        };
        if arc.is_straight_line() {
            self.line_to(to);
            return;
        }

        self.begin_if_needed();
        let builder = &mut self.builder;
        arc.to_arc().for_each_cubic_bezier(&mut |c| {
            builder.cubic_bezier_to(c.ctrl1, c.ctrl2, c.to);
        });
        self.current = to;
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    pub fn close(&mut self) {
        if self.active {
            self.builder.close();
            self.active = false;
        }
        self.current = self.start;
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    pub fn finish(mut self) -> Path {
        if self.active {
            self.builder.end(false);
        }
        self.builder.build()
    }

    fn resolve(&self, position: &Position, x: f32, y: f32) -> Point {
        match position {
            Position::Absolute => point(x, y),
            Position::Relative => self.current + vector(x, y),
        }
    }

    fn reflect(&self, ctrl: Option<Point>) -> Point {
        ctrl.map_or(self.current, |c| self.current + (self.current - c))
    }

    /// Apply one path data command, including any implicit repeats
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::Move(pos, params) => {
                for (i, p) in params.chunks_exact(2).enumerate() {
                    let to = self.resolve(pos, p[0], p[1]);
                    // Extra coordinate pairs are implicit line commands
                    if i == 0 {
                        self.move_to(to);
                    } else {
                        self.line_to(to);
                    }
                }
            }
            Command::Line(pos, params) => {
                for p in params.chunks_exact(2) {
                    let to = self.resolve(pos, p[0], p[1]);
                    self.line_to(to);
                }
            }
            Command::HorizontalLine(pos, params) => {
                for &x in params.iter() {
                    let x = match pos {
                        Position::Absolute => x,
                        Position::Relative => self.current.x + x,
                    };
                    self.line_to(point(x, self.current.y));
                }
            }
            Command::VerticalLine(pos, params) => {
                for &y in params.iter() {
                    let y = match pos {
                        Position::Absolute => y,
                        Position::Relative => self.current.y + y,
                    };
                    self.line_to(point(self.current.x, y));
                }
            }
            Command::CubicCurve(pos, params) => {
                for p in params.chunks_exact(6) {
                    let ctrl1 = self.resolve(pos, p[0], p[1]);
                    let ctrl2 = self.resolve(pos, p[2], p[3]);
                    let to = self.resolve(pos, p[4], p[5]);
                    self.cubic_to(ctrl1, ctrl2, to);
                }
            }
            Command::SmoothCubicCurve(pos, params) => {
                for p in params.chunks_exact(4) {
                    let ctrl1 = self.reflect(self.last_cubic_ctrl);
                    let ctrl2 = self.resolve(pos, p[0], p[1]);
                    let to = self.resolve(pos, p[2], p[3]);
                    self.cubic_to(ctrl1, ctrl2, to);
                }
            }
            Command::QuadraticCurve(pos, params) => {
                for p in params.chunks_exact(4) {
                    let ctrl = self.resolve(pos, p[0], p[1]);
                    let to = self.resolve(pos, p[2], p[3]);
                    self.quadratic_to(ctrl, to);
                }
            }
            Command::SmoothQuadraticCurve(pos, params) => {
                for p in params.chunks_exact(2) {
                    let ctrl = self.reflect(self.last_quad_ctrl);
                    let to = self.resolve(pos, p[0], p[1]);
                    self.quadratic_to(ctrl, to);
                }
            }
            Command::EllipticalArc(pos, params) => {
                for p in params.chunks_exact(7) {
                    let flags = ArcFlags {
                        large_arc: p[3] != 0.0,
                        sweep: p[4] != 0.0,
                    };
                    let to = self.resolve(pos, p[5], p[6]);
                    self.arc_to((p[0], p[1]), p[2], flags, to);
                }
            }
            Command::Close => self.close(),
        }
    }
}
