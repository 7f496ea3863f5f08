//! Basic SVG shapes as lyon paths
//!
//! Each builder returns `None` when the element has no drawable geometry
//! (missing or non-positive sizes, too few points).

use crate::attributes::{length, numbers};
use crate::path_data::Pen;
use lyon::geom::ArcFlags;
use lyon::math::{point, vector, Angle, Box2D};
use lyon::path::{Path, Winding};
use svg::node::Attributes;

fn attr<'a>(attributes: &'a Attributes, name: &str) -> Option<&'a str> {
    attributes.get(name).map(|value| &**value)
}

fn number(attributes: &Attributes, name: &str) -> Option<f32> {
    attr(attributes, name).and_then(length)
}

fn number_or_zero(attributes: &Attributes, name: &str) -> f32 {
    number(attributes, name).unwrap_or(0.0)
}

pub fn line(attributes: &Attributes) -> Option<Path> {
    let mut builder = Path::builder();
    builder.begin(point(
        number_or_zero(attributes, "x1"),
        number_or_zero(attributes, "y1"),
    ));
    builder.line_to(point(
        number_or_zero(attributes, "x2"),
        number_or_zero(attributes, "y2"),
    ));
    builder.end(false);
    Some(builder.build())
}

/// `<polyline>` when `closed` is false, `<polygon>` otherwise
pub fn poly(attributes: &Attributes, closed: bool) -> Option<Path> {
    let coords = numbers(attr(attributes, "points")?);
    let mut pairs = coords.chunks_exact(2).map(|p| point(p[0], p[1]));

    let first = pairs.next()?;
    let mut builder = Path::builder();
    builder.begin(first);
    for p in pairs {
        builder.line_to(p);
    }
    builder.end(closed);
    Some(builder.build())
}

pub fn rect(attributes: &Attributes) -> Option<Path> {
    let x = number_or_zero(attributes, "x");
    let y = number_or_zero(attributes, "y");
    let width = number(attributes, "width").filter(|w| *w > 0.0)?;
    let height = number(attributes, "height").filter(|h| *h > 0.0)?;

    // A missing corner radius takes the value of the other one
    let (rx, ry) = match (number(attributes, "rx"), number(attributes, "ry")) {
        (None, None) => (0.0, 0.0),
        (Some(rx), None) => (rx, rx),
        (None, Some(ry)) => (ry, ry),
        (Some(rx), Some(ry)) => (rx, ry),
    };
    let rx = rx.clamp(0.0, width / 2.0);
    let ry = ry.clamp(0.0, height / 2.0);

    if rx == 0.0 || ry == 0.0 {
        let mut builder = Path::builder();
        builder.add_rectangle(
            &Box2D::new(point(x, y), point(x + width, y + height)),
            Winding::Positive,
        );
        return Some(builder.build());
    }

    let corner = |pen: &mut Pen, to| {
        let flags = ArcFlags {
            large_arc: false,
            sweep: true,
        };
        pen.arc_to((rx, ry), 0.0, flags, to);
    };

    let mut pen = Pen::new();
    pen.move_to(point(x + rx, y));
    pen.line_to(point(x + width - rx, y));
    corner(&mut pen, point(x + width, y + ry));
    pen.line_to(point(x + width, y + height - ry));
    corner(&mut pen, point(x + width - rx, y + height));
    pen.line_to(point(x + rx, y + height));
    corner(&mut pen, point(x, y + height - ry));
    pen.line_to(point(x, y + ry));
    corner(&mut pen, point(x + rx, y));
    pen.close();
    Some(pen.finish())
}

pub fn circle(attributes: &Attributes) -> Option<Path> {
    let r = number(attributes, "r").filter(|r| *r > 0.0)?;
    let mut builder = Path::builder();
    builder.add_circle(
        point(number_or_zero(attributes, "cx"), number_or_zero(attributes, "cy")),
        r,
        Winding::Positive,
    );
    Some(builder.build())
}

pub fn ellipse(attributes: &Attributes) -> Option<Path> {
    let rx = number(attributes, "rx").filter(|r| *r > 0.0)?;
    let ry = number(attributes, "ry").filter(|r| *r > 0.0)?;
    let mut builder = Path::builder();
    builder.add_ellipse(
        point(number_or_zero(attributes, "cx"), number_or_zero(attributes, "cy")),
        vector(rx, ry),
        Angle::radians(0.0),
        Winding::Positive,
    );
    Some(builder.build())
}
