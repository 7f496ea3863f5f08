//! Attribute value parsing: lengths, number lists, view boxes and group
//! transforms.

use regex::Regex;
use std::sync::LazyLock;
use svgr_core::Transform;
use tracing::warn;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("invalid number regex")
});

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("invalid length regex")
});

static TRANSFORM_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]+)\s*\(([^)]*)\)").expect("invalid transform regex")
});

/// Numeric prefix of a length such as `"210mm"` or `"64.5px"`
pub fn length(value: &str) -> Option<f32> {
    LEADING_NUMBER
        .captures(value)
        .and_then(|caps| caps[1].parse().ok())
        .filter(|v: &f32| v.is_finite())
}

/// Every number in a comma and/or whitespace separated list
pub fn numbers(value: &str) -> Vec<f32> {
    NUMBER
        .find_iter(value)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Width and height of a `viewBox="min-x min-y width height"` value
pub fn view_box_size(value: &str) -> Option<(f32, f32)> {
    match numbers(value).as_slice() {
        [_, _, width, height] => Some((*width, *height)),
        _ => None,
    }
}

/// Resolve a group `transform` attribute into a [`Transform`].
///
/// Only `translate` and `scale` are honoured. When a kind appears more than
/// once the last occurrence wins.
pub fn group_transform(value: &str) -> Transform {
    let mut scale = None;
    let mut translate = None;

    for caps in TRANSFORM_FN.captures_iter(value) {
        let args = numbers(&caps[2]);
        match (&caps[1], args.as_slice()) {
            ("translate", [tx]) => translate = Some((*tx, 0.0)),
            ("translate", [tx, ty]) => translate = Some((*tx, *ty)),
            ("scale", [s]) => scale = Some((*s, *s)),
            ("scale", [sx, sy]) => scale = Some((*sx, *sy)),
            (name, _) => warn!(function = name, "ignoring unsupported group transform"),
        }
    }

    Transform::from_parts(scale, translate)
}
