//! Document transform applied at emission time
//!
//! The transform is resolved once from document metadata into one of four
//! shapes. Scaling always happens before translation.

use crate::path::PathPoint;
use serde::{Deserialize, Serialize};

/// Scale-then-translate transform
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    #[default]
    None,
    Scale {
        sx: f32,
        sy: f32,
    },
    Translate {
        tx: f32,
        ty: f32,
    },
    ScaleThenTranslate {
        sx: f32,
        sy: f32,
        tx: f32,
        ty: f32,
    },
}

impl Transform {
    /// Resolve optional scale and translate parts into a variant
    pub fn from_parts(scale: Option<(f32, f32)>, translate: Option<(f32, f32)>) -> Self {
        match (scale, translate) {
            (None, None) => Transform::None,
            (Some((sx, sy)), None) => Transform::Scale { sx, sy },
            (None, Some((tx, ty))) => Transform::Translate { tx, ty },
            (Some((sx, sy)), Some((tx, ty))) => Transform::ScaleThenTranslate { sx, sy, tx, ty },
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Transform::None)
    }

    pub fn apply(&self, p: PathPoint) -> PathPoint {
        match *self {
            Transform::None => p,
            Transform::Scale { sx, sy } => PathPoint::new(p.x * sx, p.y * sy),
            Transform::Translate { tx, ty } => PathPoint::new(p.x + tx, p.y + ty),
            Transform::ScaleThenTranslate { sx, sy, tx, ty } => {
                PathPoint::new(p.x * sx + tx, p.y * sy + ty)
            }
        }
    }
}
