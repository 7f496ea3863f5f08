//! # svgr Core
//!
//! Core types for svgr: the point/type path model, the emission-time
//! transform, output segments and document header, and the error types
//! shared by every crate in the workspace.

pub mod constants;
pub mod document;
pub mod error;
pub mod path;
pub mod segment;
pub mod transform;
pub mod types;

pub use constants::{DEFAULT_FLATTEN_STEP, DEFAULT_WORKERS, MIN_FLATTEN_STEP, OUTPUT_MAGIC};
pub use document::{OutputDocument, PathSource, SourceDocument};
pub use error::{DocumentError, Error, OutputError, PathError, Result};
pub use path::{PathData, PathPoint, PathPointType, PointKind};
pub use segment::{render_segments, Segment};
pub use transform::Transform;

pub use types::{thread_safe_vec, AdvanceCallback, MilestoneCallback, ThreadSafeVec};
