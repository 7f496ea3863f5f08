//! # svgr Flatten
//!
//! The conversion engine: turns a point/type path into ordered straight-line
//! segments and renders them into an output document.
//!
//! ## Components
//!
//! - **Bezier Flattener**: uniform parameter sampling of cubic curves
//! - **Segment Emitter**: walks a path range and emits segments in order
//! - **Partitioner**: splits a path into chunks that never cut a curve
//! - **Assembler**: rank-ordered output slots filled by workers
//! - **Progress Reporter**: deduplicated percentage milestones
//! - **Converter**: sequential and parallel drivers over the above

pub mod assembler;
pub mod bezier;
pub mod converter;
pub mod emitter;
pub mod partition;
pub mod progress;

pub use assembler::OutputSlots;
pub use bezier::{flatten_cubic, point_at, FlattenStep, MIN_FLATTEN_STEP};
pub use converter::{ConversionOptions, Converter};
pub use emitter::SegmentEmitter;
pub use partition::{Chunk, Partitioner};
pub use progress::{percent_of, ProgressCollector, ProgressEvent, ProgressTracker};
