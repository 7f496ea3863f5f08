//! Conversion drivers
//!
//! Sequential conversion emits the whole path as a single chunk and reports
//! progress per emitter step. Parallel conversion partitions the path, runs
//! one blocking task per chunk in a [`JoinSet`], and assembles the reserved
//! slots once every task has finished. Both produce identical output.

use crate::assembler::OutputSlots;
use crate::bezier::FlattenStep;
use crate::emitter::SegmentEmitter;
use crate::partition::{Chunk, Partitioner};
use crate::progress::{ProgressCollector, ProgressEvent, ProgressTracker};
use std::sync::Arc;
use std::time::Instant;
use svgr_core::{
    render_segments, Error, MilestoneCallback, OutputDocument, PathData, Result, Transform,
    DEFAULT_WORKERS,
};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Tuning for a conversion run
#[derive(Debug, Clone, Copy)]
pub struct ConversionOptions {
    /// Maximum number of parallel chunks
    pub workers: usize,
    /// Curve sampling step
    pub flatten_step: FlattenStep,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            flatten_step: FlattenStep::default(),
        }
    }
}

/// Converts point/type paths into output documents
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConversionOptions,
}

impl Converter {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    fn emitter(&self, transform: Transform) -> SegmentEmitter {
        SegmentEmitter::new(transform, self.options.flatten_step)
    }

    /// Convert on the calling thread, reporting a milestone per emitter step
    pub fn convert_sequential(
        &self,
        path: &PathData,
        transform: Transform,
        document: &OutputDocument,
        mut on_milestone: impl FnMut(u8),
    ) -> Result<String> {
        path.validate()?;
        let started = Instant::now();
        on_milestone(0);

        let tracker = ProgressTracker::new(path.len());
        let emitter = self.emitter(transform);
        let slots = OutputSlots::reserve(usize::from(!path.is_empty()));

        if let Some(chunk) = Chunk::whole(path) {
            let segments = emitter.emit_range(path, chunk.range(), chunk.seed, &mut |n| {
                if let Some(percent) = tracker.record(n) {
                    on_milestone(percent);
                }
            })?;
            debug!(segments = segments.len(), "sequential emission finished");
            slots.fill(chunk.rank, render_segments(&segments))?;
        }

        let output = slots.assemble(document)?;
        info!(
            points = path.len(),
            bytes = output.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "sequential conversion complete"
        );
        Ok(output)
    }

    /// Convert with one blocking task per chunk.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn convert_parallel(
        &self,
        path: Arc<PathData>,
        transform: Transform,
        document: &OutputDocument,
        mut on_milestone: MilestoneCallback,
    ) -> Result<String> {
        path.validate()?;
        let started = Instant::now();
        on_milestone(0);

        let chunks = Partitioner::new(self.options.workers).partition(&path);
        debug!(
            points = path.len(),
            chunks = chunks.len(),
            workers = self.options.workers,
            "partitioned path"
        );

        let slots = OutputSlots::reserve(chunks.len());
        let (events, receiver) = mpsc::unbounded_channel();
        let collector = tokio::spawn(
            ProgressCollector::new(ProgressTracker::new(path.len()), on_milestone).run(receiver),
        );

        let emitter = self.emitter(transform);
        let mut workers = JoinSet::new();
        for chunk in chunks {
            let path = Arc::clone(&path);
            let slots = slots.clone();
            let events = events.clone();
            workers.spawn_blocking(move || -> Result<()> {
                let segments = emitter.emit_chunk(&path, &chunk)?;
                debug!(
                    rank = chunk.rank,
                    start = chunk.start,
                    stop = chunk.stop,
                    segments = segments.len(),
                    "chunk emitted"
                );
                slots.fill(chunk.rank, render_segments(&segments))?;
                // The collector only stops once every sender is gone
                let _ = events.send(ProgressEvent::ChunkCompleted {
                    rank: chunk.rank,
                    points: chunk.len(),
                });
                Ok(())
            });
        }
        drop(events);

        while let Some(joined) = workers.join_next().await {
            joined.map_err(|e| Error::Worker(e.to_string()))??;
        }

        let tracker = collector
            .await
            .map_err(|e| Error::Worker(e.to_string()))?;

        let output = slots.assemble(document)?;
        info!(
            points = tracker.processed(),
            bytes = output.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "parallel conversion complete"
        );
        Ok(output)
    }
}
