//! Progress Reporter
//!
//! A [`ProgressTracker`] turns processed-point counts into whole-percent
//! milestones, reporting a value only when it differs from the last one.
//! In parallel mode the tracker is owned by a single collector task that
//! receives [`ProgressEvent`]s from the workers over a channel.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use svgr_core::MilestoneCallback;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::trace;

/// Processed-point counter with deduplicated percentage milestones
#[derive(Debug)]
pub struct ProgressTracker {
    total: usize,
    processed: AtomicUsize,
    last: AtomicU8,
}

impl ProgressTracker {
    /// Track progress over `total` points. The last milestone starts at 0,
    /// which callers announce before any work is done.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: AtomicUsize::new(0),
            last: AtomicU8::new(0),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Acquire)
    }

    /// Add `points` to the count; returns the new percentage if it changed
    pub fn record(&self, points: usize) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let processed = self.processed.fetch_add(points, Ordering::AcqRel) + points;
        let percent = percent_of(processed, self.total);
        let previous = self.last.swap(percent, Ordering::AcqRel);
        (previous != percent).then_some(percent)
    }
}

/// `round(processed / total * 100)`, ties to even, clamped to 100
pub fn percent_of(processed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let ratio = processed as f64 / total as f64;
    (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// Completion notice sent by a worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    ChunkCompleted { rank: usize, points: usize },
}

/// Owns the tracker and forwards milestones to a callback
pub struct ProgressCollector {
    tracker: ProgressTracker,
    on_milestone: MilestoneCallback,
}

impl ProgressCollector {
    pub fn new(tracker: ProgressTracker, on_milestone: MilestoneCallback) -> Self {
        Self {
            tracker,
            on_milestone,
        }
    }

    /// Consume events until every sender is dropped; returns the tracker
    pub async fn run(mut self, mut events: UnboundedReceiver<ProgressEvent>) -> ProgressTracker {
        while let Some(event) = events.recv().await {
            let ProgressEvent::ChunkCompleted { rank, points } = event;
            trace!(rank, points, "chunk completed");
            if let Some(percent) = self.tracker.record(points) {
                (self.on_milestone)(percent);
            }
        }
        self.tracker
    }
}
