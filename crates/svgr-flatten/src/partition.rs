//! Partitioner
//!
//! Splits a path into contiguous chunks for parallel emission. A chunk may
//! only begin at a `Start` or `Line` point that the emitter would visit as
//! a step of its own, so no chunk boundary ever falls inside a curve triple.

use std::ops::Range;
use svgr_core::{PathData, PathPoint, DEFAULT_WORKERS};

/// A contiguous, inclusive index range `[start, stop]` of the path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chunk {
    /// Position of the chunk in output order
    pub rank: usize,
    pub start: usize,
    pub stop: usize,
    /// The point preceding `start`, or `None` when `start == 0`
    pub seed: Option<PathPoint>,
}

impl Chunk {
    /// A single chunk covering all of `path`, or `None` for an empty path
    pub fn whole(path: &PathData) -> Option<Self> {
        (!path.is_empty()).then(|| Self {
            rank: 0,
            start: 0,
            stop: path.len() - 1,
            seed: None,
        })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stop - self.start + 1
    }

    /// The chunk as a half-open range
    pub fn range(&self) -> Range<usize> {
        self.start..self.stop + 1
    }
}

/// Splits paths into at most `workers` chunks
#[derive(Debug, Clone, Copy)]
pub struct Partitioner {
    workers: usize,
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl Partitioner {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Target chunk size for a path of `len` points
    pub fn target_size(&self, len: usize) -> usize {
        let workers = self.workers.clamp(1, len.max(1));
        len.div_ceil(workers).max(1)
    }

    /// Split `path` into ordered, non-overlapping chunks covering every index
    pub fn partition(&self, path: &PathData) -> Vec<Chunk> {
        let len = path.len();
        let target = self.target_size(len);
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < len {
            let stop = next_boundary(path, start, start + target).map_or(len - 1, |b| b - 1);
            chunks.push(Chunk {
                rank: chunks.len(),
                start,
                stop,
                seed: path.seed_for(start),
            });
            start = stop + 1;
        }

        chunks
    }
}

/// First index at or after `probe` where a chunk may begin.
///
/// Walks from `start` with the emitter's stepping so indices inside a curve
/// triple are skipped.
fn next_boundary(path: &PathData, start: usize, probe: usize) -> Option<usize> {
    let mut i = start;
    while i < path.len() {
        if i >= probe && path.kind(i).is_boundary() {
            return Some(i);
        }
        i += path.step_at(i);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> PathData {
        let raw: Vec<(f32, f32, u8)> = (0..n)
            .map(|i| (i as f32, 0.0, if i == 0 { 0 } else { 1 }))
            .collect();
        PathData::from_raw(&raw)
    }

    fn assert_covers(chunks: &[Chunk], len: usize) {
        assert_eq!(chunks.first().map(|c| c.start), Some(0));
        assert_eq!(chunks.last().map(|c| c.stop), Some(len - 1));
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].stop + 1, pair[1].start);
        }
        for (rank, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.rank, rank);
        }
    }

    #[test]
    fn test_empty_path_has_no_chunks() {
        assert!(Partitioner::default().partition(&PathData::default()).is_empty());
    }

    #[test]
    fn test_even_split_of_lines() {
        let path = lines(100);
        let chunks = Partitioner::new(4).partition(&path);
        assert_eq!(chunks.len(), 4);
        assert_covers(&chunks, 100);
        assert!(chunks.iter().all(|c| c.len() == 25));
    }

    #[test]
    fn test_workers_capped_at_length() {
        let path = lines(3);
        let chunks = Partitioner::new(20).partition(&path);
        assert_eq!(chunks.len(), 3);
        assert_covers(&chunks, 3);
    }

    #[test]
    fn test_zero_workers_treated_as_one() {
        let path = lines(5);
        let chunks = Partitioner::new(0).partition(&path);
        assert_eq!(chunks.len(), 1);
        assert_eq!((chunks[0].start, chunks[0].stop), (0, 4));
    }

    #[test]
    fn test_seeds_are_preceding_points() {
        let path = lines(10);
        let chunks = Partitioner::new(3).partition(&path);
        assert_eq!(chunks[0].seed, None);
        for chunk in &chunks[1..] {
            assert_eq!(chunk.seed, Some(path.point(chunk.start - 1)));
        }
    }

    #[test]
    fn test_boundary_skips_curve_triple() {
        // 0 start, 1..=3 curve, 4..=6 curve, 7 line
        let path = PathData::from_raw(&[
            (0.0, 0.0, 0),
            (1.0, 1.0, 3),
            (2.0, 1.0, 3),
            (3.0, 0.0, 3),
            (4.0, 1.0, 3),
            (5.0, 1.0, 3),
            (6.0, 0.0, 3),
            (7.0, 0.0, 1),
        ]);
        let chunks = Partitioner::new(4).partition(&path);
        assert_covers(&chunks, 8);
        assert_eq!(chunks.len(), 2);
        assert_eq!((chunks[0].start, chunks[0].stop), (0, 6));
        assert_eq!((chunks[1].start, chunks[1].stop), (7, 7));
    }

    #[test]
    fn test_line_coded_control_point_is_not_a_boundary() {
        // The triple at 1 carries a line code on its second control point
        let path = PathData::from_raw(&[
            (0.0, 0.0, 0),
            (1.0, 1.0, 3),
            (2.0, 1.0, 1),
            (3.0, 0.0, 3),
            (4.0, 0.0, 1),
        ]);
        let chunks = Partitioner::new(5).partition(&path);
        assert_covers(&chunks, 5);
        assert!(chunks.iter().all(|c| c.start != 2 && c.start != 3));
    }

    #[test]
    fn test_no_boundary_gives_single_chunk() {
        let path = PathData::from_raw(&[
            (0.0, 0.0, 0),
            (1.0, 1.0, 3),
            (2.0, 1.0, 3),
            (3.0, 0.0, 3),
        ]);
        let chunks = Partitioner::new(4).partition(&path);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], Chunk::whole(&path).unwrap());
    }
}
