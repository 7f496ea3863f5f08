//! Property tests for the conversion engine

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use svgr_core::{OutputDocument, PathData, PathPoint, PointKind, Transform};
use svgr_flatten::{
    flatten_cubic, ConversionOptions, Converter, FlattenStep, Partitioner, MIN_FLATTEN_STEP,
};

/// One walk step of a generated path
#[derive(Debug, Clone)]
enum Command {
    Start(f32, f32),
    Line(f32, f32, u8),
    Curve([(f32, f32); 3], u8),
    Other(f32, f32, u8),
}

fn coord() -> std::ops::Range<f32> {
    -1000.0..1000.0
}

fn point() -> impl Strategy<Value = PathPoint> {
    (coord(), coord()).prop_map(PathPoint::from)
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (coord(), coord()).prop_map(|(x, y)| Command::Start(x, y)),
        (coord(), coord(), prop::sample::select(vec![1u8, 129, 160]))
            .prop_map(|(x, y, c)| Command::Line(x, y, c)),
        (
            prop::array::uniform3((coord(), coord())),
            prop::sample::select(vec![3u8, 131])
        )
            .prop_map(|(pts, c)| Command::Curve(pts, c)),
        (coord(), coord(), prop::sample::select(vec![2u8, 32, 128, 255]))
            .prop_map(|(x, y, c)| Command::Other(x, y, c)),
    ]
}

/// Well-formed paths: every curve carries its full triple
fn path() -> impl Strategy<Value = PathData> {
    prop::collection::vec(command(), 0..80).prop_map(|commands| {
        let mut raw = Vec::new();
        for command in commands {
            match command {
                Command::Start(x, y) => raw.push((x, y, 0)),
                Command::Line(x, y, c) | Command::Other(x, y, c) => raw.push((x, y, c)),
                Command::Curve(pts, c) => {
                    // Interior codes are arbitrary; only the first index is classified
                    raw.push((pts[0].0, pts[0].1, c));
                    raw.push((pts[1].0, pts[1].1, 1));
                    raw.push((pts[2].0, pts[2].1, 0));
                }
            }
        }
        PathData::from_raw(&raw)
    })
}

fn transform() -> impl Strategy<Value = Transform> {
    (
        prop::option::of((0.1f32..10.0, 0.1f32..10.0)),
        prop::option::of((coord(), coord())),
    )
        .prop_map(|(scale, translate)| Transform::from_parts(scale, translate))
}

fn step() -> impl Strategy<Value = FlattenStep> {
    (0.01f32..0.99).prop_map(|dt| FlattenStep::new(dt).unwrap_or_default())
}

/// Indices the emitter visits as the first index of a step
fn step_starts(path: &PathData) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut i = 0;
    while i < path.len() {
        starts.push(i);
        i += path.step_at(i);
    }
    starts
}

proptest! {
    #[test]
    fn prop_flatten_ends_exactly_at_end_point(
        p0 in point(), p1 in point(), p2 in point(), p3 in point(),
        dt in MIN_FLATTEN_STEP * 10.0..0.999f32,
    ) {
        let step = FlattenStep::new(dt).unwrap();
        let points = flatten_cubic(p0, p1, p2, p3, step);
        prop_assert!(points.len() >= 2);
        prop_assert_eq!(points[0], p0);
        prop_assert_eq!(*points.last().unwrap(), p3);
    }

    #[test]
    fn prop_partition_never_splits_a_triple(path in path(), workers in 1usize..32) {
        let chunks = Partitioner::new(workers).partition(&path);
        let starts = step_starts(&path);

        prop_assert!(chunks.len() <= workers.max(1));
        let mut expected_start = 0;
        for (rank, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.rank, rank);
            prop_assert_eq!(chunk.start, expected_start);
            prop_assert!(chunk.stop >= chunk.start);
            prop_assert!(starts.contains(&chunk.start));
            if chunk.start > 0 {
                prop_assert!(matches!(path.kind(chunk.start), PointKind::Start | PointKind::Line));
            }
            prop_assert_eq!(chunk.seed, path.seed_for(chunk.start));
            expected_start = chunk.stop + 1;
        }
        prop_assert_eq!(expected_start, path.len());
    }

    #[test]
    fn prop_parallel_equals_sequential(
        path in path(),
        transform in transform(),
        step in step(),
        workers in 1usize..24,
    ) {
        let converter = Converter::new(ConversionOptions { workers, flatten_step: step });
        let document = OutputDocument::new("M", 320.0, 240.0);

        let sequential = converter
            .convert_sequential(&path, transform, &document, |_| {})
            .unwrap();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .build()
            .unwrap();
        let parallel = runtime
            .block_on(converter.convert_parallel(
                Arc::new(path),
                transform,
                &document,
                Box::new(|_: u8| {}),
            ))
            .unwrap();

        prop_assert_eq!(parallel, sequential);
    }

    #[test]
    fn prop_milestones_monotone_and_bounded(path in path(), workers in 1usize..24) {
        let converter = Converter::new(ConversionOptions { workers, ..Default::default() });
        let document = OutputDocument::new("M", 1.0, 1.0);

        let mut sequential = Vec::new();
        converter
            .convert_sequential(&path, Transform::None, &document, |p| sequential.push(p))
            .unwrap();

        let parallel = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&parallel);
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(converter.convert_parallel(
                Arc::new(path.clone()),
                Transform::None,
                &document,
                Box::new(move |p: u8| sink.lock().unwrap().push(p)),
            ))
            .unwrap();
        let parallel = parallel.lock().unwrap().clone();

        for milestones in [&sequential, &parallel] {
            prop_assert_eq!(milestones.first(), Some(&0));
            prop_assert!(milestones.iter().all(|&p| p <= 100));
            prop_assert!(milestones.windows(2).all(|w| w[0] <= w[1]));
            if !path.is_empty() {
                prop_assert_eq!(milestones.last(), Some(&100));
            }
        }
    }

    #[test]
    fn prop_header_carries_declared_size(
        width in 0.0f32..100000.0,
        height in 0.0f32..100000.0,
        path in path(),
    ) {
        let document = OutputDocument::new("MAGIC", width, height);
        let output = Converter::default()
            .convert_sequential(&path, Transform::None, &document, |_| {})
            .unwrap();
        let expected = format!("MAGIC|{}x{}|", width, height);
        prop_assert!(output.starts_with(&expected));

        let size = output.split('|').nth(1).unwrap();
        let (w, h) = size.split_once('x').unwrap();
        prop_assert_eq!(w.parse::<f32>().unwrap(), width);
        prop_assert_eq!(h.parse::<f32>().unwrap(), height);
    }
}
