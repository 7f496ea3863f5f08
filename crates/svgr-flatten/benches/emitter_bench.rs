use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use svgr_core::{PathData, Transform};
use svgr_flatten::{FlattenStep, Partitioner, SegmentEmitter};

fn wavy_path(curves: usize) -> PathData {
    let mut raw = vec![(0.0, 0.0, 0)];
    for i in 0..curves {
        let x = i as f32 * 4.0;
        raw.push((x + 1.0, 3.0, 3));
        raw.push((x + 3.0, -3.0, 3));
        raw.push((x + 4.0, 0.0, 3));
        if i % 8 == 7 {
            raw.push((x + 4.0, 1.0, 1));
        }
    }
    PathData::from_raw(&raw)
}

fn bench_emit(c: &mut Criterion) {
    let emitter = SegmentEmitter::new(
        Transform::from_parts(Some((2.0, 2.0)), Some((10.0, 10.0))),
        FlattenStep::default(),
    );

    let mut group = c.benchmark_group("emit_all");
    for curves in [100, 1_000, 10_000] {
        let path = wavy_path(curves);
        group.bench_with_input(BenchmarkId::from_parameter(curves), &path, |b, path| {
            b.iter(|| emitter.emit_all(black_box(path)))
        });
    }
    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let path = wavy_path(10_000);
    c.bench_function("partition_20", |b| {
        b.iter(|| Partitioner::new(20).partition(black_box(&path)))
    });
}

criterion_group!(benches, bench_emit, bench_partition);
criterion_main!(benches);
