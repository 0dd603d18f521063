// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Vec2;
use lightbox_gesture::GestureSample;
use lightbox_viewport::reduce::reduce;
use lightbox_viewport::{ImageExtent, Transform, ViewportConfig, ViewportEngine};

/// A pinch out, a circular drag that keeps bumping into the pan box, and a
/// pinch back in, repeated to `len` samples.
fn gesture_stream(len: usize) -> Vec<GestureSample> {
    (0..len)
        .map(|i| {
            let phase = (i % 360) as f64;
            match (i / 120) % 3 {
                0 => GestureSample {
                    zoom_factor: 1.01,
                    rotation_delta: 0.25,
                    finger_count: 2,
                    ..GestureSample::IDLE
                },
                1 => GestureSample::pan(Vec2::new(
                    40.0 * phase.to_radians().cos(),
                    40.0 * phase.to_radians().sin(),
                )),
                _ => GestureSample::zoom(0.99),
            }
        })
        .collect()
}

fn engine() -> ViewportEngine {
    let mut engine = ViewportEngine::with_config(ViewportConfig::default()).unwrap();
    engine.set_image_extent(ImageExtent::new(1080.0, 1920.0).unwrap());
    engine
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/process");

    // Hypothesis: per-sample cost is dominated by debounce rescheduling, which
    // stays O(1) because the queue never holds more than one pending timer.
    for len in [256usize, 4_096, 65_536] {
        let samples = gesture_stream(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("engine", len), &samples, |b, samples| {
            b.iter_batched(
                engine,
                |mut engine| {
                    for (frame, sample) in samples.iter().enumerate() {
                        engine.advance_to(frame as u64 * 16);
                        engine.process(sample);
                    }
                    black_box(engine.transform());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("reduce", len), &samples, |b, samples| {
            let extent = ImageExtent::new(1080.0, 1920.0).ok();
            let config = ViewportConfig::default();
            b.iter(|| {
                let t = samples.iter().fold(Transform::IDENTITY, |t, s| {
                    reduce(t, s, extent, &config).transform
                });
                black_box(t);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
