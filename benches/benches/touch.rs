// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use lightbox_gesture::{PointerId, TouchTracker};

fn bench_two_finger_frames(c: &mut Criterion) {
    c.bench_function("touch/two_finger_frame", |b| {
        let mut touches = TouchTracker::new();
        touches.pointer_down(PointerId(0), Point::new(400.0, 800.0));
        touches.pointer_down(PointerId(1), Point::new(600.0, 800.0));
        let mut step = 0_u32;
        b.iter(|| {
            step = step.wrapping_add(1);
            let d = f64::from(step % 100);
            black_box(touches.pointers_moved(&[
                (PointerId(0), Point::new(400.0 - d, 800.0 + d)),
                (PointerId(1), Point::new(600.0 + d, 800.0 - d)),
            ]))
        });
    });
}

criterion_group!(benches, bench_two_finger_frames);
criterion_main!(benches);
