// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use understory_rotatable::{
    Axis, AxisResizeEngine, Modifiers, PointerButton, ResizeGeometry, ResizeState, Rotatable,
};

/// Pointer positions along a short arc, as a drag would deliver them.
fn drag_path(start: Point, ticks: usize) -> Vec<Point> {
    (1..=ticks)
        .map(|i| {
            let t = i as f64 / ticks as f64;
            start + Vec2::new(80.0 * t, 40.0 * (t * 3.0).sin())
        })
        .collect()
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotatable/resize");
    let path = drag_path(Point::new(120.0, 80.0), 256);

    for (name, rotation) in [("unrotated", 0.0), ("rotated", 0.7)] {
        let geometry = ResizeGeometry::new(Point::new(20.0, 20.0), Size::new(100.0, 60.0))
            .with_transform(Affine::rotate(rotation));

        group.bench_function(format!("drag_256_ticks/{name}"), |b| {
            b.iter_batched(
                || {
                    let mut engine = AxisResizeEngine::new();
                    let mut resize = ResizeState::new();
                    resize.press(
                        Axis::Se,
                        geometry,
                        Point::new(120.0, 80.0),
                        PointerButton::Primary,
                        &mut engine,
                    );
                    (engine, resize)
                },
                |(mut engine, mut resize)| {
                    for &pointer in &path {
                        black_box(resize.drag(pointer, Modifiers::empty(), &mut engine));
                    }
                    black_box(resize.release(&mut engine));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotatable/rotate");
    let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
    let path = drag_path(Point::new(100.0, 0.0), 256);

    for (name, modifiers) in [("free", Modifiers::empty()), ("snapped", Modifiers::SHIFT)] {
        group.bench_function(format!("drag_256_ticks/{name}"), |b| {
            b.iter_batched(
                || {
                    let mut rotatable = Rotatable::default();
                    rotatable.press(
                        bounds,
                        Affine::IDENTITY,
                        Point::new(100.0, 0.0),
                        PointerButton::Primary,
                    );
                    rotatable
                },
                |mut rotatable| {
                    for &pointer in &path {
                        black_box(rotatable.pointer_move(pointer, modifiers));
                    }
                    black_box(rotatable.release());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resize, bench_rotate);
criterion_main!(benches);
