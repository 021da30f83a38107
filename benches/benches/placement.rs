// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use awning_placement::{PlacementMetrics, Position, candidates, compute_offset, select_position};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};

const TIP: Size = Size::new(120.0, 48.0);
const VIEWPORT: Size = Size::new(1280.0, 720.0);

fn bench_compute_offset(c: &mut Criterion) {
    let target = Rect::new(600.0, 300.0, 680.0, 332.0);
    let metrics = PlacementMetrics::default();

    c.bench_function("compute_offset_all_positions", |b| {
        b.iter(|| {
            for position in Position::ALL {
                black_box(compute_offset(
                    black_box(position),
                    black_box(target),
                    TIP,
                    &metrics,
                ));
            }
        });
    });
}

fn bench_candidates(c: &mut Criterion) {
    c.bench_function("candidates_all_seeds", |b| {
        b.iter(|| {
            for preferred in Position::ALL {
                black_box(candidates(black_box(preferred)));
            }
        });
    });
}

fn bench_select_position(c: &mut Criterion) {
    let metrics = PlacementMetrics::default();
    let mut group = c.benchmark_group("select_position");

    // Early exit on the first candidate.
    let open = Rect::new(600.0, 300.0, 680.0, 332.0);
    group.bench_with_input(BenchmarkId::new("target", "open"), &open, |b, target| {
        b.iter(|| {
            black_box(select_position(
                Position::Top,
                TIP,
                black_box(*target),
                VIEWPORT,
                &metrics,
            ));
        });
    });

    // Preferred side clipped; the scan falls through a few candidates.
    let top_edge = Rect::new(600.0, 4.0, 680.0, 36.0);
    group.bench_with_input(
        BenchmarkId::new("target", "top_edge"),
        &top_edge,
        |b, target| {
            b.iter(|| {
                black_box(select_position(
                    Position::Top,
                    TIP,
                    black_box(*target),
                    VIEWPORT,
                    &metrics,
                ));
            });
        },
    );

    // Cornered target: no candidate is fully visible and the whole list is
    // scored.
    let cornered = Rect::new(-40.0, -12.0, 40.0, 20.0);
    group.bench_with_input(
        BenchmarkId::new("target", "cornered"),
        &cornered,
        |b, target| {
            b.iter(|| {
                black_box(select_position(
                    Position::Top,
                    Size::new(2000.0, 1000.0),
                    black_box(*target),
                    VIEWPORT,
                    &metrics,
                ));
            });
        },
    );

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_offset,
    bench_candidates,
    bench_select_position
);
criterion_main!(benches);
