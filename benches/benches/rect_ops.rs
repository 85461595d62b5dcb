// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use lookout_rect::ViewRect;

/// An `n`×`n` grid of overlapping cells, mimicking a tiled layout: every
/// rect is slightly larger than its cell so neighbors overlap, and rects in
/// the lower-right half fall outside the reference viewport.
fn gen_grid_rects(n: usize, cell: f64) -> Vec<ViewRect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(ViewRect::from_origin_size(
                x as f64 * cell,
                y as f64 * cell,
                cell * 1.25,
                cell * 1.25,
            ));
        }
    }
    out
}

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect/intersect");

    for n in [32_usize, 64, 128] {
        let rects = gen_grid_rects(n, 16.0);
        // A viewport covering roughly a quarter of the grid, so results mix
        // empty and non-empty about evenly.
        let viewport = ViewRect::viewport(n as f64 * 8.0, n as f64 * 8.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_with_input(BenchmarkId::new("vs_viewport", n), &rects, |b, rects| {
            b.iter(|| {
                let mut non_empty = 0_usize;
                for rect in rects {
                    if !rect.intersect(viewport).is_empty() {
                        non_empty += 1;
                    }
                }
                black_box(non_empty);
            });
        });

        group.bench_with_input(BenchmarkId::new("pairwise_row", n), &rects, |b, rects| {
            b.iter(|| {
                let mut acc = 0.0_f64;
                for pair in rects.windows(2) {
                    acc += pair[0].intersect(pair[1]).width;
                }
                black_box(acc);
            });
        });
    }

    group.finish();
}

fn bench_emptiness(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect/is_empty");

    let n = 64_usize;
    let viewport = ViewRect::viewport(n as f64 * 8.0, n as f64 * 8.0);
    let overlaps: Vec<ViewRect> = gen_grid_rects(n, 16.0)
        .iter()
        .map(|rect| rect.intersect(viewport))
        .collect();
    group.throughput(Throughput::Elements((n * n) as u64));

    group.bench_function("computed_overlaps", |b| {
        b.iter(|| {
            let empties = overlaps.iter().filter(|rect| rect.is_empty()).count();
            black_box(empties);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_intersect, bench_emptiness);
criterion_main!(benches);
