// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use lookout_host_ref::{SimElement, SimHost};
use lookout_observer::{Observer, ObserverOptions, ViewEvent, ViewRect};

/// A host showing a vertical strip of `n` rows, all inside the viewport.
fn strip_host(n: usize) -> (SimHost, Vec<SimElement>) {
    let row_height = 40.0;
    let host = SimHost::new(800.0, n as f64 * row_height);
    let elements = (0..n)
        .map(|i| {
            host.insert_element(ViewRect::from_origin_size(
                0.0,
                i as f64 * row_height,
                800.0,
                row_height - 8.0,
            ))
        })
        .collect();
    (host, elements)
}

fn observing_all(host: &SimHost, elements: &[SimElement]) -> Observer<SimHost> {
    let mut observer = Observer::new(
        host.clone(),
        |entries, _observer: &mut Observer<SimHost>| {
            black_box(entries.len());
        },
        ObserverOptions::default(),
    );
    for element in elements {
        observer.observe(*element).unwrap();
    }
    observer
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("observer/scan");

    for n in [64_usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));

        // The common case: a scroll event arrives and nothing crossed the
        // boundary. Measures the pure re-read-and-compare loop.
        group.bench_with_input(BenchmarkId::new("no_flips", n), &n, |b, &n| {
            let (host, elements) = strip_host(n);
            let mut observer = observing_all(&host, &elements);
            b.iter(|| {
                observer.handle_view_event(ViewEvent::Scroll);
            });
        });

        // Worst case: every element flips out, is delivered, and the wake
        // runs the callback.
        group.bench_with_input(BenchmarkId::new("all_flip_and_deliver", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let (host, elements) = strip_host(n);
                    let observer = observing_all(&host, &elements);
                    (host, elements, observer)
                },
                |(host, elements, mut observer)| {
                    for element in &elements {
                        host.set_element_rect(
                            *element,
                            ViewRect::from_origin_size(0.0, 1.0e6, 800.0, 32.0),
                        );
                    }
                    observer.handle_view_event(ViewEvent::Scroll);
                    for wake in host.drain_wakes() {
                        observer.wake(wake);
                    }
                    black_box(observer);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_queue_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("observer/queue");

    for n in [64_usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("observe_then_disconnect", n), &n, |b, &n| {
            let (host, elements) = strip_host(n);
            b.iter_batched(
                || {
                    Observer::new(
                        host.clone(),
                        |entries: &[_], _observer: &mut Observer<SimHost>| {
                            black_box(entries.len());
                        },
                        ObserverOptions::default(),
                    )
                },
                |mut observer| {
                    for element in &elements {
                        observer.observe(*element).unwrap();
                    }
                    observer.disconnect();
                    black_box(observer);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan, bench_queue_churn);
criterion_main!(benches);
