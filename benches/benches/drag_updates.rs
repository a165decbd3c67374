// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_swipe::config::SwipeConfig;
use understory_swipe::controller::SwipeController;
use understory_swipe::layout::SwipeLayout;
use understory_swipe::swipable::Swipable;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A drag that wanders back and forth across both thresholds.
fn gen_jittery_drag(n: usize, width: f64) -> Vec<f64> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut x = 0.0_f64;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        x += (rng.next_f64() - 0.5) * 24.0;
        x = x.clamp(-width, width);
        out.push(x);
    }
    out
}

fn controller(width: f64) -> SwipeController<&'static str, u32> {
    let config = SwipeConfig::builder()
        .leading("pin", 0x8e44ad, || {})
        .trailing("trash", 0x2980b9, || {})
        .build()
        .expect("default tuning is valid");
    let mut c = SwipeController::new(config);
    c.on_content_measured(width);
    c
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    for &n in &[64usize, 1024, 16384] {
        let drag = gen_jittery_drag(n, 320.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("drag_update_n{}", n), |b| {
            b.iter_batched(
                || controller(320.0),
                |mut ctl| {
                    let mut changes = 0_usize;
                    for &x in &drag {
                        changes += usize::from(ctl.on_drag_update(x).is_some());
                    }
                    black_box(ctl.on_drag_end());
                    black_box(changes);
                },
                BatchSize::SmallInput,
            )
        });
    }
    let drag = gen_jittery_drag(1024, 320.0);
    group.bench_function("drag_update_with_observer", |b| {
        b.iter_batched(
            || {
                let mut ctl = controller(320.0);
                ctl.subscribe(|s: &understory_swipe::types::SwipeState| {
                    black_box(SwipeLayout::compute(s, Size::new(320.0, 56.0)));
                });
                ctl
            },
            |mut ctl| {
                for &x in &drag {
                    black_box(ctl.on_drag_update(x));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_swipable(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipable");
    let drag = gen_jittery_drag(1024, 320.0);
    group.throughput(Throughput::Elements(drag.len() as u64));
    group.bench_function("pointer_stream_1024", |b| {
        b.iter_batched(
            || {
                let config = SwipeConfig::builder()
                    .leading("pin", 0_u32, || {})
                    .trailing("trash", 1_u32, || {})
                    .build()
                    .expect("default tuning is valid");
                let mut row = Swipable::new((), config);
                row.measure(Size::new(320.0, 56.0));
                row
            },
            |mut row| {
                row.pointer_down(Point::new(160.0, 28.0));
                for &x in &drag {
                    black_box(row.pointer_move(Point::new(160.0 + x, 28.0)));
                }
                black_box(row.pointer_up());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_controller, bench_swipable);
criterion_main!(benches);
