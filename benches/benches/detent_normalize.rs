// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use undersheet_detent::{Detent, DetentSet, Metrics};

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

fn gen_raw_detents(count: usize, seed: u64) -> Vec<Detent> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(match rng.next_u64() % 4 {
            0 => Detent::ByContent,
            1 => Detent::Fraction(rng.next_f64()),
            // Roughly half of the fixed heights exceed the full-screen
            // height and exercise the filter path.
            2 => Detent::Fixed(rng.next_f64() * 1700.0),
            _ => Detent::FullScreen,
        });
    }
    out
}

fn bench_normalize(c: &mut Criterion) {
    let metrics = Metrics::from_heights(800.0, 50.0);
    let mut group = c.benchmark_group("detent_normalize");
    for &n in &[4usize, 16, 64] {
        let raw = gen_raw_detents(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("normalize_n{}", n), |b| {
            b.iter(|| {
                let set = DetentSet::normalize(black_box(&raw), &metrics);
                black_box(set.len());
            })
        });
    }
    group.finish();
}

fn bench_renormalize_cycle(c: &mut Criterion) {
    // Rotation path: normalize under portrait metrics, then landscape.
    let portrait = Metrics::from_heights(800.0, 50.0);
    let landscape = Metrics::from_heights(380.0, 0.0);
    let raw = gen_raw_detents(16, 0xBADC_F00D_1234_5678);
    let mut group = c.benchmark_group("detent_renormalize");
    group.bench_function("portrait_landscape_n16", |b| {
        b.iter_batched(
            || raw.clone(),
            |raw| {
                let a = DetentSet::normalize(&raw, &portrait);
                let b = DetentSet::normalize(&raw, &landscape);
                black_box((a.len(), b.len()));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_renormalize_cycle);
criterion_main!(benches);
