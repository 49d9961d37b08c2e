// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use undersheet_detent::{Detent, Metrics};
use undersheet_session::config::SheetConfig;
use undersheet_session::session::SheetSession;

fn presented_session(metrics: &Metrics) -> SheetSession {
    let config = SheetConfig {
        detents: Some(vec![
            Detent::Fixed(200.0),
            Detent::Fraction(0.5),
            Detent::FullScreen,
        ]),
        ..SheetConfig::default()
    };
    let mut session = SheetSession::new(config, metrics);
    session.present();
    session
}

fn bench_drag_changed(c: &mut Criterion) {
    let metrics = Metrics::from_heights(800.0, 50.0);
    // One downward and one upward sweep, 64 move events each, like a finger
    // crossing the screen at a typical event rate.
    let translations: Vec<f64> = (0..64)
        .map(|i| f64::from(i) * 3.0)
        .chain((0..64).map(|i| f64::from(i) * -3.0))
        .collect();

    let mut group = c.benchmark_group("session_drag_changed");
    group.throughput(Throughput::Elements(translations.len() as u64));
    group.bench_function("sweep_128_events", |b| {
        b.iter_batched(
            || presented_session(&metrics),
            |mut session| {
                for &dy in &translations {
                    black_box(session.drag_changed(dy, &metrics));
                }
                black_box(session.height(&metrics));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_full_gesture_cycle(c: &mut Criterion) {
    let metrics = Metrics::from_heights(800.0, 50.0);
    let mut group = c.benchmark_group("session_gesture_cycle");
    group.bench_function("advance_retreat_dismiss", |b| {
        b.iter_batched(
            || presented_session(&metrics),
            |mut session| {
                // Fling up twice, drag back down three times; the last end
                // dismisses from the smallest detent.
                black_box(session.drag_ended(-150.0));
                black_box(session.drag_ended(-150.0));
                black_box(session.drag_ended(150.0));
                black_box(session.drag_ended(150.0));
                black_box(session.drag_ended(150.0));
                black_box(session.is_presented());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_drag_changed, bench_full_gesture_cycle);
criterion_main!(benches);
