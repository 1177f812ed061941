// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for preview scene composition.
//!
//! The scene is recomposed on every render, so composition has to stay cheap
//! enough to be a non-factor next to actual painting.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wallforge::preview::{compose, geometry, ContentState, DeviceKind};

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_iphone", |b| {
        b.iter(|| geometry::resolve(black_box(DeviceKind::Iphone)))
    });
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for device in [DeviceKind::Iphone, DeviceKind::Android, DeviceKind::Pixel] {
        group.bench_function(format!("{device}_empty"), |b| {
            b.iter(|| compose(black_box(device), black_box(ContentState::Empty)))
        });
    }

    group.bench_function("iphone_image", |b| {
        b.iter(|| {
            compose(
                black_box(DeviceKind::Iphone),
                black_box(ContentState::Image(
                    "https://images.example/photo.webp".to_string(),
                )),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_compose);
criterion_main!(benches);
