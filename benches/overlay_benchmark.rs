//! Overlay benchmark: Measure compositing throughput.
//!
//! Target: < 200µs for a 200×50 frame

use cellstack::{compose, overlay, Buffer, Cell, Layer, Rgb};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Create a buffer with patterned content, every third cell transparent.
fn create_test_buffer(width: u16, height: u16, seed: u16) -> Buffer {
    let mut buffer = Buffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if (x + y + seed) % 3 == 0 {
                continue;
            }
            let c = char::from(b'A' + ((x + y + seed) % 26) as u8);
            let cell = Cell::new(
                Rgb::new((x % 256) as u8, (y % 256) as u8, (seed % 256) as u8),
                Rgb::new(20, 20, 30),
                c,
            );
            let _ = buffer.write(x, y, cell);
        }
    }
    buffer
}

fn overlay_full_frame(c: &mut Criterion) {
    let src = create_test_buffer(200, 50, 1);

    c.bench_function("overlay_200x50_full", |b| {
        b.iter_batched_ref(
            || Buffer::new(200, 50),
            |frame| overlay(frame, black_box(&src)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn overlay_partial(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_partial");
    for size in [10u16, 40, 80] {
        let mut src = create_test_buffer(size, size / 2, 7);
        src.move_to(150, 30);
        group.bench_with_input(BenchmarkId::from_parameter(size), &src, |b, src| {
            b.iter_batched_ref(
                || Buffer::new(200, 50),
                |frame| overlay(frame, black_box(src)),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn compose_scene(c: &mut Criterion) {
    let mut background = Buffer::new(200, 50);
    background.fill_color(Rgb::new(10, 10, 40));
    let mut scene = Layer::new(background);
    for i in 0..20u16 {
        let mut panel = create_test_buffer(30, 8, i);
        panel.move_to(i32::from(i * 9), i32::from(i * 2));
        scene.push(Layer::new(panel));
    }
    let scene = [scene];

    c.bench_function("compose_21_layers", |b| {
        b.iter_batched_ref(
            || Buffer::new(200, 50),
            |frame| compose(frame, black_box(&scene)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, overlay_full_frame, overlay_partial, compose_scene);
criterion_main!(benches);
