//! Cell benchmark: Measure cell comparison and merge performance.
//!
//! Target: < 1ns per merge

use cellstack::{Cell, Rgb};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn cell_equality_same(c: &mut Criterion) {
    let cell_a = Cell::new(Rgb::new(255, 128, 64), Rgb::new(32, 32, 32), 'A');
    let cell_b = cell_a;

    c.bench_function("cell_eq_same", |b| {
        b.iter(|| black_box(&cell_a) == black_box(&cell_b))
    });
}

fn cell_merge(c: &mut Criterion) {
    let opaque = Cell::blank(Rgb::RED);
    let below = Cell::new(Rgb::WHITE, Rgb::BLUE, 'x');

    c.bench_function("cell_merge_opaque", |b| {
        b.iter(|| Cell::merge(black_box(opaque), black_box(below)))
    });

    c.bench_function("cell_merge_transparent", |b| {
        b.iter(|| Cell::merge(black_box(Cell::INVISIBLE), black_box(below)))
    });
}

fn cell_display_width(c: &mut Criterion) {
    let ascii = Cell::new(Rgb::WHITE, Rgb::BLACK, 'A');
    let cjk = Cell::new(Rgb::WHITE, Rgb::BLACK, '日');

    c.bench_function("cell_width_ascii", |b| b.iter(|| black_box(&ascii).display_width()));
    c.bench_function("cell_width_cjk", |b| b.iter(|| black_box(&cjk).display_width()));
}

criterion_group!(benches, cell_equality_same, cell_merge, cell_display_width);
criterion_main!(benches);
