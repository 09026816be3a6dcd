//! Benchmarks for the curvetrace pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use curvetrace::pipeline::{
    align_points, estimate_half_width, extract_candidates, filter_by_distance, trace_curve,
    TraceParams,
};
use curvetrace::{split_curve, PixelGrid};

/// White canvas with a sine-shaped stroke of the given half-thickness.
fn sine_stroke(width: u32, height: u32, half: i32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    let mid = height as f64 / 2.0;
    let amplitude = height as f64 / 4.0;

    for x in 10..width as i32 - 10 {
        let phase = x as f64 / width as f64 * std::f64::consts::TAU;
        let cy = (mid + amplitude * phase.sin()).round() as i32;
        for dy in -half..=half {
            for dx in -half..=half {
                let (px, py) = (x + dx, cy + dy);
                if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                    img.put_pixel(px as u32, py as u32, Rgba([0, 0, 0, 255]));
                }
            }
        }
    }

    img
}

// -- Stage benchmarks --

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    let grid = PixelGrid::from_image(&sine_stroke(256, 128, 3));
    let size = estimate_half_width(&grid).unwrap();
    let candidates = extract_candidates(&grid, size);
    let coarse = filter_by_distance(candidates.clone(), 20.0);
    let fine = filter_by_distance(align_points(&grid, coarse.clone()), 10.0);

    group.bench_function("estimate_half_width", |b| {
        b.iter(|| estimate_half_width(black_box(&grid)).unwrap())
    });

    group.bench_function("extract_candidates", |b| {
        b.iter(|| extract_candidates(black_box(&grid), size))
    });

    group.bench_function("filter_coarse", |b| {
        b.iter(|| filter_by_distance(black_box(candidates.clone()), 20.0))
    });

    group.bench_function("align_points", |b| {
        b.iter(|| align_points(black_box(&grid), coarse.clone()))
    });

    group.bench_function("trace_curve", |b| {
        b.iter(|| trace_curve(black_box(fine.clone()), &TraceParams::default()).unwrap())
    });

    group.finish();
}

// -- End-to-end benchmarks --

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    let small = PixelGrid::from_image(&sine_stroke(128, 64, 2));
    let medium = PixelGrid::from_image(&sine_stroke(512, 256, 4));

    group.bench_function("split_small", |b| {
        b.iter(|| split_curve(black_box(&small)).unwrap())
    });

    group.bench_function("split_medium", |b| {
        b.iter(|| split_curve(black_box(&medium)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_stages, bench_split);
criterion_main!(benches);
