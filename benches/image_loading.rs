// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for decoding, transforming and saving images.

use criterion::{criterion_group, criterion_main, Criterion};
use glimpse::media::{self, Transform};
use image_rs::{Rgba, RgbaImage};
use std::hint::black_box;
use tempfile::tempdir;

const SVG_SAMPLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="512" height="512">
  <rect width="512" height="512" fill="#3a7bd5"/>
  <circle cx="256" cy="256" r="180" fill="#f5f5f5"/>
</svg>"##;

fn sample_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
    })
}

fn image_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_loading");
    let dir = tempdir().expect("temp dir");

    let png_path = dir.path().join("sample.png");
    sample_image(1024, 768).save(&png_path).expect("write png");
    group.bench_function("load_png_1024x768", |b| {
        b.iter(|| black_box(media::load_image(&png_path).expect("load png")));
    });

    let svg_path = dir.path().join("sample.svg");
    std::fs::write(&svg_path, SVG_SAMPLE).expect("write svg");
    group.bench_function("rasterize_svg_512", |b| {
        b.iter(|| black_box(media::load_image(&svg_path).expect("load svg")));
    });

    group.finish();
}

fn transform_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("sample.png");
    sample_image(1024, 768).save(&path).expect("write png");
    let image = media::load_image(&path).expect("load png");

    for transform in Transform::ALL {
        group.bench_function(format!("{transform:?}"), |b| {
            b.iter(|| black_box(transform.apply_to(&image)));
        });
    }

    group.finish();
}

fn save_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("save");
    let dir = tempdir().expect("temp dir");
    let source = image_rs::DynamicImage::ImageRgba8(sample_image(1024, 768));

    for name in ["out.png", "out.jpg"] {
        let target = dir.path().join(name);
        group.bench_function(name, |b| {
            b.iter(|| black_box(media::save_image(&source, &target, 90).expect("save")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    image_loading_benchmark,
    transform_benchmark,
    save_benchmark
);
criterion_main!(benches);
