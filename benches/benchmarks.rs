//! Performance benchmarks for contrast computation.
//!
//! Measures the hot paths:
//! - Relative luminance
//! - Contrast ratio (opaque and translucent foregrounds)
//! - First-conforming candidate search

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wcag_colors::conformance::{ConformanceLevel, ElementType};
use wcag_colors::engine::{CandidateRole, ContrastEngine};
use wcag_colors::rgba::RgbaColor;

/// 256 colors spread across the RGB cube.
fn sample_colors(alpha: f64) -> Vec<RgbaColor> {
    (0u8..=255)
        .map(|i: u8| {
            let r = i;
            let g = i.wrapping_mul(97);
            let b = i.wrapping_mul(193);
            RgbaColor::new(r as f64, g as f64, b as f64, alpha)
        })
        .collect()
}

fn bench_relative_luminance(c: &mut Criterion) {
    let colors = sample_colors(1.0);

    c.bench_function("relative_luminance_256", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(color.relative_luminance());
            }
        })
    });
}

fn bench_contrast_ratio(c: &mut Criterion) {
    let background = RgbaColor::opaque(26.0, 26.0, 46.0);
    let opaque = sample_colors(1.0);
    let translucent = sample_colors(0.6);

    c.bench_function("contrast_ratio_opaque_256", |b| {
        b.iter(|| {
            for fg in &opaque {
                black_box(RgbaColor::contrast_ratio(fg, black_box(&background)));
            }
        })
    });

    c.bench_function("contrast_ratio_translucent_256", |b| {
        b.iter(|| {
            for fg in &translucent {
                black_box(RgbaColor::contrast_ratio(fg, black_box(&background)));
            }
        })
    });
}

/// Worst case: no candidate conforms, so the whole list is scanned.
fn bench_select_first_conforming(c: &mut Criterion) {
    let engine = ContrastEngine::default();
    let background = RgbaColor::opaque(128.0, 128.0, 128.0);
    let candidates: Vec<RgbaColor> = (100u8..=160)
        .map(|v| RgbaColor::opaque(v as f64, v as f64, v as f64))
        .collect();

    c.bench_function("select_first_conforming_miss", |b| {
        b.iter(|| {
            black_box(engine.select_first_conforming(
                black_box(&candidates),
                &background,
                CandidateRole::Foreground,
                ElementType::SmallFont,
                ConformanceLevel::AAA,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_relative_luminance,
    bench_contrast_ratio,
    bench_select_first_conforming
);
criterion_main!(benches);
