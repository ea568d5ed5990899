//! Benchmarks for roomcrop label filtering and crop geometry.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic OCR output; neither PDFium nor
//! Tesseract is touched.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use roomcrop::{crop_bounds, is_room_label, room_candidates, BBox, Detection};

/// Realistic word soup for a recognized floor plan: mostly noise with a
/// few room labels mixed in.
fn synthetic_detections(count: usize) -> Vec<Detection> {
    let words = [
        "PLANO", "GENERAL", "SALA", "101", "COCINA", "SUP.", "45.2", "M2", "BODEGA", "ACCESO",
        "NIVEL", "2", "ESC", "1:50", "N", "BANO", "PASILLO", "SALA-ESTAR", "12.8m2", "sup",
    ];

    (0..count)
        .map(|i| {
            let word = words[i % words.len()];
            let x = ((i * 137) % 4000) as u32;
            let y = ((i * 211) % 3000) as u32;
            Detection::new(word, BBox::new(x, y, 80, 20))
        })
        .collect()
}

/// Benchmark the label predicate on single strings.
fn bench_label_predicate(c: &mut Criterion) {
    c.bench_function("is_room_label_match", |b| {
        b.iter(|| is_room_label(black_box("SALA 101")));
    });

    c.bench_function("is_room_label_miss", |b| {
        b.iter(|| is_room_label(black_box("PLANO GENERAL NIVEL 2")));
    });
}

/// Benchmark filtering a full page of detections.
fn bench_candidate_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_candidates");

    for count in [100, 1000, 5000].iter() {
        let detections = synthetic_detections(*count);

        group.bench_function(format!("{}_detections", count), |b| {
            b.iter(|| room_candidates(black_box(detections.clone())));
        });
    }

    group.finish();
}

/// Benchmark crop geometry, including the clipping paths.
fn bench_crop_bounds(c: &mut Criterion) {
    let interior = BBox::new(1000, 800, 80, 20);
    let corner = BBox::new(10, 10, 80, 20);

    c.bench_function("crop_bounds_interior", |b| {
        b.iter(|| crop_bounds(black_box(&interior), 200, 4000, 3000));
    });

    c.bench_function("crop_bounds_clipped", |b| {
        b.iter(|| crop_bounds(black_box(&corner), 200, 4000, 3000));
    });
}

criterion_group!(
    benches,
    bench_label_predicate,
    bench_candidate_filter,
    bench_crop_bounds,
);
criterion_main!(benches);
