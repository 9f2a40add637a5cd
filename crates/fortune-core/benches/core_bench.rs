//! Criterion benchmarks for fortune-core.
//!
//! Everything here runs against the plain Rust API; the `python` feature is
//! not needed.
//!
//! ## Benchmark groups
//!
//! 1. **numerology**: Digit reduction and the three core numbers.
//! 2. **pillars**: Year, month, day and hour pillar lookups.
//! 3. **mbti**: Answer classification and profile lookup.
//! 4. **assembler**: Full profile assembly, insights and JSON output.
//! 5. **batch**: `analyze_batch` across request counts.
//!
//! ## Running
//!
//! ```sh
//! cargo bench --manifest-path crates/fortune-core/Cargo.toml
//! # Run only the batch group:
//! cargo bench --manifest-path crates/fortune-core/Cargo.toml -- batch
//! ```

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// The lib target is called `_fortune_core` (matching the Python extension
// module name).
use _fortune_core::mbti::{classify, lookup_mbti_profile};
use _fortune_core::models::{AnalysisRequest, CalendarDate, MbtiSelection, MbtiType};
use _fortune_core::numerology::{
    compute_numerology, digit_sum, essence_number, inquiry_number, talent_number,
};
use _fortune_core::profile::{analyze, analyze_batch, derive_insights, profile_to_json};
use _fortune_core::sexagenary::{
    compute_four_pillars, day_pillar, hour_pillar, month_pillar, year_pillar,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Deterministic spread of `n` requests over the supported date range,
/// alternating between declared types and answer sets.
fn synthetic_requests(n: usize) -> Vec<AnalysisRequest> {
    (0..n)
        .map(|i| {
            let year = 1900 + (i % 201) as i32;
            let month = 1 + (i % 12) as u32;
            let day = 1 + (i % 28) as u32;
            let hour = if i % 3 == 0 { None } else { Some((i % 24) as u32) };
            let selection = if i % 2 == 0 {
                MbtiSelection::Declared(MbtiType::ALL[i % 16])
            } else {
                MbtiSelection::Answers((0..8).map(|bit| ((i >> bit) & 1) as u8).collect())
            };
            AnalysisRequest {
                date: CalendarDate::new(year, month, day, hour).unwrap(),
                gender: if i % 2 == 0 { "female" } else { "male" }.to_string(),
                selection: Some(selection),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmark: Numerology
// ---------------------------------------------------------------------------

fn bench_numerology(c: &mut Criterion) {
    let mut group = c.benchmark_group("numerology");

    group.bench_function("digit_sum", |b| {
        b.iter(|| digit_sum(black_box(19_900_715)));
    });

    group.bench_function("talent_number", |b| {
        b.iter(|| talent_number(black_box(29)));
    });

    group.bench_function("essence_number", |b| {
        b.iter(|| essence_number(black_box(1990), black_box(7), black_box(15)));
    });

    group.bench_function("inquiry_number", |b| {
        b.iter(|| inquiry_number(black_box(11), black_box(29)));
    });

    group.bench_function("compute_numerology", |b| {
        b.iter(|| compute_numerology(black_box(1990), black_box(7), black_box(15)).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: Pillars
// ---------------------------------------------------------------------------

fn bench_pillars(c: &mut Criterion) {
    let mut group = c.benchmark_group("pillars");

    group.bench_function("year_pillar", |b| {
        b.iter(|| year_pillar(black_box(1990)));
    });

    let year_pair = year_pillar(1990);
    group.bench_function("month_pillar", |b| {
        b.iter(|| month_pillar(black_box(&year_pair), black_box(7)).unwrap());
    });

    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    group.bench_function("day_pillar", |b| {
        b.iter(|| day_pillar(black_box(date)));
    });

    let day_pair = day_pillar(date);
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(&day_pair), black_box(23)).unwrap());
    });

    group.bench_function("four_pillars_with_hour", |b| {
        b.iter(|| {
            compute_four_pillars(black_box(1990), black_box(7), black_box(15), black_box(Some(14)))
                .unwrap()
        });
    });

    group.bench_function("four_pillars_without_hour", |b| {
        b.iter(|| {
            compute_four_pillars(black_box(1990), black_box(7), black_box(15), black_box(None))
                .unwrap()
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: MBTI
// ---------------------------------------------------------------------------

fn bench_mbti(c: &mut Criterion) {
    let mut group = c.benchmark_group("mbti");

    let answers = [0u8, 1, 0, 0, 1, 1, 0, 1];
    group.bench_function("classify", |b| {
        b.iter(|| classify(black_box(&answers)).unwrap());
    });

    group.bench_function("lookup_profile", |b| {
        b.iter(|| lookup_mbti_profile(black_box(MbtiType::Enfj)));
    });

    group.bench_function("parse_type_code", |b| {
        b.iter(|| black_box("ISTP").parse::<MbtiType>().unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: Profile assembly
// ---------------------------------------------------------------------------

fn bench_assembler(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembler");

    let request = AnalysisRequest {
        date: CalendarDate::new(1990, 7, 15, Some(14)).unwrap(),
        gender: "female".to_string(),
        selection: Some(MbtiSelection::Answers(vec![0, 0, 1, 1, 0, 0, 0, 1])),
    };

    group.bench_function("analyze", |b| {
        b.iter(|| analyze(black_box(&request)).unwrap());
    });

    let profile = analyze(&request).unwrap();
    group.bench_function("derive_insights", |b| {
        b.iter(|| derive_insights(black_box(&profile)));
    });

    group.bench_function("profile_to_json", |b| {
        b.iter(|| profile_to_json(black_box(&profile)).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: Batch analysis
// ---------------------------------------------------------------------------

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for &count in &[10usize, 100, 1000] {
        let requests = synthetic_requests(count);
        group.bench_with_input(
            BenchmarkId::new("analyze_batch", count),
            &requests,
            |b, requests| {
                b.iter(|| analyze_batch(black_box(requests)).unwrap());
            },
        );
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Register all benchmark groups
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_numerology,
    bench_pillars,
    bench_mbti,
    bench_assembler,
    bench_batch,
);
criterion_main!(benches);
