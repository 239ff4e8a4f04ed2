//! Benchmarks for the time codec hot path.
//!
//! Every cell of every routed column passes through encode or decode once
//! per pipeline direction, so a full season extraction runs these functions
//! millions of times. The benches track per-value throughput for:
//! - Duration encoding across the three fixed-width shapes
//! - Structural decode, including the shape priority cascade
//! - Wall-clock projection through a session clock
//!
//! Platform: cross-platform, no fixtures required.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use paddock::SessionClock;
use paddock::codec::{decode_duration, encode_seconds};
use paddock::types::TimeEncoding;

/// A spread of realistic durations: sectors, laps, pit windows, race totals.
fn sample_durations() -> Vec<f64> {
    (0..1_000)
        .map(|i| {
            let base = (i as f64) * 7.919;
            if i % 11 == 0 { -base } else { base }
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let durations = sample_durations();

    let mut group = c.benchmark_group("encode_durations");
    group.throughput(Throughput::Elements(durations.len() as u64));

    for encoding in [TimeEncoding::MmSsMs, TimeEncoding::HhMmSs, TimeEncoding::HhMmSsMs] {
        group.bench_function(encoding.as_str(), |b| {
            b.iter(|| {
                for &seconds in &durations {
                    black_box(encode_seconds(black_box(seconds), encoding));
                }
            })
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let durations = sample_durations();
    let encoded: Vec<String> = durations
        .iter()
        .enumerate()
        .map(|(i, &seconds)| {
            let encoding = match i % 3 {
                0 => TimeEncoding::MmSsMs,
                1 => TimeEncoding::HhMmSs,
                _ => TimeEncoding::HhMmSsMs,
            };
            encode_seconds(seconds, encoding).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("decode_durations");
    group.throughput(Throughput::Elements(encoded.len() as u64));

    group.bench_function("mixed_shapes", |b| {
        b.iter(|| {
            for value in &encoded {
                black_box(decode_duration(black_box(value)));
            }
        })
    });

    group.bench_function("missing_and_garbage", |b| {
        b.iter(|| {
            for value in ["", "nan", "NaT", "not-a-time", "01:02"] {
                black_box(decode_duration(black_box(value)));
            }
        })
    });

    group.finish();
}

fn bench_wall_clock(c: &mut Criterion) {
    let clock = SessionClock::from_local_iso(Some("2024-05-26T14:00:00+02:00"))
        .expect("valid clock fixture");
    let offsets = sample_durations();

    let mut group = c.benchmark_group("wall_clock_projection");
    group.throughput(Throughput::Elements(offsets.len() as u64));

    group.bench_function("hhmmssms", |b| {
        b.iter(|| {
            for &offset in &offsets {
                black_box(clock.wall_clock_hhmmssms(black_box(offset)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_wall_clock);
criterion_main!(benches);
