//! Per-lap telemetry summarization.
//!
//! Condenses a lap's channel samples into the scalar aggregates stored in
//! `lap_telemetry_summary.csv`. Aggregation is per-channel tolerant: a
//! channel that is absent from every sample produces a missing aggregate,
//! it never fails the lap.

use crate::provider::{RawLapTelemetry, TelemetrySample};
use crate::routing::{self, RecordFile};
use crate::schema::LapTelemetrySummary;

/// DRS status codes at or above this value mean the flap is open.
const DRS_OPEN_THRESHOLD: u8 = 8;

/// Summarize one lap's telemetry. Returns `None` when there are no samples.
pub fn summarize_lap(lap: &RawLapTelemetry) -> Option<LapTelemetrySummary> {
    if lap.samples.is_empty() {
        return None;
    }
    let samples = &lap.samples;

    let lap_start_seconds = samples.first().and_then(|s| s.time_seconds);

    Some(LapTelemetrySummary {
        driver: lap.driver.clone(),
        team: lap.team.clone(),
        team_name: lap.team_name.clone(),
        lap_number: lap.lap_number,
        total_gear_changes: Some(count_gear_changes(samples)),
        telemetry_lap_start_time_seconds: routing::encode_cell(
            RecordFile::LapTelemetrySummary,
            "TelemetryLapStartTime_seconds",
            lap_start_seconds,
            None,
        ),
        avg_speed: mean(samples.iter().filter_map(|s| s.speed)),
        max_speed: fold_max(samples.iter().filter_map(|s| s.speed)),
        min_speed: fold_min(samples.iter().filter_map(|s| s.speed)),
        avg_rpm: mean(samples.iter().filter_map(|s| s.rpm)),
        max_rpm: fold_max(samples.iter().filter_map(|s| s.rpm)),
        avg_throttle: mean(samples.iter().filter_map(|s| s.throttle)),
        avg_brake: mean(samples.iter().filter_map(|s| s.brake.map(|b| if b { 1.0 } else { 0.0 }))),
        max_distance: max_distance(samples),
        drs_active: samples.iter().any(|s| s.drs.is_some_and(|d| d >= DRS_OPEN_THRESHOLD)),
    })
}

/// Count gear transitions across consecutive samples.
///
/// A pair with a missing gear on either side counts as no change.
fn count_gear_changes(samples: &[TelemetrySample]) -> u32 {
    samples
        .windows(2)
        .filter(|pair| match (pair[0].gear, pair[1].gear) {
            (Some(previous), Some(current)) => previous != current,
            _ => false,
        })
        .count() as u32
}

/// Distance covered over the lap, metres.
///
/// Prefers the provider's own distance channel; otherwise integrates
/// speed over the sample timestamps.
fn max_distance(samples: &[TelemetrySample]) -> Option<f64> {
    let supplied = fold_max(samples.iter().filter_map(|s| s.distance));
    if supplied.is_some() {
        return supplied;
    }
    integrate_distance(samples)
}

fn integrate_distance(samples: &[TelemetrySample]) -> Option<f64> {
    let mut total = 0.0_f64;
    let mut previous_time: Option<f64> = None;
    let mut integrated = false;

    for sample in samples {
        let (Some(time), Some(speed)) = (sample.time_seconds, sample.speed) else {
            continue;
        };
        if let Some(prev) = previous_time {
            let dt = time - prev;
            if dt.is_finite() && dt > 0.0 {
                // Speed channel is km/h, timestamps are seconds.
                total += speed / 3.6 * dt;
                integrated = true;
            }
        }
        previous_time = Some(time);
    }

    integrated.then_some(total)
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0_f64;
    let mut count = 0_usize;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

fn fold_max(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |best, v| Some(best.map_or(v, |b: f64| b.max(v))))
}

fn fold_min(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |best, v| Some(best.map_or(v, |b: f64| b.min(v))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64, speed: f64, gear: i8) -> TelemetrySample {
        TelemetrySample {
            time_seconds: Some(time),
            speed: Some(speed),
            rpm: Some(11_000.0),
            throttle: Some(80.0),
            brake: Some(false),
            gear: Some(gear),
            drs: Some(0),
            distance: None,
        }
    }

    fn lap_with(samples: Vec<TelemetrySample>) -> RawLapTelemetry {
        RawLapTelemetry {
            driver: Some("VER".into()),
            team: Some("Red Bull Racing".into()),
            team_name: Some("Red Bull Racing".into()),
            lap_number: Some(3),
            samples,
        }
    }

    #[test]
    fn empty_lap_produces_no_summary() {
        assert!(summarize_lap(&lap_with(Vec::new())).is_none());
    }

    #[test]
    fn aggregates_speed_and_rpm() {
        let lap = lap_with(vec![sample(0.0, 100.0, 4), sample(1.0, 200.0, 5), sample(2.0, 300.0, 5)]);
        let summary = summarize_lap(&lap).unwrap();
        assert_eq!(summary.avg_speed, Some(200.0));
        assert_eq!(summary.max_speed, Some(300.0));
        assert_eq!(summary.min_speed, Some(100.0));
        assert_eq!(summary.avg_rpm, Some(11_000.0));
    }

    #[test]
    fn gear_changes_ignore_missing_samples() {
        let mut samples = vec![sample(0.0, 100.0, 4), sample(1.0, 110.0, 5), sample(2.0, 120.0, 5)];
        samples[2].gear = None;
        samples.push(sample(3.0, 130.0, 6));
        // 4->5 counts; 5->None and None->6 do not.
        let summary = summarize_lap(&lap_with(samples)).unwrap();
        assert_eq!(summary.total_gear_changes, Some(1));
    }

    #[test]
    fn drs_detection_uses_the_open_threshold() {
        let mut samples = vec![sample(0.0, 100.0, 4), sample(1.0, 110.0, 4)];
        assert!(!summarize_lap(&lap_with(samples.clone())).unwrap().drs_active);
        samples[1].drs = Some(10);
        assert!(summarize_lap(&lap_with(samples)).unwrap().drs_active);
    }

    #[test]
    fn distance_integrates_speed_when_not_supplied() {
        // 180 km/h = 50 m/s, held for two seconds.
        let lap = lap_with(vec![sample(0.0, 180.0, 5), sample(1.0, 180.0, 5), sample(2.0, 180.0, 5)]);
        let summary = summarize_lap(&lap).unwrap();
        assert!((summary.max_distance.unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn supplied_distance_wins_over_integration() {
        let mut samples = vec![sample(0.0, 180.0, 5), sample(1.0, 180.0, 5)];
        samples[1].distance = Some(3_337.0);
        let summary = summarize_lap(&lap_with(samples)).unwrap();
        assert_eq!(summary.max_distance, Some(3_337.0));
    }

    #[test]
    fn brake_fraction_counts_applied_samples() {
        let mut samples = vec![sample(0.0, 100.0, 4); 4];
        samples[0].brake = Some(true);
        let summary = summarize_lap(&lap_with(samples)).unwrap();
        assert_eq!(summary.avg_brake, Some(0.25));
    }

    #[test]
    fn lap_start_cell_carries_raw_seconds() {
        let lap = lap_with(vec![sample(542.81, 100.0, 4), sample(543.0, 110.0, 4)]);
        let summary = summarize_lap(&lap).unwrap();
        assert_eq!(summary.telemetry_lap_start_time_seconds.as_deref(), Some("542.81"));
    }
}
