//! Fusion dashboard display data.
//!
//! The history series is a fixed mock dataset: it represents nothing and is
//! regenerated with fresh day labels on every mount, pending a real history
//! backend.

#[cfg(test)]
#[path = "fusion_test.rs"]
mod fusion_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// One day of mock accuracy scores, all in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryPoint {
    pub day: String,
    pub accuracy: f64,
    pub voice: f64,
    pub face: f64,
    pub text: f64,
}

const ACCURACY: [f64; 10] = [0.82, 0.79, 0.88, 0.91, 0.84, 0.77, 0.86, 0.93, 0.81, 0.89];
const VOICE: [f64; 10] = [0.84, 0.91, 0.76, 0.88, 0.95, 0.81, 0.73, 0.92, 0.87, 0.79];
const FACE: [f64; 10] = [0.71, 0.64, 0.83, 0.77, 0.92, 0.68, 0.88, 0.74, 0.81, 0.95];
const TEXT: [f64; 10] = [0.88, 0.93, 0.82, 0.97, 0.85, 0.91, 0.84, 0.96, 0.89, 0.92];

/// Ten days of mock history ending today, oldest first.
pub fn mock_history(now_ms: i64) -> Vec<HistoryPoint> {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    (0..ACCURACY.len())
        .map(|i| {
            let age_days = (ACCURACY.len() - 1 - i) as i64;
            HistoryPoint {
                day: day_label(now_ms - age_days * DAY_MS),
                accuracy: ACCURACY[i],
                voice: VOICE[i],
                face: FACE[i],
                text: TEXT[i],
            }
        })
        .collect()
}

fn day_label(ms: i64) -> String {
    let fmt = format_description!("[month]-[day]");
    OffsetDateTime::from_unix_timestamp(ms.div_euclid(1000))
        .ok()
        .and_then(|dt| dt.format(fmt).ok())
        .unwrap_or_else(|| "--".to_owned())
}

/// SVG `points` attribute for a polyline over unit-range samples, spread
/// across `width` x `height` with the y axis flipped.
pub fn polyline_points(values: &[f64], width: f64, height: f64) -> String {
    if values.len() < 2 {
        return String::new();
    }
    let step = width / (values.len() - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = i as f64 * step;
            let y = (1.0 - value.clamp(0.0, 1.0)) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
