//! Fuel consumption per 100 km between consecutive diesel fill-ups.

use crate::models::FillUp;
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionPoint {
    /// Timestamp of the later fill-up of the interval.
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub kilometrage: u64,
    pub distance: u64,
    /// Litres per 100 km.
    pub rate: f64,
}

/// Compute one point per odometer interval.
///
/// Records are ordered by kilometrage (ties keep their stored order); the
/// litres of the later fill-up are spread over the distance since the previous
/// one. Repeated readings (zero distance) are skipped. Fewer than two records
/// give no points.
pub fn compute_consumption(diesel: &[FillUp]) -> Vec<ConsumptionPoint> {
    if diesel.len() < 2 {
        return Vec::new();
    }

    let mut sorted: Vec<&FillUp> = diesel.iter().collect();
    sorted.sort_by_key(|f| f.kilometrage);

    sorted
        .windows(2)
        .filter_map(|pair| {
            let (prev, cur) = (pair[0], pair[1]);
            // sorted, so the later reading is never below the previous one
            let distance = cur.kilometrage - prev.kilometrage;

            if distance == 0 {
                return None;
            }

            Some(ConsumptionPoint {
                timestamp: cur.timestamp(),
                kilometrage: cur.kilometrage,
                distance,
                rate: cur.litres / distance as f64 * 100.0,
            })
        })
        .collect()
}
