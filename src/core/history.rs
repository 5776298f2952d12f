//! Display-side view of the stored records.

use crate::models::{FillUp, FuelType};
use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;

/// A record paired with its parsed timestamp (`None` when unparseable).
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub record: FillUp,
}

impl HistoryRow {
    pub fn from_record(record: &FillUp) -> Self {
        Self {
            timestamp: record.timestamp(),
            record: record.clone(),
        }
    }
}

/// Rows in chronological order. Rows without a valid timestamp go last and
/// keep their stored order.
pub fn sorted_history(records: &[FillUp]) -> Vec<HistoryRow> {
    let mut rows: Vec<HistoryRow> = records.iter().map(HistoryRow::from_record).collect();

    rows.sort_by(|a, b| match (&a.timestamp, &b.timestamp) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    rows
}

/// Most recent valid timestamp.
pub fn last_fill_up(rows: &[HistoryRow]) -> Option<DateTime<FixedOffset>> {
    rows.iter().filter_map(|r| r.timestamp).max()
}

pub fn filter_by_type(rows: &[HistoryRow], kind: FuelType) -> Vec<HistoryRow> {
    rows.iter()
        .filter(|r| r.record.kind == kind)
        .cloned()
        .collect()
}

/// (timestamp, litres) series of the given rows, in row order.
pub fn volume_series(rows: &[HistoryRow]) -> Vec<(Option<DateTime<FixedOffset>>, f64)> {
    rows.iter().map(|r| (r.timestamp, r.record.litres)).collect()
}
