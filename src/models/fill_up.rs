use super::fuel_type::FuelType;
use crate::utils::date::parse_timestamp;
use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

/// One logged fill-up, exactly as it is stored in the data file.
///
/// The timestamp is kept as the stored text: a record whose date cannot be
/// parsed still loads and is shown as-is, it only loses its place in the
/// chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillUp {
    pub date: String, // ISO-8601 with offset, e.g. 2025-03-01T14:23:11+01:00
    pub kilometrage: u64,
    #[serde(rename = "type")]
    pub kind: FuelType,
    pub litres: f64,
}

impl FillUp {
    pub fn new<Tz: TimeZone>(
        timestamp: DateTime<Tz>,
        kilometrage: u64,
        kind: FuelType,
        litres: f64,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: timestamp.to_rfc3339(),
            kilometrage,
            kind,
            litres,
        }
    }

    /// Parsed timestamp, `None` when the stored text is not a valid date.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.date)
    }
}
