use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of fill-up. `AdBlue` is the exhaust additive fluid, tracked next to
/// diesel but never part of the consumption figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum FuelType {
    #[value(name = "diesel", alias = "d")]
    Diesel,
    #[value(name = "adblue", alias = "a", alias = "ad-blue")]
    AdBlue,
}

impl FuelType {
    /// Label stored in the data file and shown in tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::AdBlue => "AdBlue",
        }
    }

    /// Parse a label coming from the config file (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "diesel" | "d" => Some(FuelType::Diesel),
            "adblue" | "ad-blue" | "a" => Some(FuelType::AdBlue),
            _ => None,
        }
    }

    pub fn is_diesel(&self) -> bool {
        matches!(self, FuelType::Diesel)
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
