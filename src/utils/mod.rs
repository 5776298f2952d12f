pub mod chart;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::describe_fuel_type;
pub use formatting::{km2readable, litres2readable};
