pub mod fill_up;
pub mod fuel_type;

pub use fill_up::FillUp;
pub use fuel_type::FuelType;
