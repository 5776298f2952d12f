pub mod backup;
pub mod config;
pub mod consumption;
pub mod history;
pub mod log;
pub mod session;
