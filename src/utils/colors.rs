/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Greys out a value that could not be interpreted (e.g. an unparseable date).
pub fn colorize_invalid(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}

/// Consumption colour relative to the average rate:
/// above → red, below → green, equal → reset
pub fn color_for_rate(rate: f64, average: f64) -> &'static str {
    if rate > average + 0.05 {
        RED
    } else if rate < average - 0.05 {
        GREEN
    } else {
        RESET
    }
}
