//! fuellog main entrypoint.

use fuellog::run;
use fuellog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
