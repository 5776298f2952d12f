use crate::models::FuelType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fuellog
/// CLI journal of vehicle fill-ups with consumption charts
#[derive(Parser)]
#[command(
    name = "fuellog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple fill-up journal CLI: log Diesel and AdBlue fill-ups and chart consumption per 100 km",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a second journal)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data file and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal operation log")]
        print: bool,
    },

    /// Record a fill-up, then show the history
    Add {
        /// Odometer reading (km)
        #[arg(long = "km", help = "Odometer reading in km")]
        km: Option<u64>,

        /// Litres added
        #[arg(long = "litres", value_parser = parse_litres, help = "Litres added (>= 0)")]
        litres: Option<f64>,

        /// Date of the fill-up (YYYY-MM-DD), defaults to today
        #[arg(long = "date", help = "Fill-up date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "type", value_enum, default_value = "diesel", help = "Fill-up type")]
        kind: FuelType,

        #[arg(long = "chart", value_enum, help = "Fill-up type to chart afterwards")]
        chart: Option<FuelType>,
    },

    /// Show the history table and charts
    List {
        #[arg(long = "chart", value_enum, help = "Fill-up type to chart")]
        chart: Option<FuelType>,
    },

    /// Create a backup copy of the data file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the backup in a zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup")]
        force: bool,
    },
}

fn parse_litres(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;

    if !v.is_finite() || v < 0.0 {
        return Err(format!("litres must be a non-negative number, got '{s}'"));
    }

    Ok(v)
}
