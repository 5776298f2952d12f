use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::oplog;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty data file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;
    let data_path = cfg.data_path();

    println!("⚙️  Initializing fuellog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("⛽ Data file   : {}", data_path.display());

    // internal log is not blocking
    if let Err(e) = oplog::ttlog(
        &oplog::log_path_for(&data_path),
        "init",
        &data_path.to_string_lossy(),
        "Data file initialized",
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 fuellog initialization completed!");
    Ok(())
}
