use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{SessionFlow, SystemClock};
use crate::errors::AppResult;
use crate::store::JsonFileStore;
use crate::ui::TerminalPresenter;

/// Display-only pass: history table, last fill-up and charts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { chart } = cmd {
        let chart_type = match chart {
            Some(c) => *c,
            None => cfg.chart_type()?,
        };

        let mut store = JsonFileStore::new(cfg.data_path());
        let clock = SystemClock::new(cfg.tz()?);
        let mut presenter = TerminalPresenter::new(cfg.chart_height);

        SessionFlow::new(&mut store, &clock, &mut presenter).run_pass(None, chart_type)?;
    }

    Ok(())
}
