use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{FillUpForm, SessionFlow, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::store::{JsonFileStore, oplog};
use crate::ui::TerminalPresenter;
use crate::utils::date;

/// Record a fill-up, then redisplay the journal.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        km,
        litres,
        date: date_str,
        kind,
        chart,
    } = cmd
    {
        let tz = cfg.tz()?;

        //
        // 1. Date (default = today in the reference zone)
        //
        let d = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(tz),
        };

        //
        // 2. Form
        //
        let form = FillUpForm {
            date: d,
            kilometrage: *km,
            kind: *kind,
            litres: *litres,
        };

        let chart_type = match chart {
            Some(c) => *c,
            None => cfg.chart_type()?,
        };

        //
        // 3. Submission pass
        //
        let data_path = cfg.data_path();
        let mut store = JsonFileStore::new(&data_path);
        let clock = SystemClock::new(tz);
        let mut presenter = TerminalPresenter::new(cfg.chart_height);

        SessionFlow::new(&mut store, &clock, &mut presenter)
            .with_log_file(oplog::log_path_for(&data_path))
            .run_pass(Some(form), chart_type)?;
    }

    Ok(())
}
