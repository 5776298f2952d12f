//! One pass of the fill-up journal: load, optional submission, display.

use crate::core::consumption::compute_consumption;
use crate::core::history::{self, HistoryRow};
use crate::errors::{AppError, AppResult};
use crate::models::{FillUp, FuelType};
use crate::store::{Journal, RecordStore, oplog};
use crate::utils::date::combine;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;
use std::path::PathBuf;

pub const MSG_SAVED: &str = "Fill-up saved successfully!";
pub const MSG_EMPTY_JOURNAL: &str = "No fill-ups recorded yet.";
pub const MSG_NO_DATA_FOR_TYPE: &str = "No data for this fill-up type.";
pub const MSG_NOT_ENOUGH_DATA: &str = "Not enough data to compute consumption.";

/// Source of the wall-clock time, already in the reference time zone.
pub trait Clock {
    fn now(&self) -> DateTime<Tz>;
}

pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// Clock frozen at a given instant.
pub struct FixedClock(pub DateTime<Tz>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.0
    }
}

pub type SeriesPoint = (Option<DateTime<FixedOffset>>, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Litres of each fill-up of one type.
    Volume(FuelType),
    /// L/100km between consecutive diesel fill-ups.
    Consumption,
}

impl ChartKind {
    pub fn unit(&self) -> &'static str {
        match self {
            ChartKind::Volume(_) => "L",
            ChartKind::Consumption => "L/100km",
        }
    }

    pub fn title(&self) -> String {
        match self {
            ChartKind::Volume(kind) => format!("{} litres per fill-up", kind),
            ChartKind::Consumption => "Consumption L/100km".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub points: Vec<SeriesPoint>,
}

/// Everything a pass shows to the user.
pub trait Presenter {
    fn success(&mut self, msg: &str);
    fn info(&mut self, msg: &str);
    fn warning(&mut self, msg: &str);
    fn last_fill_up(&mut self, at: Option<DateTime<FixedOffset>>);
    fn table(&mut self, rows: &[HistoryRow]);
    fn line_chart(&mut self, chart: &Chart);
}

/// Values collected by the entry form.
#[derive(Debug, Clone, PartialEq)]
pub struct FillUpForm {
    pub date: NaiveDate,
    pub kilometrage: Option<u64>,
    pub kind: FuelType,
    pub litres: Option<f64>,
}

impl FillUpForm {
    pub fn new(date: NaiveDate, kind: FuelType) -> Self {
        Self {
            date,
            kilometrage: None,
            kind,
            litres: None,
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.kilometrage.is_some() && self.litres.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassReport {
    pub submitted: Option<FillUp>,
    pub record_count: usize,
    pub volume_points: usize,
    pub consumption_points: usize,
}

pub struct SessionFlow<'a> {
    store: &'a mut dyn RecordStore,
    clock: &'a dyn Clock,
    presenter: &'a mut dyn Presenter,
    log_file: Option<PathBuf>,
}

impl<'a> SessionFlow<'a> {
    pub fn new(
        store: &'a mut dyn RecordStore,
        clock: &'a dyn Clock,
        presenter: &'a mut dyn Presenter,
    ) -> Self {
        Self {
            store,
            clock,
            presenter,
            log_file: None,
        }
    }

    /// Record submissions in the internal operation log at `path`.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn run_pass(
        &mut self,
        submission: Option<FillUpForm>,
        chart_type: FuelType,
    ) -> AppResult<PassReport> {
        let mut journal = Journal::load(&*self.store)?;
        let mut report = PassReport::default();

        if let Some(form) = submission {
            let record = self.build_record(&form)?;
            journal.append(record.clone());
            journal.persist(&mut *self.store)?;
            self.log_submission(&record);
            self.presenter.success(MSG_SAVED);
            report.submitted = Some(record);
        }

        report.record_count = journal.len();
        self.display(journal.records(), chart_type, &mut report);

        Ok(report)
    }

    fn build_record(&self, form: &FillUpForm) -> AppResult<FillUp> {
        let kilometrage = form.kilometrage.ok_or(AppError::IncompleteForm("kilometrage"))?;
        let litres = form.litres.ok_or(AppError::IncompleteForm("litres"))?;

        let now = self.clock.now();
        let timestamp = combine(form.date, now.time(), now.timezone())
            .ok_or_else(|| AppError::InvalidDate(form.date.to_string()))?;

        Ok(FillUp::new(timestamp, kilometrage, form.kind, litres))
    }

    fn log_submission(&mut self, record: &FillUp) {
        let Some(path) = &self.log_file else {
            return;
        };

        let message = format!(
            "{} km, {} {:.2} L",
            record.kilometrage, record.kind, record.litres
        );

        if let Err(e) = oplog::ttlog(path, "add", &record.date, &message) {
            self.presenter
                .warning(&format!("Failed to write internal log: {}", e));
        }
    }

    fn display(&mut self, records: &[FillUp], chart_type: FuelType, report: &mut PassReport) {
        if records.is_empty() {
            self.presenter.info(MSG_EMPTY_JOURNAL);
            return;
        }

        let rows = history::sorted_history(records);
        self.presenter.last_fill_up(history::last_fill_up(&rows));
        self.presenter.table(&rows);

        let filtered = history::filter_by_type(&rows, chart_type);
        if filtered.is_empty() {
            self.presenter.warning(MSG_NO_DATA_FOR_TYPE);
            return;
        }

        let volume = Chart {
            kind: ChartKind::Volume(chart_type),
            points: history::volume_series(&filtered),
        };
        report.volume_points = volume.points.len();
        self.presenter.line_chart(&volume);

        if !chart_type.is_diesel() || filtered.len() < 2 {
            return;
        }

        let diesel: Vec<FillUp> = filtered.into_iter().map(|r| r.record).collect();
        let points = compute_consumption(&diesel);

        if points.is_empty() {
            self.presenter.info(MSG_NOT_ENOUGH_DATA);
            return;
        }

        let consumption = Chart {
            kind: ChartKind::Consumption,
            points: points.iter().map(|p| (p.timestamp, p.rate)).collect(),
        };
        report.consumption_points = consumption.points.len();
        self.presenter.line_chart(&consumption);
    }
}
