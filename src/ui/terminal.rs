//! Terminal front-end for a session pass: history table and text charts.

use crate::core::history::HistoryRow;
use crate::core::session::{Chart, ChartKind, Presenter};
use crate::ui::messages::{self, header};
use crate::utils::chart::render_line_chart;
use crate::utils::colors::{RESET, color_for_rate, colorize_invalid};
use crate::utils::date::{format_short, format_timestamp};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::{describe_fuel_type, km2readable, litres2readable};
use chrono::{DateTime, FixedOffset};

pub struct TerminalPresenter {
    chart_height: usize,
    history_shown: bool,
}

impl TerminalPresenter {
    pub fn new(chart_height: usize) -> Self {
        Self {
            chart_height,
            history_shown: false,
        }
    }

    fn history_header(&mut self) {
        if !self.history_shown {
            header("📜", "Fill-up history");
            self.history_shown = true;
        }
    }
}

fn axis_label(ts: &Option<DateTime<FixedOffset>>) -> String {
    ts.as_ref().map(format_short).unwrap_or_else(|| "?".into())
}

impl Presenter for TerminalPresenter {
    fn success(&mut self, msg: &str) {
        messages::success(msg);
    }

    fn info(&mut self, msg: &str) {
        messages::info(msg);
    }

    fn warning(&mut self, msg: &str) {
        messages::warning(msg);
    }

    fn last_fill_up(&mut self, at: Option<DateTime<FixedOffset>>) {
        self.history_header();
        let when = at
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_else(|| colorize_invalid("unknown"));
        println!("{} {}\n", bold("📅 Last recorded fill-up:"), when);
    }

    fn table(&mut self, rows: &[HistoryRow]) {
        self.history_header();

        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Date"),
            Column::right("Km"),
            Column::left("Type"),
            Column::right("Litres"),
        ]);

        for (i, row) in rows.iter().enumerate() {
            let date = match &row.timestamp {
                Some(ts) => format_timestamp(ts),
                None => colorize_invalid(&row.record.date),
            };
            let (label, color) = describe_fuel_type(row.record.kind.as_str());

            table.add_row(vec![
                (i + 1).to_string(),
                date,
                km2readable(row.record.kilometrage),
                format!("{color}{label}{RESET}"),
                litres2readable(row.record.litres),
            ]);
        }

        print!("{}", table.render());
    }

    fn line_chart(&mut self, chart: &Chart) {
        header("📊", chart.kind.title());

        let values: Vec<f64> = chart.points.iter().map(|(_, v)| *v).collect();
        let first = chart.points.first().map(|(t, _)| axis_label(t)).unwrap_or_default();
        let last = chart.points.last().map(|(t, _)| axis_label(t)).unwrap_or_default();

        print!(
            "{}",
            render_line_chart(&values, self.chart_height, &first, &last)
        );

        if chart.kind != ChartKind::Consumption {
            return;
        }

        let unit = chart.kind.unit();

        // list every interval, coloured against the average rate
        let average = values.iter().sum::<f64>() / values.len() as f64;
        println!();
        for (ts, rate) in &chart.points {
            println!(
                "  {}  {}{:>7.2}{} {}",
                axis_label(ts),
                color_for_rate(*rate, average),
                rate,
                RESET,
                unit
            );
        }
        println!("  {} {:.2} {}", bold("Average:"), average, unit);
    }
}
