use crate::errors::AppResult;
use crate::store::oplog::{self, LogEntry};
use crate::ui::messages::info;
use crate::utils::table::visible_width;
use ansi_term::Colour;
use std::path::Path;

const MAX_TARGET_WIDTH: usize = 60;

/// ANSI colour for each kind of operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to `MAX_TARGET_WIDTH` visible characters.
fn op_target(entry: &LogEntry) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let cut = if plain.chars().count() > MAX_TARGET_WIDTH {
        let mut s: String = plain.chars().take(MAX_TARGET_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    // only the operation word is coloured
    let color = color_for_operation(&entry.operation);
    match cut.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(cut.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(data_file: &Path) -> AppResult<()> {
        let entries = oplog::read_entries(&oplog::log_path_for(data_file))?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, &LogEntry)> = entries.iter().map(|e| (op_target(e), e)).collect();

        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(o, _)| visible_width(o))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (colored, entry) in rows {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&colored)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
