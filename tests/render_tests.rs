use fuellog::core::session::ChartKind;
use fuellog::models::FuelType;
use fuellog::utils::chart::render_line_chart;
use fuellog::utils::date::parse_timestamp;
use fuellog::utils::table::{Column, Table, visible_width};
use fuellog::utils::{km2readable, litres2readable};

#[test]
fn test_chart_marks_every_point() {
    let out = render_line_chart(&[40.0, 35.5, 52.0, 47.0], 8, "2025-01-01", "2025-04-01");

    assert_eq!(out.matches('●').count(), 4);
    assert!(out.contains("52.0"));
    assert!(out.contains("35.5"));
    assert!(out.contains("2025-01-01"));
    assert!(out.contains("2025-04-01"));
    // 8 plot rows + axis + labels
    assert_eq!(out.lines().count(), 10);
}

#[test]
fn test_chart_flat_series_and_single_point() {
    let flat = render_line_chart(&[10.0, 10.0, 10.0], 5, "a", "b");
    assert_eq!(flat.matches('●').count(), 3);

    let single = render_line_chart(&[7.5], 5, "2025-02-02", "2025-02-02");
    assert_eq!(single.matches('●').count(), 1);
    assert_eq!(single.matches("2025-02-02").count(), 1);

    assert!(render_line_chart(&[], 5, "", "").is_empty());
}

#[test]
fn test_table_aligns_colored_cells() {
    let mut table = Table::new(vec![Column::left("Type"), Column::right("Litres")]);
    table.add_row(vec!["\x1b[33mDiesel\x1b[0m".into(), "45.20".into()]);
    table.add_row(vec!["AdBlue".into(), "9.50".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(visible_width(lines[2]), visible_width(lines[3]));
    assert!(lines[3].ends_with(" 9.50"));
}

#[test]
fn test_number_formatting() {
    assert_eq!(km2readable(0), "0");
    assert_eq!(km2readable(999), "999");
    assert_eq!(km2readable(1500), "1 500");
    assert_eq!(km2readable(123_456_789), "123 456 789");
    assert_eq!(litres2readable(45.2), "45.20");
}

#[test]
fn test_timestamp_parsing_is_tolerant() {
    assert!(parse_timestamp("2025-03-01T14:23:11.482915+01:00").is_some());
    assert!(parse_timestamp("2025-03-01 14:23:11+01:00").is_some());
    assert!(parse_timestamp("2025-03-01T14:23:11").is_some());
    assert!(parse_timestamp("2025-03-01").is_some());
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("01/03/2025").is_none());
}

#[test]
fn test_chart_kind_labels() {
    assert_eq!(ChartKind::Volume(FuelType::AdBlue).title(), "AdBlue litres per fill-up");
    assert_eq!(ChartKind::Volume(FuelType::Diesel).unit(), "L");
    assert_eq!(ChartKind::Consumption.title(), "Consumption L/100km");
    assert_eq!(ChartKind::Consumption.unit(), "L/100km");
}
