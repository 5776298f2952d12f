mod common;
use common::{approx, diesel};
use fuellog::core::consumption::compute_consumption;
use fuellog::models::FillUp;

#[test]
fn test_two_intervals_give_two_points() {
    let records = vec![
        diesel(2025, 1, 1, 1000, 42.0),
        diesel(2025, 1, 8, 1050, 5.0),
        diesel(2025, 1, 15, 1100, 6.0),
    ];

    let points = compute_consumption(&records);

    assert_eq!(points.len(), 2);
    assert!(approx(points[0].rate, 10.0));
    assert!(approx(points[1].rate, 12.0));
    assert_eq!(points[0].timestamp, records[1].timestamp());
    assert_eq!(points[1].timestamp, records[2].timestamp());
    assert_eq!(points[0].distance, 50);
}

#[test]
fn test_sorted_by_odometer_not_storage_order() {
    let records = vec![
        diesel(2025, 1, 15, 1100, 6.0),
        diesel(2025, 1, 1, 1000, 42.0),
        diesel(2025, 1, 8, 1050, 5.0),
    ];

    let points = compute_consumption(&records);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].kilometrage, 1050);
    assert_eq!(points[1].kilometrage, 1100);
}

#[test]
fn test_odometer_order_wins_over_dates() {
    // the later date has the lower reading: emission follows kilometrage
    let records = vec![
        diesel(2025, 2, 1, 2000, 50.0),
        diesel(2025, 1, 1, 2500, 40.0),
        diesel(2025, 3, 1, 1500, 30.0),
    ];

    let points = compute_consumption(&records);
    let kms: Vec<u64> = points.iter().map(|p| p.kilometrage).collect();

    assert_eq!(kms, vec![2000, 2500]);
    assert!(approx(points[0].rate, 10.0));
    assert!(approx(points[1].rate, 8.0));
}

#[test]
fn test_equal_or_decreasing_odometer_yields_nothing() {
    let same = vec![diesel(2025, 1, 1, 1000, 40.0), diesel(2025, 1, 2, 1000, 20.0)];
    assert!(compute_consumption(&same).is_empty());

    // after sorting, a decreasing pair becomes increasing, so only duplicates are skipped
    let dupes = vec![
        diesel(2025, 1, 1, 1000, 40.0),
        diesel(2025, 1, 2, 1000, 20.0),
        diesel(2025, 1, 3, 1000, 10.0),
    ];
    assert!(compute_consumption(&dupes).is_empty());
}

#[test]
fn test_duplicate_reading_skips_only_that_interval() {
    let records = vec![
        diesel(2025, 1, 1, 1000, 40.0),
        diesel(2025, 1, 2, 1000, 20.0),
        diesel(2025, 1, 9, 1400, 28.0),
    ];

    let points = compute_consumption(&records);

    assert_eq!(points.len(), 1);
    assert!(approx(points[0].rate, 7.0));
}

#[test]
fn test_single_record_gives_no_points() {
    assert!(compute_consumption(&[diesel(2025, 1, 1, 1000, 40.0)]).is_empty());
    assert!(compute_consumption(&[]).is_empty());
}

#[test]
fn test_two_increasing_records_give_one_point() {
    let records = vec![diesel(2025, 1, 1, 1000, 40.0), diesel(2025, 1, 9, 1500, 35.0)];

    let points = compute_consumption(&records);

    assert_eq!(points.len(), 1);
    assert!(approx(points[0].rate, 7.0));
}

#[test]
fn test_unparseable_date_keeps_the_point() {
    let mut late = diesel(2025, 1, 9, 1500, 35.0);
    late.date = "not a date".to_string();
    let records: Vec<FillUp> = vec![diesel(2025, 1, 1, 1000, 40.0), late];

    let points = compute_consumption(&records);

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].timestamp, None);
}

#[test]
fn test_readings_above_signed_range() {
    let base = 1u64 << 63;
    let records = vec![
        diesel(2025, 1, 1, 1, 40.0),
        diesel(2025, 1, 8, base + 1, 35.0),
        diesel(2025, 1, 15, base + 501, 30.0),
    ];

    let points = compute_consumption(&records);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].distance, base);
    assert_eq!(points[1].distance, 500);
    assert!(approx(points[1].rate, 6.0));
}

#[test]
fn test_interval_straddling_signed_limit() {
    let records = vec![
        diesel(2025, 1, 1, i64::MAX as u64, 40.0),
        diesel(2025, 1, 8, 1u64 << 63, 2.0),
        diesel(2025, 1, 9, u64::MAX, 1.0),
    ];

    let points = compute_consumption(&records);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].distance, 1);
    assert!(approx(points[0].rate, 200.0));
    assert_eq!(points[1].kilometrage, u64::MAX);
}
