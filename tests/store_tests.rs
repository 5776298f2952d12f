mod common;
use common::{adblue, diesel};
use fuellog::errors::AppError;
use fuellog::models::FuelType;
use fuellog::store::{Journal, JsonFileStore, RecordStore, oplog};
use std::fs;

#[test]
fn test_load_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nothing_here.json"));

    let records = store.load().expect("missing file is not an error");
    assert!(records.is_empty());
}

#[test]
fn test_load_blank_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.json");
    fs::write(&path, "  \n").unwrap();

    let records = JsonFileStore::new(&path).load().unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_load_malformed_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"date\": \"2025-01-01T10:00:00+01:00\", \"kilometrage\": ").unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(err, AppError::Json { .. }));
}

#[test]
fn test_load_unknown_type_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unknown.json");
    fs::write(
        &path,
        r#"[{"date": "2025-01-01T10:00:00+01:00", "kilometrage": 10, "type": "Petrol", "litres": 3.0}]"#,
    )
    .unwrap();

    assert!(JsonFileStore::new(&path).load().is_err());
}

#[test]
fn test_persist_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("nested/dir/carburant.json"));

    let records = vec![
        diesel(2025, 1, 5, 120_000, 55.3),
        adblue(2025, 1, 20, 120_450, 10.0),
        diesel(2025, 2, 2, 121_010, 61.87),
    ];

    store.persist(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
    assert!(!dir.path().join("nested/dir/carburant.tmp").exists());
}

#[test]
fn test_failed_swap_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    // the target is a non-empty directory, so the final rename fails
    let target = dir.path().join("carburant.json");
    fs::create_dir_all(target.join("occupied")).unwrap();

    let mut store = JsonFileStore::new(&target);
    assert!(store.persist(&[diesel(2025, 1, 5, 1000, 40.0)]).is_err());

    assert!(!dir.path().join("carburant.tmp").exists());
    assert!(target.is_dir());
}

#[test]
fn test_append_persist_load_grows_by_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("carburant.json"));
    store
        .persist(&[diesel(2025, 3, 1, 1000, 40.0), diesel(2025, 3, 8, 1400, 30.0)])
        .unwrap();

    let mut journal = Journal::load(&store).unwrap();
    let before = journal.len();

    let new_record = adblue(2025, 3, 9, 1420, 5.5);
    journal.append(new_record.clone());
    journal.persist(&mut store).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), before + 1);
    assert_eq!(loaded.last(), Some(&new_record));
}

#[test]
fn test_reads_existing_journal_format() {
    // compact file with integer litres, as written by earlier versions of the journal
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carburant.json");
    fs::write(
        &path,
        r#"[{"date": "2024-06-01T08:15:42.123456+02:00", "kilometrage": 53210, "type": "Diesel", "litres": 60}, {"date": "2024-06-02T09:00:00+02:00", "kilometrage": 53400, "type": "AdBlue", "litres": 9.5}]"#,
    )
    .unwrap();

    let loaded = JsonFileStore::new(&path).load().unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].kind, FuelType::Diesel);
    assert_eq!(loaded[0].litres, 60.0);
    assert_eq!(loaded[1].kind, FuelType::AdBlue);
    assert!(loaded[0].timestamp().is_some());
}

#[test]
fn test_persisted_layout_uses_journal_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carburant.json");
    let mut store = JsonFileStore::new(&path);
    store.persist(&[adblue(2025, 4, 1, 2000, 4.0)]).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let obj = &raw[0];

    assert_eq!(obj["type"], "AdBlue");
    assert_eq!(obj["kilometrage"], 2000);
    assert_eq!(obj["litres"], 4.0);
    assert_eq!(obj["date"], "2025-04-01T12:00:00+02:00");
}

#[test]
fn test_oplog_appends_numbered_entries() {
    let dir = tempfile::tempdir().unwrap();
    let log = oplog::log_path_for(&dir.path().join("carburant.json"));
    assert!(log.ends_with("carburant.log"));

    oplog::ttlog(&log, "init", "carburant.json", "Data file initialized").unwrap();
    oplog::ttlog(&log, "add", "2025-01-01T10:00:00+01:00", "1000 km").unwrap();

    let entries = oplog::read_entries(&log).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 1);
    assert_eq!(entries[1].id, 2);
    assert_eq!(entries[1].operation, "add");
}
