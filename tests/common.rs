#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::TimeZone;
use chrono_tz::Europe::Paris;
use fuellog::models::{FillUp, FuelType};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The binary, with HOME/APPDATA pointed at `home` so the user's config is never touched.
pub fn fl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("fuellog");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// A fresh temp dir and the data file path inside it
pub fn setup_test_data(name: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path: PathBuf = dir.path().join(format!("{}_carburant.json", name));
    (dir, path.to_string_lossy().to_string())
}

/// Init the data file in test mode (no config file written)
pub fn init_data(home: &Path, data: &str) {
    fl(home)
        .args(["--data", data, "--test", "init"])
        .assert()
        .success();
}

/// Record built at 12:00 Paris time on the given day
pub fn fill_up(y: i32, m: u32, d: u32, km: u64, kind: FuelType, litres: f64) -> FillUp {
    let ts = Paris
        .with_ymd_and_hms(y, m, d, 12, 0, 0)
        .single()
        .expect("valid Paris time");
    FillUp::new(ts, km, kind, litres)
}

pub fn diesel(y: i32, m: u32, d: u32, km: u64, litres: f64) -> FillUp {
    fill_up(y, m, d, km, FuelType::Diesel, litres)
}

pub fn adblue(y: i32, m: u32, d: u32, km: u64, litres: f64) -> FillUp {
    fill_up(y, m, d, km, FuelType::AdBlue, litres)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
