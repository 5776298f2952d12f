use crate::errors::{AppError, AppResult};
use crate::models::FuelType;
use crate::utils::path::resolve_in;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "carburant.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_file: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_chart")]
    pub default_chart: String,
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

fn default_timezone() -> String {
    "Europe/Paris".to_string()
}
fn default_chart() -> String {
    "Diesel".to_string()
}
fn default_chart_height() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_default().to_string_lossy().to_string(),
            timezone: default_timezone(),
            default_chart: default_chart(),
            chart_height: default_chart_height(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fuellog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fuellog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fuellog.conf")
    }

    /// Return the default path of the fill-up data file
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join(DEFAULT_DATA_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Data file with `~` expanded; relative names live in the config directory.
    pub fn data_path(&self) -> PathBuf {
        resolve_in(&Self::config_dir(), &self.data_file)
    }

    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| AppError::InvalidTimezone(format!("{}: {}", self.timezone, e)))
    }

    pub fn chart_type(&self) -> AppResult<FuelType> {
        FuelType::from_label(&self.default_chart)
            .ok_or_else(|| AppError::InvalidFuelType(self.default_chart.clone()))
    }

    /// Initialize configuration and data files
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_path = match custom_data {
            Some(name) => resolve_in(&dir, &name),
            None => Self::data_file_default(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create empty data file if not exists
        if !data_path.exists() {
            if let Some(parent) = data_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&data_path, "[]")?;
        }

        Ok(config)
    }
}
