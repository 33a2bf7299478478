//! Configuration models and loaders for the Solar Mission Planner.
//!
//! Bodies are declared as table entries (`{name, a, T, φ₀, color, size}`) rather than
//! per-body code paths. A built-in table of the eight planets ships with the crate;
//! YAML and TOML files can replace it.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use thiserror::Error;

const BUILTIN_TABLE: &str = include_str!("../data/solar_system.toml");

/// Days between 1970-01-01 and 2000-01-01.
const DAYS_UNIX_TO_2000: i64 = 10_957;

/// One row of the body reference table.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    /// Circular orbit radius (AU).
    pub semi_major_axis_au: f64,
    /// Orbital period (Julian years).
    pub period_years: f64,
    /// Angle at the epoch (radians).
    #[serde(default)]
    pub phase_offset_rad: f64,
    /// Display colour name, consumed only by presentation layers.
    #[serde(default = "default_color")]
    pub color: String,
    /// Display marker size, consumed only by presentation layers.
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
}

/// How an instant is turned into a fractional year.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeBasis {
    /// Julian years elapsed since the configured epoch.
    #[default]
    SinceEpoch,
    /// Day of the year divided by the year length; the calendar year is ignored.
    DayOfYear,
}

/// Planner settings: reference epoch, home body, and the body table.
#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_epoch")]
    pub epoch: DateTime<Utc>,
    /// Body every transfer departs from.
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default)]
    pub time_basis: TimeBasis,
    pub bodies: Vec<BodyConfig>,
}

impl PlannerConfig {
    /// Settings and body table embedded in the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(toml::from_str(BUILTIN_TABLE)?)
    }

    /// Replace the body table, keeping the other settings.
    pub fn with_bodies(mut self, bodies: Vec<BodyConfig>) -> Self {
        self.bodies = bodies;
        self
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Default reference epoch, 2000-01-01T00:00:00Z.
pub fn default_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(DAYS_UNIX_TO_2000)
}

fn default_origin() -> String {
    "Earth".to_string()
}

fn default_color() -> String {
    "white".to_string()
}

fn default_marker_size() -> u32 {
    5
}

/// Load full planner settings from a YAML or TOML file (chosen by extension).
pub fn load_planner_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig, ConfigError> {
    let path = path.as_ref();
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load a body list from a YAML list, a single TOML record, or a directory of TOML records.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_table_lists_eight_planets_in_order() {
        let config = PlannerConfig::builtin().expect("builtin table parses");
        let names: Vec<_> = config.bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_eq!(config.origin, "Earth");
        assert_eq!(config.time_basis, TimeBasis::SinceEpoch);
        assert_eq!(config.epoch, default_epoch());
        let mars = config.bodies.iter().find(|b| b.name == "Mars").unwrap();
        assert_eq!(mars.semi_major_axis_au, 1.524);
        assert_eq!(mars.period_years, 1.88);
        assert_eq!(mars.phase_offset_rad, 0.5);
        assert_eq!(mars.color, "red");
    }

    #[test]
    fn default_epoch_is_start_of_2000() {
        assert_eq!(default_epoch().to_rfc3339(), "2000-01-01T00:00:00+00:00");
    }

    #[test]
    fn yaml_body_list_applies_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "- name: Ceres\n  semi_major_axis_au: 2.77\n  period_years: 4.6\n- name: Vesta\n  semi_major_axis_au: 2.36\n  period_years: 3.63\n  color: tan"
        )
        .unwrap();
        let bodies = load_bodies(file.path()).expect("yaml list");
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].phase_offset_rad, 0.0);
        assert_eq!(bodies[0].color, "white");
        assert_eq!(bodies[0].marker_size, 5);
        assert_eq!(bodies[1].color, "tan");
    }

    #[test]
    fn toml_directory_is_read_in_file_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b_mars.toml"),
            "name = \"Mars\"\nsemi_major_axis_au = 1.524\nperiod_years = 1.88\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("a_earth.toml"),
            "name = \"Earth\"\nsemi_major_axis_au = 1.0\nperiod_years = 1.0\nphase_offset_rad = 1.0\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let bodies = load_bodies(dir.path()).expect("toml dir");
        let names: Vec<_> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Earth", "Mars"]);
    }

    #[test]
    fn planner_settings_file_reads_time_basis() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(
            file,
            "origin: Mars\ntime_basis: day_of_year\nepoch: 2020-01-01T00:00:00Z\nbodies:\n  - name: Mars\n    semi_major_axis_au: 1.524\n    period_years: 1.88"
        )
        .unwrap();
        let config = load_planner_config(file.path()).expect("settings");
        assert_eq!(config.origin, "Mars");
        assert_eq!(config.time_basis, TimeBasis::DayOfYear);
        assert_eq!(config.epoch.to_rfc3339(), "2020-01-01T00:00:00+00:00");
    }

    #[test]
    fn malformed_toml_is_reported() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = [").unwrap();
        let err = load_bodies(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
