//! apptcal configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::directory::{default_doctors, default_patients, Catalog, Doctor, Patient};
use crate::error::{SchedulerError, SchedulerResult};

static DEFAULT_NOTIFICATION_TTL: &str = "3s";
static DEFAULT_LOG_FILTER: &str = "warn";

fn default_notification_ttl() -> String {
    DEFAULT_NOTIFICATION_TTL.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// First column of the month grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// Configuration at ~/.config/apptcal/config.toml
///
/// Every key is optional. The doctor and patient lists fall back to the
/// built-in catalog when left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    /// How long the latest notification stays visible (humantime, e.g. "3s")
    #[serde(default = "default_notification_ttl")]
    pub notification_ttl: String,

    /// Tracing filter used when APPTCAL_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_doctors")]
    pub doctors: Vec<Doctor>,

    #[serde(default = "default_patients")]
    pub patients: Vec<Patient>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            week_start: WeekStart::default(),
            notification_ttl: default_notification_ttl(),
            log_filter: default_log_filter(),
            doctors: default_doctors(),
            patients: default_patients(),
        }
    }
}

impl SchedulerConfig {
    pub fn config_path() -> SchedulerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SchedulerError::Config("Could not determine config directory".into()))?
            .join("apptcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> SchedulerResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> SchedulerResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: SchedulerConfig = toml::from_str(&content)
            .map_err(|e| SchedulerError::Config(format!("{}: {}", path.display(), e)))?;

        // Surface a bad duration at load time rather than on first use
        config.notification_ttl()?;

        debug!(
            path = %path.display(),
            doctors = config.doctors.len(),
            patients = config.patients.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn notification_ttl(&self) -> SchedulerResult<Duration> {
        humantime::parse_duration(&self.notification_ttl).map_err(|e| {
            SchedulerError::Config(format!("Invalid notification_ttl '{}': {}", self.notification_ttl, e))
        })
    }

    pub fn doctor_directory(&self) -> Catalog<Doctor> {
        Catalog::new(self.doctors.clone())
    }

    pub fn patient_directory(&self) -> Catalog<Patient> {
        Catalog::new(self.patients.clone())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SchedulerResult<()> {
        let contents = format!(
            "\
# apptcal configuration

# First column of the month view (\"sunday\" or \"monday\"):
# week_start = \"sunday\"

# How long notifications stay on screen:
# notification_ttl = \"{}\"

# Log filter when APPTCAL_LOG is not set:
# log_filter = \"{}\"

# Doctors and patients available for booking.
# Leave these out to use the built-in list.
#
# [[doctors]]
# id = \"1\"
# name = \"Dr. Sarah Smith\"
# specialty = \"Cardiologist\"
#
# [[patients]]
# id = \"1\"
# name = \"James Wilson\"
",
            DEFAULT_NOTIFICATION_TTL, DEFAULT_LOG_FILTER
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SchedulerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SchedulerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SchedulerConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.notification_ttl().unwrap(), Duration::from_secs(3));
        assert_eq!(config.doctors.len(), 3);
        assert_eq!(config.patient_directory().name_of("3"), Some("Robert Johnson"));
    }

    #[test]
    fn generated_default_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        SchedulerConfig::create_default_config(&path).unwrap();
        let config = SchedulerConfig::load_from(&path).unwrap();

        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.doctors, default_doctors());
    }

    #[test]
    fn custom_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
week_start = "monday"
notification_ttl = "500ms"

[[doctors]]
id = "d7"
name = "Dr. Ada Park"
specialty = "Dermatologist"
"#,
        )
        .unwrap();

        let config = SchedulerConfig::load_from(&path).unwrap();

        assert_eq!(config.week_start.weekday(), Weekday::Mon);
        assert_eq!(config.notification_ttl().unwrap(), Duration::from_millis(500));
        assert_eq!(config.doctor_directory().name_of("d7"), Some("Dr. Ada Park"));
        assert_eq!(config.doctor_directory().name_of("1"), None);
        assert_eq!(config.patients, default_patients());
    }

    #[test]
    fn bad_duration_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "notification_ttl = \"soon\"\n").unwrap();

        let err = SchedulerConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, SchedulerError::Config(_)), "got {:?}", err);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = [").unwrap();

        assert!(matches!(SchedulerConfig::load_from(&path), Err(SchedulerError::Config(_))));
    }
}
