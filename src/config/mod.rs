use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_weekday;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Subject used when `--subject` is omitted.
    #[serde(default)]
    pub default_subject: String,
    /// Planned minutes given to a day when `plan` is called without a value.
    #[serde(default = "default_planned_minutes")]
    pub default_planned_minutes: i64,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// Word used in split period names ("Toussaint - Week 2").
    #[serde(default = "default_week_label")]
    pub week_label: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_planned_minutes() -> i64 {
    480
}
fn default_week_start() -> String {
    "monday".to_string()
}
fn default_week_label() -> String {
    "Week".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_subject: String::new(),
            default_planned_minutes: default_planned_minutes(),
            week_start: default_week_start(),
            week_label: default_week_label(),
            separator_char: default_separator_char(),
        }
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("animtrack")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".animtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("animtrack.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("animtrack.sqlite")
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn week_start_day(&self) -> AppResult<Weekday> {
        parse_weekday(&self.week_start)
            .ok_or_else(|| AppError::Config(format!("invalid week_start '{}'", self.week_start)))
    }

    /// Resolve the subject for a command: explicit value, else configured default.
    pub fn subject_or_default(&self, subject: Option<&String>) -> AppResult<String> {
        match subject {
            Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            _ if !self.default_subject.trim().is_empty() => Ok(self.default_subject.clone()),
            _ => Err(AppError::Config(
                "no subject given: use --subject or set default_subject".into(),
            )),
        }
    }

    /// Load configuration from a YAML file.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load the configuration file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join("animtrack.sqlite"),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
