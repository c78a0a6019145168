use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Coordinates of the remote backup object, plus the credential.
/// All optional: a missing `remote` block (or a missing token) only disables
/// the backup, never local persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// "owner/repo" on GitHub.
    pub repository: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Path of the snapshot file inside the repository.
    #[serde(default = "default_remote_path")]
    pub path: String,
    /// Personal access token with contents write permission.
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Ordered, closed set of lecturer names shown on the dashboard.
    #[serde(default = "default_lecturers")]
    pub lecturers: Vec<String>,
    /// Minimum required present/total fraction.
    #[serde(default = "default_target")]
    pub target: f64,
    /// Per-lecturer cap on sessions loggable in one submission.
    #[serde(default = "default_max_per_session")]
    pub max_per_session: u32,
    /// Local mirror of the backup snapshot, used for restore-on-empty.
    #[serde(default = "default_mirror_file")]
    pub mirror_file: String,
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_remote_path() -> String {
    "attendance_log.csv".to_string()
}

fn default_lecturers() -> Vec<String> {
    [
        "Satish Sir (Dean)",
        "Raghu Sir",
        "Tanvi Mam",
        "Akanksha Mam",
        "Dhaval Sir",
        "Ritesh Mam",
        "Anoop Sir",
        "CM Sir",
        "Viren Sir",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_target() -> f64 {
    0.75
}

fn default_max_per_session() -> u32 {
    5
}

fn default_mirror_file() -> String {
    Config::config_dir()
        .join("attendance_log.csv")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            lecturers: default_lecturers(),
            target: default_target(),
            max_per_session: default_max_per_session(),
            mirror_file: default_mirror_file(),
            remote: None,
        }
    }
}

impl Config {
    /// Standard configuration directory for the current user.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rollcall")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    /// Full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rollcall.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Sanity checks for `config --check`.
    pub fn validate(&self) -> AppResult<()> {
        if self.lecturers.is_empty() {
            return Err(AppError::Config("lecturer list is empty".to_string()));
        }
        for (i, name) in self.lecturers.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(AppError::Config(format!("lecturer #{} is blank", i + 1)));
            }
            if self.lecturers[..i].contains(name) {
                return Err(AppError::Config(format!("duplicate lecturer: {}", name)));
            }
        }
        if !(self.target > 0.0 && self.target <= 1.0) {
            return Err(AppError::Config(format!(
                "target must be in (0, 1], got {}",
                self.target
            )));
        }
        if self.max_per_session == 0 {
            return Err(AppError::Config(
                "max_per_session must be at least 1".to_string(),
            ));
        }
        if let Some(remote) = &self.remote {
            if !remote.repository.contains('/') {
                return Err(AppError::Config(format!(
                    "remote.repository must be \"owner/repo\", got {}",
                    remote.repository
                )));
            }
        }
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the resolved database path for the caller to report.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
