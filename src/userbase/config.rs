use crate::error::{Result, UserbaseError};
use crate::matcher::{MatchOptions, DEFAULT_CUTOFF, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PRIMARY_FILE: &str = "active_database.json";
const DEFAULT_BACKUP_FILE: &str = "backup_database.json";
const DEFAULT_LOG_FILE: &str = "user_database_log.txt";

/// Configuration for userbase, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserbaseConfig {
    /// Primary store, relative to the data directory unless absolute
    #[serde(default = "default_primary_file")]
    pub primary_file: String,

    /// Mirror of the primary store
    #[serde(default = "default_backup_file")]
    pub backup_file: String,

    /// Event log
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Minimum name similarity (0.0 to 1.0) for a lookup to match
    #[serde(default = "default_match_cutoff")]
    pub match_cutoff: f64,

    /// Maximum number of distinct names a lookup can select
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,
}

fn default_primary_file() -> String {
    DEFAULT_PRIMARY_FILE.to_string()
}

fn default_backup_file() -> String {
    DEFAULT_BACKUP_FILE.to_string()
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_match_cutoff() -> f64 {
    DEFAULT_CUTOFF
}

fn default_max_matches() -> usize {
    DEFAULT_LIMIT
}

impl Default for UserbaseConfig {
    fn default() -> Self {
        Self {
            primary_file: default_primary_file(),
            backup_file: default_backup_file(),
            log_file: default_log_file(),
            match_cutoff: default_match_cutoff(),
            max_matches: default_max_matches(),
        }
    }
}

impl UserbaseConfig {
    pub const KEYS: [&'static str; 5] = [
        "primary-file",
        "backup-file",
        "log-file",
        "match-cutoff",
        "max-matches",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: UserbaseConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the same bounds as [`UserbaseConfig::set`] to a loaded file.
    fn validate(&self) -> Result<()> {
        for key in Self::KEYS {
            if let Some(value) = self.get(key) {
                Self::default().set(key, &value)?;
            }
        }
        Ok(())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            cutoff: self.match_cutoff,
            limit: self.max_matches,
        }
    }

    pub fn primary_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.primary_file)
    }

    pub fn backup_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.backup_file)
    }

    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.log_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "primary-file" => Some(self.primary_file.clone()),
            "backup-file" => Some(self.backup_file.clone()),
            "log-file" => Some(self.log_file.clone()),
            "match-cutoff" => Some(self.match_cutoff.to_string()),
            "max-matches" => Some(self.max_matches.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "primary-file" => self.primary_file = file_name(key, value)?,
            "backup-file" => self.backup_file = file_name(key, value)?,
            "log-file" => self.log_file = file_name(key, value)?,
            "match-cutoff" => {
                let cutoff: f64 = value.parse().map_err(|_| invalid(key, value))?;
                if !(0.0..=1.0).contains(&cutoff) {
                    return Err(invalid(key, value));
                }
                self.match_cutoff = cutoff;
            }
            "max-matches" => {
                let max: usize = value.parse().map_err(|_| invalid(key, value))?;
                if max == 0 {
                    return Err(invalid(key, value));
                }
                self.max_matches = max;
            }
            _ => {
                return Err(UserbaseError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn file_name(key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(invalid(key, value));
    }
    Ok(value.to_string())
}

fn invalid(key: &str, value: &str) -> UserbaseError {
    UserbaseError::Config(format!("Invalid value for {}: '{}'", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = UserbaseConfig::default();
        assert_eq!(config.primary_file, "active_database.json");
        assert_eq!(config.backup_file, "backup_database.json");
        assert_eq!(config.match_options(), MatchOptions::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = UserbaseConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, UserbaseConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"max_matches": 5}"#,
        )
        .unwrap();

        let config = UserbaseConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.max_matches, 5);
        assert_eq!(config.log_file, "user_database_log.txt");
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);

        fs::write(&path, r#"{"max_matches": 0}"#).unwrap();
        let err = UserbaseConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, UserbaseError::Config(_)));
        assert!(err.to_string().contains("max-matches"));

        fs::write(&path, r#"{"match_cutoff": 1.5}"#).unwrap();
        assert!(matches!(
            UserbaseConfig::load(temp_dir.path()),
            Err(UserbaseError::Config(_))
        ));

        fs::write(&path, r#"{"log_file": ""}"#).unwrap();
        assert!(UserbaseConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = UserbaseConfig::default();
        config.set("match-cutoff", "0.75").unwrap();
        config.save(&dir).unwrap();

        let loaded = UserbaseConfig::load(&dir).unwrap();
        assert_eq!(loaded.match_cutoff, 0.75);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = UserbaseConfig::default();
        assert!(config.set("match-cutoff", "1.5").is_err());
        assert!(config.set("match-cutoff", "high").is_err());
        assert!(config.set("max-matches", "0").is_err());
        assert!(config.set("primary-file", "  ").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, UserbaseConfig::default());
    }

    #[test]
    fn test_paths_resolve_against_data_dir() {
        let config = UserbaseConfig::default();
        let dir = Path::new("/data");
        assert_eq!(
            config.primary_path(dir),
            PathBuf::from("/data/active_database.json")
        );
        assert_eq!(
            config.log_path(dir),
            PathBuf::from("/data/user_database_log.txt")
        );
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let config = UserbaseConfig::default();
        let keys: Vec<_> = config.list_all().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, UserbaseConfig::KEYS.to_vec());
    }
}
