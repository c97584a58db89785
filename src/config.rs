use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::SessionIdentity;
use crate::transcript::InputMode;

pub const DEFAULT_CONFIG_PATH: &str = "config/session.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config file {} is not valid: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionIdentity,
    #[serde(default)]
    pub input_mode: InputMode,
    /// sender id -> display name
    #[serde(default)]
    pub contacts: BTreeMap<String, String>,
}

impl AppConfig {
    /// Local user first, then the contact list, then the raw sender id.
    pub fn display_name_for(&self, sender_id: &str) -> String {
        if sender_id == self.session.user_id {
            return self.session.display_name.clone();
        }

        self.contacts
            .get(sender_id)
            .cloned()
            .unwrap_or_else(|| sender_id.to_string())
    }

    /// Thêm hoặc đổi tên một liên hệ. Trả về `false` khi id hoặc tên rỗng.
    pub fn add_contact(&mut self, sender_id: &str, display_name: &str) -> bool {
        let (sender_id, display_name) = (sender_id.trim(), display_name.trim());
        if sender_id.is_empty() || display_name.is_empty() {
            return false;
        }

        self.contacts
            .insert(sender_id.to_string(), display_name.to_string());
        true
    }
}

/// A missing file is not an error: the session starts with defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("Config file {} not found; using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_config(path: impl AsRef<Path>, config: &AppConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(path, json)
    };

    write().map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Ghi liên hệ mới vào file cấu hình trên đĩa.
///
/// Works on the file's own contents, so command-line overrides of the
/// running session are never written back. A file that cannot be parsed is
/// left untouched.
pub fn persist_contact(
    path: impl AsRef<Path>,
    sender_id: &str,
    display_name: &str,
) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    let mut config = load_config(path)?;
    if !config.add_contact(sender_id, display_name) {
        return Ok(false);
    }

    save_config(path, &config)?;
    log::info!(
        "Persisted contact {} to {}",
        sender_id.trim(),
        path.display()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("absent.json")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.user_id, "1234");
        assert_eq!(config.session.display_name, "Cindy");
        assert_eq!(config.input_mode, InputMode::Session);
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "input_mode": "sender_prefixed" }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.input_mode, InputMode::SenderPrefixed);
        assert_eq!(config.session, SessionIdentity::default());
        assert!(config.contacts.is_empty());
    }

    #[test]
    fn add_contact_trims_and_rejects_blanks() {
        let mut config = AppConfig::default();

        assert!(config.add_contact(" bob ", " Bob "));
        assert!(!config.add_contact("", "Nobody"));
        assert!(!config.add_contact("carol", "   "));
        assert_eq!(config.contacts.len(), 1);
        assert_eq!(config.display_name_for("bob"), "Bob");
    }

    #[test]
    fn persist_contact_creates_file_and_keeps_existing_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/session.json");

        assert!(persist_contact(&path, "bob", "Bob").unwrap());
        assert_eq!(load_config(&path).unwrap().contacts["bob"], "Bob");

        let mut on_disk = load_config(&path).unwrap();
        on_disk.input_mode = InputMode::SenderPrefixed;
        on_disk.session = SessionIdentity::new("alice", "Alice");
        save_config(&path, &on_disk).unwrap();

        assert!(persist_contact(&path, "carol", "Carol").unwrap());
        let reloaded = load_config(&path).unwrap();
        assert_eq!(reloaded.session, SessionIdentity::new("alice", "Alice"));
        assert_eq!(reloaded.input_mode, InputMode::SenderPrefixed);
        assert_eq!(reloaded.contacts.len(), 2);
    }

    #[test]
    fn persist_contact_leaves_broken_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(persist_contact(&path, "bob", "Bob").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn persist_contact_skips_blank_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        assert!(!persist_contact(&path, " ", "Bob").unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn display_name_resolution_order() {
        let mut config = AppConfig::default();
        config.contacts.insert("bob".into(), "Bob".into());
        config.contacts.insert("1234".into(), "Not Cindy".into());

        assert_eq!(config.display_name_for("1234"), "Cindy");
        assert_eq!(config.display_name_for("bob"), "Bob");
        assert_eq!(config.display_name_for("carol"), "carol");
    }
}
