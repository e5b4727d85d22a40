// Shared test helpers for integration tests
#![allow(dead_code)]

use intl_options::core::store::LocaleStore;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A store that remembers every value it was given, including `None`.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub writes: RefCell<Vec<Option<String>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Option<String>> {
        self.writes.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl LocaleStore for RecordingStore {
    fn set(&self, locale: Option<String>) {
        self.writes.borrow_mut().push(locale);
    }
}

/// Writes `content` as `name` inside `temp_dir` and returns the path.
pub fn write_config(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Helper function to create a configuration with a literal initial locale
pub fn create_literal_config(temp_dir: &TempDir) -> PathBuf {
    write_config(
        temp_dir,
        "literal.toml",
        r#"
fallback_locale = "en"
initial_locale = "fr"
loading_delay_ms = 350
warn_on_missing_messages = false

[formats.date.short]
month = "2-digit"
day = "2-digit"
"#,
    )
}

/// Helper function to create a configuration that detects the locale
pub fn create_detect_config(temp_dir: &TempDir) -> PathBuf {
    write_config(
        temp_dir,
        "detect.toml",
        r#"
fallback_locale = "en"
initial_locale = { detect = ["query:lang", "accept_language"] }
"#,
    )
}

/// Helper function to create an invalid TOML configuration
pub fn create_invalid_toml(temp_dir: &TempDir) -> PathBuf {
    write_config(
        temp_dir,
        "invalid.toml",
        r#"
fallback_locale = "en"
# Invalid TOML - missing closing bracket
[formats.date
"#,
    )
}
