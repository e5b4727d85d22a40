//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Parsing of `Intl.toml`, conversion into initializer input and the default
//! template.
//!
//! `Intl.toml` 的解析、到初始化器输入的转换以及默认模板。

mod common;

use common::{create_detect_config, create_invalid_toml, create_literal_config};
use intl_options::core::detect::{ClientEnvironment, DetectorSpec};
use intl_options::core::formats::{Formats, directives};
use intl_options::core::initializer::Initializer;
use intl_options::core::options::ConfigureOptions;
use intl_options::core::store::LocaleObservable;
use intl_options::infra::config_file::{
    ConfigFile, DEFAULT_CONFIG, InitialLocaleSpec, write_default_config,
};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_parse_literal_config() {
        let temp_dir = tempdir().unwrap();
        let path = create_literal_config(&temp_dir);

        let config = ConfigFile::load(&path).unwrap();

        assert_eq!(config.fallback_locale.as_deref(), Some("en"));
        assert_eq!(
            config.initial_locale,
            Some(InitialLocaleSpec::Literal("fr".to_string()))
        );
        assert_eq!(config.loading_delay_ms, Some(350));
        assert_eq!(config.warn_on_missing_messages, Some(false));
        let date = config.formats.unwrap().date.unwrap();
        assert_eq!(date["short"], directives(&[("month", "2-digit"), ("day", "2-digit")]));
    }

    #[test]
    fn test_parse_detect_config() {
        let temp_dir = tempdir().unwrap();
        let path = create_detect_config(&temp_dir);

        let config = ConfigFile::load(&path).unwrap();

        assert_eq!(
            config.initial_locale,
            Some(InitialLocaleSpec::Detect {
                detect: vec![
                    DetectorSpec::Query("lang".to_string()),
                    DetectorSpec::AcceptLanguage,
                ],
            })
        );
    }

    #[test]
    fn test_empty_config_is_all_none() {
        let config = ConfigFile::from_toml_str("").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = create_invalid_toml(&temp_dir);

        let err = ConfigFile::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid.toml"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(ConfigFile::from_toml_str("fallback = \"en\"").is_err());
    }

    #[test]
    fn test_unknown_detector_is_rejected() {
        let result = ConfigFile::from_toml_str(r#"initial_locale = { detect = ["cookie:lang"] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.toml");

        assert!(ConfigFile::load(&path).is_err());
        assert_eq!(ConfigFile::load_or_default(&path).unwrap(), ConfigFile::default());
    }
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_literal_config_drives_initializer() {
        let temp_dir = tempdir().unwrap();
        let config = ConfigFile::load(&create_literal_config(&temp_dir)).unwrap();
        let store = LocaleObservable::default();
        let mut initializer = Initializer::new(store.clone());

        initializer.init(config.into_configure_options(&ClientEnvironment::default()));

        let options = initializer.options();
        assert_eq!(store.get().as_deref(), Some("fr"));
        assert_eq!(options.loading_delay, Duration::from_millis(350));
        assert!(!options.warn_on_missing_messages);
        assert_eq!(options.formats.date["medium"], Formats::default().date["medium"]);
    }

    #[test]
    fn test_detect_config_reads_client_environment() {
        let temp_dir = tempdir().unwrap();
        let config = ConfigFile::load(&create_detect_config(&temp_dir)).unwrap();
        let env = ClientEnvironment {
            url: Some("https://example.com/?lang=uk".to_string()),
            accept_language: Some("de".to_string()),
        };
        let store = LocaleObservable::default();

        Initializer::new(store.clone()).init(config.into_configure_options(&env));

        assert_eq!(store.get().as_deref(), Some("uk"));
    }

    #[test]
    fn test_detect_config_falls_back_without_client_environment() {
        let temp_dir = tempdir().unwrap();
        let config = ConfigFile::load(&create_detect_config(&temp_dir)).unwrap();
        let store = LocaleObservable::default();

        Initializer::new(store.clone())
            .init(config.into_configure_options(&ClientEnvironment::default()));

        assert_eq!(store.get().as_deref(), Some("en"));
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let temp_dir = tempdir().unwrap();
        let config = ConfigFile::load(&create_literal_config(&temp_dir)).unwrap();
        let opts = config
            .into_configure_options(&ClientEnvironment::default())
            .overlay(ConfigureOptions::new().initial_locale("ko"));
        let store = LocaleObservable::default();

        Initializer::new(store.clone()).init(opts);

        assert_eq!(store.get().as_deref(), Some("ko"));
    }
}

#[cfg(test)]
mod template_tests {
    use super::*;

    #[test]
    fn test_default_template_parses() {
        let config = ConfigFile::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.fallback_locale.as_deref(), Some("en"));
        assert_eq!(config.loading_delay_ms, Some(200));
        assert!(matches!(
            config.initial_locale,
            Some(InitialLocaleSpec::Detect { ref detect }) if detect.len() == 4
        ));
    }

    #[test]
    fn test_write_default_config_creates_parents() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested/dir/Intl.toml");

        assert!(write_default_config(&path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_write_default_config_respects_existing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("Intl.toml");
        fs::write(&path, "fallback_locale = \"de\"\n").unwrap();

        assert!(!write_default_config(&path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "fallback_locale = \"de\"\n");

        assert!(write_default_config(&path, true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
