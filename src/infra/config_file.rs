//! # Config File Module / 配置文件模块
//!
//! Loads `Intl.toml` into `ConfigureOptions` and writes the default template.
//!
//! 将 `Intl.toml` 加载为 `ConfigureOptions`，并写入默认模板。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::detect::{ClientEnvironment, DetectorSpec, chain};
use crate::core::formats::PartialFormats;
use crate::core::options::{ConfigureOptions, InitialLocale};
use crate::infra::t;

/// The default name for the configuration file.
pub const CONFIG_FILE_NAME: &str = "Intl.toml";

/// Template written by `init`. Every value equals the built-in default so an
/// untouched file changes nothing but the fallback locale.
pub const DEFAULT_CONFIG: &str = r#"# Locale options / 区域选项

# Locale used when nothing else applies / 无法确定区域时使用的区域
fallback_locale = "en"

# Either a literal locale ...
# initial_locale = "fr"
# ... or detectors tried in order / 或按顺序尝试的检测器
# Kinds: system, env:VAR, query:KEY, hash:KEY, accept_language
initial_locale = { detect = ["query:lang", "accept_language", "env:LANG", "system"] }

# Delay before a loading state is shown, in milliseconds / 显示加载状态前的延迟（毫秒）
loading_delay_ms = 200

# Warn when a message id has no translation / 消息缺失时发出警告
warn_on_missing_messages = true

# Format overrides, merged per category / 按类别合并的格式覆盖
# [formats.date.short]
# month = "numeric"
# day = "numeric"
# year = "2-digit"
"#;

/// How the config file chooses the initial locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialLocaleSpec {
    /// `initial_locale = "fr"`
    Literal(String),
    /// `initial_locale = { detect = ["system"] }`
    Detect { detect: Vec<DetectorSpec> },
}

/// The on-disk configuration.
/// 磁盘上的配置。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_locale: Option<InitialLocaleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warn_on_missing_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formats: Option<PartialFormats>,
}

impl ConfigFile {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| t!("config.parse_failed").to_string())
    }

    /// Reads and parses the configuration at `path`.
    ///
    /// 读取并解析 `path` 处的配置。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
        Self::from_toml_str(&content)
            .with_context(|| t!("config.invalid_file", path = path.display()).to_string())
    }

    /// Like `load`, but a missing file yields an empty configuration.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Converts into initializer input. Detector specs are bound to `env`.
    pub fn into_configure_options(self, env: &ClientEnvironment) -> ConfigureOptions {
        let initial_locale = self.initial_locale.map(|spec| match spec {
            InitialLocaleSpec::Literal(locale) => InitialLocale::Literal(locale),
            InitialLocaleSpec::Detect { detect } => InitialLocale::detect(chain(&detect, env)),
        });
        ConfigureOptions {
            fallback_locale: self.fallback_locale,
            initial_locale,
            formats: self.formats,
            loading_delay: self.loading_delay_ms.map(Duration::from_millis),
            warn_on_missing_messages: self.warn_on_missing_messages,
        }
    }
}

/// Writes `DEFAULT_CONFIG` to `path`, creating parent directories.
///
/// Returns `Ok(false)` without touching the file when it already exists and
/// `force` is not set.
pub fn write_default_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", path = parent.display()).to_string()
            })?;
        }
    }

    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| t!("init.write_failed", path = path.display()).to_string())?;
    Ok(true)
}
