//! # intl-options Library / intl-options 库
//!
//! Locale and formatting options for internationalized applications: default
//! number/date/time format presets, a merge of caller overrides into the
//! effective options, and resolution of the initial locale from a literal or
//! a detector, published to an injected locale store.
//!
//! 国际化应用的区域与格式选项：默认的数字/日期/时间格式预设、
//! 将调用方覆盖合并到生效选项，以及从字面值或检测器解析初始区域并发布到注入的区域存储。
//!
//! ## Modules / 模块
//!
//! - `core` - Options model, detection, store and initializer
//! - `infra` - Config file handling, logging setup and i18n support
//! - `reporting` - Console and JSON output of the effective options
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 选项模型、检测、存储与初始化器
//! - `infra` - 配置文件处理、日志设置和国际化支持
//! - `reporting` - 生效选项的控制台与 JSON 输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::detect;
pub use crate::core::formats;
pub use crate::core::options;
pub use crate::core::{ConfigureOptions, Initializer, Options};

use crate::core::detect::SystemLocale;
use crate::core::initializer::resolve_initial_locale;
use crate::core::options::InitialLocale;
use crate::core::store::RustI18nStore;

/// Picks the closest locale this tool ships messages for.
///
/// Tries the full locale first (e.g. "zh-CN"), then its language part
/// (e.g. "en" from "en-US"), then a shipped locale with the same language
/// (e.g. "zh-CN" for "zh"), and finally falls back to "en".
pub fn match_available_locale<'a>(locale: &'a str, available: &[&'a str]) -> &'a str {
    fn language(tag: &str) -> &str {
        tag.split(['-', '_']).next().unwrap_or(tag)
    }

    if available.contains(&locale) {
        return locale;
    }
    let lang = language(locale);
    available
        .iter()
        .copied()
        .find(|a| *a == lang)
        .or_else(|| {
            available
                .iter()
                .copied()
                .find(|a| language(a).eq_ignore_ascii_case(lang))
        })
        .unwrap_or("en")
}

/// Sets the language of this tool's own messages.
///
/// An explicit `lang` wins; otherwise the system locale is detected, with
/// "en" as the fallback. The result is matched against the shipped locales
/// and published to `rust-i18n`.
pub fn init_ui_locale(lang: Option<&str>) -> String {
    let requested = match lang {
        Some(lang) => InitialLocale::from(lang),
        None => InitialLocale::detect(SystemLocale),
    };
    let (detected, _) = resolve_initial_locale(Some(requested), Some("en"));
    let detected = detected.unwrap_or_else(|| "en".to_string());

    let available = rust_i18n::available_locales!();
    let lang = match_available_locale(&detected, &available).to_string();

    let mut initializer = Initializer::new(RustI18nStore);
    initializer.init(
        ConfigureOptions::new()
            .fallback_locale("en")
            .initial_locale(lang.as_str()),
    );
    lang
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
