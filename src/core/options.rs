//! # Options Module / 选项模块
//!
//! `Options` holds the effective locale and formatting settings.
//! `ConfigureOptions` is what a caller hands to the initializer: every field
//! is optional, and only the fields that are present overwrite the held
//! options.
//!
//! `Options` 保存生效的区域和格式设置。`ConfigureOptions` 是调用方传给初始化器的内容：
//! 每个字段都是可选的，只有提供的字段会覆盖当前选项。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::core::detect::LocaleDetector;
use crate::core::formats::{FormatTable, Formats, PartialFormats};

/// Delay before a "loading" state becomes visible.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(200);

/// The effective options.
/// 生效的选项。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Locale used when no initial locale is given or detected.
    /// 未提供或未检测到初始区域时使用的区域。
    pub fallback_locale: Option<String>,
    /// The locale resolved by the last `init` call.
    /// 最近一次 `init` 调用解析出的区域。
    pub initial_locale: Option<String>,
    pub formats: Formats,
    /// How long to wait before showing a loading state.
    /// 显示加载状态前的等待时间。
    #[serde(with = "duration_ms", rename = "loading_delay_ms")]
    pub loading_delay: Duration,
    /// Whether lookups of missing messages emit a warning.
    /// 查找缺失消息时是否发出警告。
    pub warn_on_missing_messages: bool,
}

static DEFAULT_OPTIONS: Lazy<Options> = Lazy::new(|| Options {
    fallback_locale: None,
    initial_locale: None,
    formats: Formats::default(),
    loading_delay: DEFAULT_LOADING_DELAY,
    warn_on_missing_messages: true,
});

impl Default for Options {
    /// A deep copy of the built-in defaults. Mutating the result never
    /// affects later calls.
    fn default() -> Self {
        DEFAULT_OPTIONS.clone()
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// How the initial locale is chosen.
/// 初始区域的选择方式。
pub enum InitialLocale {
    /// Use this locale verbatim.
    Literal(String),
    /// Ask a detector; fall back when it finds nothing.
    Detect(Box<dyn LocaleDetector>),
}

impl InitialLocale {
    pub fn detect(detector: impl LocaleDetector + 'static) -> Self {
        Self::Detect(Box::new(detector))
    }
}

impl fmt::Debug for InitialLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(locale) => f.debug_tuple("Literal").field(locale).finish(),
            Self::Detect(_) => f.write_str("Detect(..)"),
        }
    }
}

impl From<String> for InitialLocale {
    fn from(locale: String) -> Self {
        Self::Literal(locale)
    }
}

impl From<&str> for InitialLocale {
    fn from(locale: &str) -> Self {
        Self::Literal(locale.to_string())
    }
}

/// Options supplied to [`Initializer::init`](crate::core::initializer::Initializer::init).
///
/// `None` means "not provided": the held value is kept.
#[derive(Debug, Default)]
pub struct ConfigureOptions {
    pub fallback_locale: Option<String>,
    pub initial_locale: Option<InitialLocale>,
    pub formats: Option<PartialFormats>,
    pub loading_delay: Option<Duration>,
    pub warn_on_missing_messages: Option<bool>,
}

impl ConfigureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    pub fn initial_locale(mut self, initial: impl Into<InitialLocale>) -> Self {
        self.initial_locale = Some(initial.into());
        self
    }

    pub fn detect_with(mut self, detector: impl LocaleDetector + 'static) -> Self {
        self.initial_locale = Some(InitialLocale::detect(detector));
        self
    }

    pub fn formats(mut self, formats: PartialFormats) -> Self {
        self.formats = Some(formats);
        self
    }

    pub fn loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = Some(delay);
        self
    }

    pub fn warn_on_missing_messages(mut self, warn: bool) -> Self {
        self.warn_on_missing_messages = Some(warn);
        self
    }

    /// Layers `overrides` on top of `self`: every field present in
    /// `overrides` wins, format categories are combined entry by entry.
    pub fn overlay(mut self, overrides: ConfigureOptions) -> Self {
        if overrides.fallback_locale.is_some() {
            self.fallback_locale = overrides.fallback_locale;
        }
        if overrides.initial_locale.is_some() {
            self.initial_locale = overrides.initial_locale;
        }
        if overrides.loading_delay.is_some() {
            self.loading_delay = overrides.loading_delay;
        }
        if overrides.warn_on_missing_messages.is_some() {
            self.warn_on_missing_messages = overrides.warn_on_missing_messages;
        }
        self.formats = match (self.formats, overrides.formats) {
            (Some(base), Some(top)) => Some(combine_partial(base, top)),
            (base, top) => top.or(base),
        };
        self
    }
}

fn combine_partial(base: PartialFormats, top: PartialFormats) -> PartialFormats {
    fn pick(base: Option<FormatTable>, top: Option<FormatTable>) -> Option<FormatTable> {
        match (base, top) {
            (Some(mut base), Some(top)) => {
                base.extend(top);
                Some(base)
            }
            (base, top) => top.or(base),
        }
    }
    PartialFormats {
        number: pick(base.number, top.number),
        date: pick(base.date, top.date),
        time: pick(base.time, top.time),
    }
}
