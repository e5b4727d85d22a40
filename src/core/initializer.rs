//! # Initializer Module / 初始化器模块
//!
//! Merges caller-supplied options into the held `Options` and publishes the
//! initial locale to the injected store.
//!
//! 将调用方提供的选项合并到当前 `Options` 中，并将初始区域发布到注入的存储。
//!
//! ## Resolution / 解析顺序
//!
//! 1. literal `initial_locale` - used verbatim
//! 2. detector `initial_locale` - its result, or `fallback_locale` if it finds nothing
//! 3. no `initial_locale` (or an empty literal) - `fallback_locale`
//!
//! The fallback is the one in effect after this call's overrides are applied.

use tracing::debug;

use crate::core::options::{ConfigureOptions, InitialLocale, Options};
use crate::core::store::LocaleStore;

/// Where the resolved initial locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Literal,
    Detected,
    Fallback,
}

/// Owns the effective options and the store they publish to.
///
/// 持有生效选项及其发布目标存储。
#[derive(Debug)]
pub struct Initializer<S: LocaleStore> {
    options: Options,
    store: S,
}

impl<S: LocaleStore> Initializer<S> {
    /// Starts from a fresh copy of the default options.
    pub fn new(store: S) -> Self {
        Self::with_options(Options::default(), store)
    }

    /// Starts from the given options.
    pub fn with_options(options: Options, store: S) -> Self {
        Self { options, store }
    }

    /// The effective options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The store the resolved locale is published to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies `opts` and publishes the resolved initial locale.
    ///
    /// Provided fields overwrite the held ones (last call wins); fields left
    /// as `None` keep whatever an earlier call set. Formats merge per
    /// category. Returns the locale written to the store.
    ///
    /// 应用 `opts` 并发布解析出的初始区域。返回写入存储的区域。
    pub fn init(&mut self, opts: ConfigureOptions) -> Option<String> {
        let ConfigureOptions {
            fallback_locale,
            initial_locale,
            formats,
            loading_delay,
            warn_on_missing_messages,
        } = opts;

        if let Some(fallback) = fallback_locale {
            self.options.fallback_locale = Some(fallback);
        }
        if let Some(delay) = loading_delay {
            self.options.loading_delay = delay;
        }
        if let Some(warn) = warn_on_missing_messages {
            self.options.warn_on_missing_messages = warn;
        }

        // Uses the held fallback, so one set by an earlier call still applies
        // when this call does not name one.
        let (locale, source) = resolve_initial_locale(
            initial_locale,
            self.options.fallback_locale.as_deref(),
        );
        debug!(locale = ?locale, source = ?source, "resolved initial locale");
        self.options.initial_locale = locale.clone();

        if let Some(formats) = formats {
            self.options.formats.merge(formats);
        }

        self.store.set(locale.clone());
        locale
    }
}

/// Picks the initial locale without touching any state.
pub fn resolve_initial_locale(
    initial: Option<InitialLocale>,
    fallback: Option<&str>,
) -> (Option<String>, LocaleSource) {
    let fallback = || (fallback.map(str::to_string), LocaleSource::Fallback);
    match initial {
        Some(InitialLocale::Literal(locale)) if !locale.is_empty() => {
            (Some(locale), LocaleSource::Literal)
        }
        Some(InitialLocale::Detect(detector)) => match detector.detect() {
            Some(locale) if !locale.is_empty() => (Some(locale), LocaleSource::Detected),
            _ => fallback(),
        },
        _ => fallback(),
    }
}
