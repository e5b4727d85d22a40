//! # Locale Detection Module / 区域检测模块
//!
//! Detectors inspect the runtime environment and return a candidate locale,
//! or nothing. The initializer calls a detector when `initial_locale` is not
//! a literal string.
//!
//! 检测器检查运行时环境并返回候选区域设置（或不返回）。
//! 当 `initial_locale` 不是字面字符串时，初始化器会调用检测器。
//!
//! An empty string is never a detection result: every built-in detector maps
//! it to `None`.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::IntlError;

/// Something that can propose a locale for the current environment.
pub trait LocaleDetector {
    /// Returns the detected locale, or `None` when nothing applies.
    fn detect(&self) -> Option<String>;
}

impl<F> LocaleDetector for F
where
    F: Fn() -> Option<String>,
{
    fn detect(&self) -> Option<String> {
        self()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The operating system's locale, as reported by `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleDetector for SystemLocale {
    fn detect(&self) -> Option<String> {
        non_empty(sys_locale::get_locale())
    }
}

/// A locale read from an environment variable such as `LANG` or `LC_ALL`.
///
/// POSIX values are normalized: `fr_FR.UTF-8@euro` becomes `fr-FR`. The
/// placeholder locales `C` and `POSIX` count as nothing detected.
#[derive(Debug, Clone)]
pub struct EnvLocale {
    pub var: String,
}

impl EnvLocale {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

/// Turns a POSIX locale name into a BCP 47 style tag.
pub fn normalize_posix_locale(raw: &str) -> Option<String> {
    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

impl LocaleDetector for EnvLocale {
    fn detect(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .and_then(|raw| normalize_posix_locale(&raw))
    }
}

/// Finds `key` in an `a=1&b=2` style parameter list and percent-decodes its
/// value. Values that are not valid UTF-8 once decoded count as missing.
fn lookup_param(params: &str, key: &str) -> Option<String> {
    params
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .and_then(|(_, value)| {
            percent_decode_str(value)
                .decode_utf8()
                .ok()
                .map(|decoded| decoded.into_owned())
        })
}

/// A locale taken from a URL query parameter, e.g. `?lang=fr`.
#[derive(Debug, Clone)]
pub struct QueryParam {
    pub url: Option<String>,
    pub key: String,
}

impl LocaleDetector for QueryParam {
    fn detect(&self) -> Option<String> {
        let url = self.url.as_deref()?;
        let without_fragment = url.split('#').next().unwrap_or_default();
        let (_, query) = without_fragment.split_once('?')?;
        non_empty(lookup_param(query, &self.key))
    }
}

/// A locale taken from a URL fragment parameter, e.g. `#lang=fr`.
#[derive(Debug, Clone)]
pub struct HashParam {
    pub url: Option<String>,
    pub key: String,
}

impl LocaleDetector for HashParam {
    fn detect(&self) -> Option<String> {
        let url = self.url.as_deref()?;
        let (_, fragment) = url.split_once('#')?;
        non_empty(lookup_param(fragment, &self.key))
    }
}

/// The preferred language of an HTTP `Accept-Language` header.
///
/// The entry with the highest quality wins; ties keep header order. The
/// wildcard `*` and entries with `q=0` are ignored.
#[derive(Debug, Clone)]
pub struct AcceptLanguage {
    pub header: Option<String>,
}

impl AcceptLanguage {
    fn parse_entry(entry: &str) -> Option<(String, f32)> {
        let mut parts = entry.split(';');
        let tag = parts.next()?.trim();
        if tag.is_empty() || tag == "*" {
            return None;
        }
        let quality = parts
            .filter_map(|p| p.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);
        (quality > 0.0).then(|| (tag.to_string(), quality))
    }
}

impl LocaleDetector for AcceptLanguage {
    fn detect(&self) -> Option<String> {
        let header = self.header.as_deref()?;
        let mut best: Option<(String, f32)> = None;
        for (tag, quality) in header.split(',').filter_map(Self::parse_entry) {
            if best.as_ref().is_none_or(|(_, q)| quality > *q) {
                best = Some((tag, quality));
            }
        }
        best.map(|(tag, _)| tag)
    }
}

/// Tries each detector in order and returns the first non-empty result.
#[derive(Default)]
pub struct FirstOf {
    detectors: Vec<Box<dyn LocaleDetector>>,
}

impl FirstOf {
    pub fn new(detectors: Vec<Box<dyn LocaleDetector>>) -> Self {
        Self { detectors }
    }

    pub fn push(&mut self, detector: impl LocaleDetector + 'static) {
        self.detectors.push(Box::new(detector));
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl fmt::Debug for FirstOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirstOf")
            .field("detectors", &self.detectors.len())
            .finish()
    }
}

impl LocaleDetector for FirstOf {
    fn detect(&self) -> Option<String> {
        self.detectors
            .iter()
            .find_map(|detector| non_empty(detector.detect()))
    }
}

/// The client-side inputs that URL and header based detectors read from.
/// URL 和请求头检测器读取的客户端输入。
#[derive(Debug, Clone, Default)]
pub struct ClientEnvironment {
    pub url: Option<String>,
    pub accept_language: Option<String>,
}

/// A textual detector description, as written in config files and on the
/// command line: `system`, `env:LANG`, `query:lang`, `hash:lang`,
/// `accept_language`.
///
/// 检测器的文本描述，用于配置文件和命令行。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DetectorSpec {
    System,
    Env(String),
    Query(String),
    Hash(String),
    AcceptLanguage,
}

impl DetectorSpec {
    /// Builds the detector this spec describes, bound to `env`.
    pub fn build(&self, env: &ClientEnvironment) -> Box<dyn LocaleDetector> {
        match self {
            Self::System => Box::new(SystemLocale),
            Self::Env(var) => Box::new(EnvLocale::new(var.clone())),
            Self::Query(key) => Box::new(QueryParam {
                url: env.url.clone(),
                key: key.clone(),
            }),
            Self::Hash(key) => Box::new(HashParam {
                url: env.url.clone(),
                key: key.clone(),
            }),
            Self::AcceptLanguage => Box::new(AcceptLanguage {
                header: env.accept_language.clone(),
            }),
        }
    }
}

impl FromStr for DetectorSpec {
    type Err = IntlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = match s.split_once(':') {
            Some((kind, arg)) => (kind.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };
        let required = |arg: Option<&str>| {
            arg.filter(|a| !a.is_empty())
                .map(str::to_string)
                .ok_or_else(|| IntlError::InvalidDetector(s.to_string()))
        };
        match kind {
            "system" if arg.is_none() => Ok(Self::System),
            "accept_language" if arg.is_none() => Ok(Self::AcceptLanguage),
            "env" => required(arg).map(Self::Env),
            "query" => required(arg).map(Self::Query),
            "hash" => required(arg).map(Self::Hash),
            _ => Err(IntlError::InvalidDetector(s.to_string())),
        }
    }
}

impl TryFrom<String> for DetectorSpec {
    type Error = IntlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DetectorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Env(var) => write!(f, "env:{var}"),
            Self::Query(key) => write!(f, "query:{key}"),
            Self::Hash(key) => write!(f, "hash:{key}"),
            Self::AcceptLanguage => f.write_str("accept_language"),
        }
    }
}

impl From<DetectorSpec> for String {
    fn from(spec: DetectorSpec) -> Self {
        spec.to_string()
    }
}

/// Builds a `FirstOf` detector from a list of specs.
pub fn chain(specs: &[DetectorSpec], env: &ClientEnvironment) -> FirstOf {
    FirstOf::new(specs.iter().map(|spec| spec.build(env)).collect())
}
