//! # Formats Module / 格式模块
//!
//! Named formatting presets for numbers, dates and times. Each category maps
//! a format name (e.g. `"short"`, `"compactLong"`) to a dictionary of
//! directives that a locale-aware formatter consumes as-is.
//!
//! 数字、日期和时间的命名格式预设。每个类别将格式名称映射到一组指令，
//! 由区域感知的格式化器直接使用。
//!
//! Directive values are never validated here; the table only guarantees that
//! names are unique within a category.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::core::error::IntlError;

/// Formatting directives for a single named format, e.g. `{ notation: "compact" }`.
pub type FormatDirectives = BTreeMap<String, Value>;

/// All named formats of one category.
pub type FormatTable = BTreeMap<String, FormatDirectives>;

/// The three format categories understood by the options object.
/// 选项对象支持的三个格式类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatCategory {
    Number,
    Date,
    Time,
}

impl FormatCategory {
    /// Every category, in declaration order.
    pub const ALL: [FormatCategory; 3] = [Self::Number, Self::Date, Self::Time];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for FormatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatCategory {
    type Err = IntlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            other => Err(IntlError::UnknownCategory(other.to_string())),
        }
    }
}

/// Named formats for every category.
/// 每个类别的命名格式。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Formats {
    #[serde(default)]
    pub number: FormatTable,
    #[serde(default)]
    pub date: FormatTable,
    #[serde(default)]
    pub time: FormatTable,
}

/// Builds a directive dictionary from string pairs.
pub fn directives(pairs: &[(&str, &str)]) -> FormatDirectives {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}

fn entry(name: &str, pairs: &[(&str, &str)]) -> (String, FormatDirectives) {
    (name.to_string(), directives(pairs))
}

/// The built-in formats. Built once; every `Formats::default()` is a deep copy.
static DEFAULT_FORMATS: Lazy<Formats> = Lazy::new(|| Formats {
    number: FormatTable::from([
        entry("scientific", &[("notation", "scientific")]),
        entry("engineering", &[("notation", "engineering")]),
        entry(
            "compactLong",
            &[("notation", "compact"), ("compactDisplay", "long")],
        ),
        entry(
            "compactShort",
            &[("notation", "compact"), ("compactDisplay", "short")],
        ),
    ]),
    date: FormatTable::from([
        entry(
            "short",
            &[("month", "numeric"), ("day", "numeric"), ("year", "2-digit")],
        ),
        entry(
            "medium",
            &[("month", "short"), ("day", "numeric"), ("year", "numeric")],
        ),
        entry(
            "long",
            &[("month", "long"), ("day", "numeric"), ("year", "numeric")],
        ),
        entry(
            "full",
            &[
                ("weekday", "long"),
                ("month", "long"),
                ("day", "numeric"),
                ("year", "numeric"),
            ],
        ),
    ]),
    time: FormatTable::from([
        entry("short", &[("hour", "numeric"), ("minute", "numeric")]),
        entry(
            "medium",
            &[("hour", "numeric"), ("minute", "numeric"), ("second", "numeric")],
        ),
        entry(
            "long",
            &[
                ("hour", "numeric"),
                ("minute", "numeric"),
                ("second", "numeric"),
                ("timeZoneName", "short"),
            ],
        ),
        entry(
            "full",
            &[
                ("hour", "numeric"),
                ("minute", "numeric"),
                ("second", "numeric"),
                ("timeZoneName", "short"),
            ],
        ),
    ]),
});

impl Default for Formats {
    fn default() -> Self {
        DEFAULT_FORMATS.clone()
    }
}

impl Formats {
    /// Returns the table of a category.
    pub fn category(&self, category: FormatCategory) -> &FormatTable {
        match category {
            FormatCategory::Number => &self.number,
            FormatCategory::Date => &self.date,
            FormatCategory::Time => &self.time,
        }
    }

    fn category_mut(&mut self, category: FormatCategory) -> &mut FormatTable {
        match category {
            FormatCategory::Number => &mut self.number,
            FormatCategory::Date => &mut self.date,
            FormatCategory::Time => &mut self.time,
        }
    }

    /// Looks up a named format, failing with `IntlError::UnknownFormat` when absent.
    ///
    /// 查找命名格式，不存在时返回 `IntlError::UnknownFormat`。
    pub fn get(&self, category: FormatCategory, name: &str) -> Result<&FormatDirectives, IntlError> {
        self.category(category)
            .get(name)
            .ok_or_else(|| IntlError::UnknownFormat {
                category,
                name: name.to_string(),
            })
    }

    /// Merges overrides per category.
    ///
    /// Only categories present in `overrides` are touched, and within a
    /// category only the named entries are replaced. Entries are replaced
    /// whole; directives of an overridden entry are not merged key by key.
    pub fn merge(&mut self, overrides: PartialFormats) {
        let PartialFormats { number, date, time } = overrides;
        let provided = [
            (FormatCategory::Number, number),
            (FormatCategory::Date, date),
            (FormatCategory::Time, time),
        ];
        for (category, entries) in provided {
            if let Some(entries) = entries {
                self.category_mut(category).extend(entries);
            }
        }
    }
}

/// Per-category format overrides, as supplied by the caller.
/// 调用方提供的按类别格式覆盖。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialFormats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<FormatTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<FormatTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<FormatTable>,
}

impl PartialFormats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) one named format in the given category.
    pub fn with(
        mut self,
        category: FormatCategory,
        name: impl Into<String>,
        directives: FormatDirectives,
    ) -> Self {
        let slot = match category {
            FormatCategory::Number => &mut self.number,
            FormatCategory::Date => &mut self.date,
            FormatCategory::Time => &mut self.time,
        };
        slot.get_or_insert_with(FormatTable::new)
            .insert(name.into(), directives);
        self
    }

    /// True when no category is overridden.
    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.date.is_none() && self.time.is_none()
    }
}
