//! # Core Module / 核心模块
//!
//! This module contains the options model, locale detection, the locale
//! store and the initializer that ties them together.
//!
//! 此模块包含选项模型、区域检测、区域存储以及将它们组合在一起的初始化器。

pub mod detect;
pub mod error;
pub mod formats;
pub mod initializer;
pub mod messages;
pub mod options;
pub mod store;

// Re-exports
pub use error::IntlError;
pub use formats::{FormatCategory, Formats, PartialFormats};
pub use initializer::{Initializer, LocaleSource};
pub use options::{ConfigureOptions, InitialLocale, Options};
pub use store::{LocaleObservable, LocaleStore, Observable, RustI18nStore};
