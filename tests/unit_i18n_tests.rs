//! # UI Language Unit Tests / 界面语言单元测试
//!
//! Matching a requested locale against the shipped message catalogs, and
//! publishing the tool's own language to `rust-i18n`.
//!
//! 将请求的区域与内置消息目录匹配，并将工具自身的语言发布到 `rust-i18n`。

use intl_options::core::store::{LocaleStore, RustI18nStore};
use intl_options::{init_ui_locale, match_available_locale};

const SHIPPED: &[&str] = &["en", "zh-CN"];

#[cfg(test)]
mod match_tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(match_available_locale("zh-CN", SHIPPED), "zh-CN");
        assert_eq!(match_available_locale("en", SHIPPED), "en");
    }

    #[test]
    fn test_language_part_match() {
        assert_eq!(match_available_locale("en-US", SHIPPED), "en");
        assert_eq!(match_available_locale("en_GB", SHIPPED), "en");
    }

    #[test]
    fn test_bare_language_matches_regional_catalog() {
        assert_eq!(match_available_locale("zh", SHIPPED), "zh-CN");
        assert_eq!(match_available_locale("zh-TW", SHIPPED), "zh-CN");
    }

    #[test]
    fn test_unknown_locale_uses_english() {
        assert_eq!(match_available_locale("fr", SHIPPED), "en");
        assert_eq!(match_available_locale("", SHIPPED), "en");
    }
}

#[cfg(test)]
mod publish_tests {
    use super::*;

    /// One test, since the `rust-i18n` locale is process-wide.
    #[test]
    fn test_ui_locale_is_published_to_rust_i18n() {
        assert_eq!(init_ui_locale(Some("zh-CN")), "zh-CN");
        assert_eq!(&*rust_i18n::locale(), "zh-CN");

        // Unsupported languages land on the fallback.
        assert_eq!(init_ui_locale(Some("fr-FR")), "en");
        assert_eq!(&*rust_i18n::locale(), "en");

        assert_eq!(init_ui_locale(Some("zh")), "zh-CN");
        assert_eq!(&*rust_i18n::locale(), "zh-CN");

        // `None` leaves the current locale alone.
        RustI18nStore.set(None);
        assert_eq!(&*rust_i18n::locale(), "zh-CN");

        RustI18nStore.set(Some("en".to_string()));
        assert_eq!(&*rust_i18n::locale(), "en");
    }
}
