//! # Message Runtime Unit Tests / 消息运行时单元测试
//!
//! Missing-message warnings and the loading-state delay.
//!
//! 缺失消息警告与加载状态延迟。

use intl_options::core::messages::{LoadingState, MissingMessages};
use intl_options::core::options::Options;
use std::time::Duration;
use tracing_test::traced_test;

#[cfg(test)]
mod missing_message_tests {
    use super::*;

    #[test]
    #[traced_test]
    fn test_warns_when_enabled() {
        let options = Options::default();

        assert!(MissingMessages::report(&options, "page.title", Some("fr")));
        assert!(logs_contain("The message \"page.title\" was not found in \"fr\"."));
    }

    #[test]
    #[traced_test]
    fn test_silent_when_disabled() {
        let options = Options {
            warn_on_missing_messages: false,
            ..Options::default()
        };

        assert!(!MissingMessages::report(&options, "page.footer", Some("fr")));
        assert!(!logs_contain("page.footer"));
    }

    #[test]
    #[traced_test]
    fn test_defaults_to_initial_locale() {
        let options = Options {
            initial_locale: Some("sv".to_string()),
            ..Options::default()
        };

        MissingMessages::report(&options, "menu.open", None);
        assert!(logs_contain("was not found in \"sv\""));
    }
}

#[cfg(test)]
mod loading_state_tests {
    use super::*;

    #[test]
    fn test_loading_hidden_before_delay() {
        let options = Options::default();
        assert!(!LoadingState::should_show(&options, Duration::from_millis(199)));
        assert_eq!(
            LoadingState::remaining(&options, Duration::from_millis(150)),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_loading_shown_after_delay() {
        let options = Options::default();
        assert!(LoadingState::should_show(&options, Duration::from_millis(200)));
        assert_eq!(
            LoadingState::remaining(&options, Duration::from_secs(1)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_zero_delay_shows_immediately() {
        let options = Options {
            loading_delay: Duration::ZERO,
            ..Options::default()
        };
        assert!(LoadingState::should_show(&options, Duration::ZERO));
    }
}
