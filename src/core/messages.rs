//! # Message Runtime Helpers / 消息运行时辅助
//!
//! Behavior driven by the non-format options: warnings for missing
//! messages and the delay before a loading state is shown.
//!
//! 由非格式选项驱动的行为：缺失消息的警告，以及显示加载状态前的延迟。

use std::time::Duration;
use tracing::warn;

use crate::core::options::Options;

/// Reports lookups of message ids that have no translation.
pub struct MissingMessages;

impl MissingMessages {
    /// Emits a warning for `id` in `locale` when the options ask for it.
    /// Returns whether a warning was emitted.
    ///
    /// 当选项要求时，为 `locale` 中的 `id` 发出警告。返回是否发出了警告。
    pub fn report(options: &Options, id: &str, locale: Option<&str>) -> bool {
        if !options.warn_on_missing_messages {
            return false;
        }
        let locale = locale.or(options.initial_locale.as_deref()).unwrap_or("?");
        warn!(
            id,
            locale,
            "The message \"{id}\" was not found in \"{locale}\"."
        );
        true
    }
}

/// Decides when a pending load becomes visible to the user.
pub struct LoadingState;

impl LoadingState {
    /// `true` once `elapsed` has reached the configured loading delay.
    pub fn should_show(options: &Options, elapsed: Duration) -> bool {
        elapsed >= options.loading_delay
    }

    /// Time left before the loading state should appear.
    pub fn remaining(options: &Options, elapsed: Duration) -> Duration {
        options.loading_delay.saturating_sub(elapsed)
    }
}
