//! # Error Types / 错误类型
//!
//! Typed errors raised by the library. Application boundaries (config
//! loading, CLI commands) wrap these in `anyhow::Error` with context.
//!
//! 库产生的类型化错误。应用边界（配置加载、CLI 命令）使用 `anyhow::Error` 包装并附加上下文。

use thiserror::Error;

use crate::core::formats::FormatCategory;

/// Errors produced while resolving formats or building detectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntlError {
    /// A format name was requested that the category does not define.
    #[error("Unknown \"{name}\" {category} format.")]
    UnknownFormat {
        category: FormatCategory,
        name: String,
    },
    /// A category name other than `number`, `date` or `time`.
    #[error("unknown format category: {0}")]
    UnknownCategory(String),
    /// A detector spec that cannot be turned into a detector.
    #[error("invalid locale detector: {0}")]
    InvalidDetector(String),
}
