//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for intl-options,
//! including config file handling, logging setup, and i18n support.
//!
//! 此模块为 intl-options 提供基础设施服务，
//! 包括配置文件处理、日志设置和国际化支持。

pub mod config_file;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
