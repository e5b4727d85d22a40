//! # Reporting Module / 报告模块
//!
//! This module handles the display of the effective options, either as a
//! colored console summary or as JSON.
//!
//! 此模块负责显示生效的选项，可以是彩色控制台摘要或 JSON。

pub mod console;

// Re-export common reporting functions
pub use console::{ShowReport, print_json, print_summary};
