//! # Commands Module / 命令模块
//!
//! - `show` - resolve the initial locale and print the effective options
//! - `init` - write a default configuration file
//!
//! - `show` - 解析初始区域并打印生效的选项
//! - `init` - 写入默认配置文件

pub mod init;
pub mod show;
