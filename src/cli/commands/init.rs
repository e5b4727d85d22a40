//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which creates a new
//! configuration file from the default template.
//!
//! 此模块实现 `init` 命令，用默认模板创建新的配置文件。

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::infra::config_file::write_default_config;
use crate::infra::t;

/// Executes the init command.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(output: &Path, force: bool) -> Result<()> {
    if !write_default_config(output, force)? {
        println!(
            "{}",
            t!("init.file_exists", path = output.display()).red()
        );
        println!("{}", t!("init.use_force").yellow());
        return Ok(());
    }

    println!(
        "{}",
        t!("init.success", path = output.display()).green()
    );
    println!("{}", t!("init.next_steps"));

    Ok(())
}
