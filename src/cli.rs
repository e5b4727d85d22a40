// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::detect::DetectorSpec;
use crate::infra::config_file::CONFIG_FILE_NAME;
use crate::infra::logging::init_logging;
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

fn build_cli(locale: &str) -> Command {
    Command::new("intl-options")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("cli.verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("show")
                .about(t!("cmd.show_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg.config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .default_value(CONFIG_FILE_NAME)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("initial-locale")
                        .long("initial-locale")
                        .help(t!("arg.initial_locale", locale = locale).to_string())
                        .value_name("LOCALE")
                        .conflicts_with("detect")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("fallback-locale")
                        .long("fallback-locale")
                        .help(t!("arg.fallback_locale", locale = locale).to_string())
                        .value_name("LOCALE")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("detect")
                        .long("detect")
                        .help(t!("arg.detect", locale = locale).to_string())
                        .value_name("DETECTOR")
                        .value_parser(clap::value_parser!(DetectorSpec))
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help(t!("arg.url", locale = locale).to_string())
                        .value_name("URL")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("accept-language")
                        .long("accept-language")
                        .help(t!("arg.accept_language", locale = locale).to_string())
                        .value_name("HEADER")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("arg.json", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd.init_about", locale = locale).to_string())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg.output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .default_value(CONFIG_FILE_NAME)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg.force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn show_args(matches: &ArgMatches) -> commands::show::ShowArgs {
    commands::show::ShowArgs {
        config: matches
            .get_one::<PathBuf>("config")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        initial_locale: matches.get_one::<String>("initial-locale").cloned(),
        fallback_locale: matches.get_one::<String>("fallback-locale").cloned(),
        detect: matches
            .get_many::<DetectorSpec>("detect")
            .map(|specs| specs.cloned().collect())
            .unwrap_or_default(),
        url: matches.get_one::<String>("url").cloned(),
        accept_language: matches.get_one::<String>("accept-language").cloned(),
        json: matches.get_flag("json"),
    }
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let explicit_language = pre_parse_language();
    let language = crate::init_ui_locale(explicit_language.as_deref());

    let matches = build_cli(&language).get_matches();
    init_logging(matches.get_flag("verbose"));
    if explicit_language.is_none() {
        tracing::debug!("{}", t!("system_language_detected", lang = &language));
    }

    match matches.subcommand() {
        Some(("show", show_matches)) => {
            commands::show::execute(show_args(show_matches))?;
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
            commands::init::execute(&output, init_matches.get_flag("force"))?;
        }
        _ => {
            // subcommand_required makes clap print help and exit before this point.
        }
    }
    Ok(())
}
