//! # Show Command Module / 显示命令模块
//!
//! Loads the configuration, layers command-line overrides on top, runs the
//! initializer against a fresh locale store and prints the result.
//!
//! 加载配置，叠加命令行覆盖，针对新的区域存储运行初始化器并打印结果。

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::core::detect::{ClientEnvironment, DetectorSpec, chain};
use crate::core::initializer::Initializer;
use crate::core::options::{ConfigureOptions, InitialLocale};
use crate::core::store::LocaleObservable;
use crate::infra::config_file::ConfigFile;
use crate::reporting::{self, ShowReport};

/// Arguments of the `show` command.
#[derive(Debug, Clone, Default)]
pub struct ShowArgs {
    pub config: PathBuf,
    pub initial_locale: Option<String>,
    pub fallback_locale: Option<String>,
    pub detect: Vec<DetectorSpec>,
    pub url: Option<String>,
    pub accept_language: Option<String>,
    pub json: bool,
}

impl ShowArgs {
    fn client_environment(&self) -> ClientEnvironment {
        ClientEnvironment {
            url: self.url.clone(),
            accept_language: self.accept_language.clone(),
        }
    }

    /// Command-line values as initializer input; absent flags stay `None`.
    fn overrides(&self, env: &ClientEnvironment) -> ConfigureOptions {
        let initial_locale = match (&self.initial_locale, self.detect.is_empty()) {
            (Some(locale), _) => Some(InitialLocale::Literal(locale.clone())),
            (None, false) => Some(InitialLocale::detect(chain(&self.detect, env))),
            (None, true) => None,
        };
        ConfigureOptions {
            fallback_locale: self.fallback_locale.clone(),
            initial_locale,
            ..ConfigureOptions::default()
        }
    }
}

/// Resolves the options described by `args`.
/// Returns the locale the store ended up with and the effective initializer.
pub fn resolve(args: &ShowArgs) -> Result<(Option<String>, Initializer<LocaleObservable>)> {
    let env = args.client_environment();
    let file = ConfigFile::load_or_default(&args.config)?;
    let opts = file
        .into_configure_options(&env)
        .overlay(args.overrides(&env));

    let mut initializer = Initializer::new(LocaleObservable::default());
    let _subscription = initializer
        .store()
        .subscribe(|locale| debug!(?locale, "locale store updated"));
    initializer.init(opts);
    Ok((initializer.store().get(), initializer))
}

/// Executes the show command.
pub fn execute(args: ShowArgs) -> Result<()> {
    let (locale, initializer) = resolve(&args)?;
    let report = ShowReport {
        locale,
        options: initializer.options(),
    };

    if args.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_summary(&report);
    }
    Ok(())
}
