use std::ffi::{OsStr, OsString};

use crate::cache::clear_cache_contents;
use crate::config::WrapperConfig;
use crate::error::WrapperResult;
use crate::external::{ExternalCommand, ProcessCommand};

pub const AUTOCLEAN: &str = "autoclean";
pub const CLEAN: &str = "clean";
pub const UPDATE: &str = "update";

/// What a single invocation will do, decided from the first argument alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run the cache report tool verbosely over the cache directory.
    Autoclean,
    /// Empty the cache directory.
    Clean,
    /// Hand everything to the package manager.
    Delegate { args: Vec<OsString> },
}

impl Action {
    pub fn from_args(config: &WrapperConfig, args: &[OsString]) -> Self {
        match args.first().map(OsString::as_os_str) {
            Some(first) if first == OsStr::new(AUTOCLEAN) => Action::Autoclean,
            Some(first) if first == OsStr::new(CLEAN) => Action::Clean,
            _ => Action::Delegate {
                args: delegate_args(config, args),
            },
        }
    }
}

/// Base flags followed by the caller's arguments, first token included.
///
/// Arguments are forwarded byte for byte; nothing here requires UTF-8.
pub fn delegate_args(config: &WrapperConfig, args: &[OsString]) -> Vec<OsString> {
    let mut flags = vec![
        OsString::from("--mirror"),
        OsString::from(&config.mirror),
        OsString::from("--cache"),
        config.cache_dir.clone().into_os_string(),
    ];

    if args.len() > 1 && args[0].as_os_str() != OsStr::new(UPDATE) {
        flags.push(OsString::from("--noupdate"));
    }

    flags.extend(args.iter().cloned());
    flags
}

/// Arguments for the cache report tool: `-v <cache_dir>`.
pub fn report_args(config: &WrapperConfig) -> Vec<OsString> {
    vec![
        OsString::from("-v"),
        config.cache_dir.clone().into_os_string(),
    ]
}

/// Routes one invocation to the cache tools or the package manager.
pub struct Dispatcher {
    config: WrapperConfig,
    package_manager: Box<dyn ExternalCommand>,
    cache_report: Box<dyn ExternalCommand>,
}

impl Dispatcher {
    /// Dispatcher backed by the real executables named in `config`
    pub fn new(config: WrapperConfig) -> Self {
        let package_manager = Box::new(ProcessCommand::new(config.package_manager.clone()));
        let cache_report = Box::new(ProcessCommand::new(config.cache_report_tool.clone()));
        Self::with_commands(config, package_manager, cache_report)
    }

    pub fn with_commands(
        config: WrapperConfig,
        package_manager: Box<dyn ExternalCommand>,
        cache_report: Box<dyn ExternalCommand>,
    ) -> Self {
        Self {
            config,
            package_manager,
            cache_report,
        }
    }

    /// Execute the action for `args` and return the process exit code.
    ///
    /// Cache maintenance always yields 0. Delegation yields the package
    /// manager's exit code, or an error if it could not be started.
    pub async fn dispatch(&self, args: &[OsString]) -> WrapperResult<i32> {
        let action = Action::from_args(&self.config, args);
        tracing::debug!(?action, "dispatching");

        match action {
            Action::Autoclean => {
                match self.cache_report.run(&report_args(&self.config)).await {
                    Ok(code) => tracing::debug!(code, "cache report finished"),
                    Err(e) => tracing::warn!(error = %e, "cache report failed"),
                }
                Ok(0)
            }
            Action::Clean => {
                let stats = clear_cache_contents(&self.config.cache_dir).await;
                if stats.failed > 0 {
                    tracing::warn!(failed = stats.failed, "some cache entries were not removed");
                }
                Ok(0)
            }
            Action::Delegate { args } => self.package_manager.run(&args).await,
        }
    }
}
