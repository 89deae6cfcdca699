use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{WrapperError, WrapperResult};

/// Mirror passed to the package manager unless overridden.
pub const DEFAULT_MIRROR: &str = "http://mirrors.kernel.org/sourceware/cygwin/";
/// Local package cache shared by the package manager and the cleaner.
pub const DEFAULT_CACHE_DIR: &str = "/packages";
pub const DEFAULT_PACKAGE_MANAGER: &str = "apt-cyg";
pub const DEFAULT_CACHE_REPORT_TOOL: &str = "apt-cyg-clean";

/// Environment variable naming an optional TOML override file.
pub const CONFIG_ENV_VAR: &str = "CYGWRAP_CONFIG";

/// Settings injected into every invocation of the wrapped tools.
///
/// A config file only needs to name the keys it overrides; everything else
/// keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapperConfig {
    pub mirror: String,
    pub cache_dir: PathBuf,
    pub package_manager: String,
    pub cache_report_tool: String,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            mirror: DEFAULT_MIRROR.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            cache_report_tool: DEFAULT_CACHE_REPORT_TOOL.to_string(),
        }
    }
}

impl WrapperConfig {
    /// Load overrides from a TOML file
    pub fn load(path: &Path) -> WrapperResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| WrapperError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    /// Defaults, or the file named by `CYGWRAP_CONFIG` when it is set
    pub fn from_env() -> WrapperResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    fn parse(path: &Path, contents: &str) -> WrapperResult<Self> {
        toml::from_str(contents).map_err(|source| WrapperError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
