use std::path::PathBuf;

use thiserror::Error;

pub type WrapperResult<T> = Result<T, WrapperError>;

#[derive(Debug, Error)]
pub enum WrapperError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl WrapperError {
    /// The program could not be located at all.
    pub fn is_command_not_found(&self) -> bool {
        matches!(
            self,
            WrapperError::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Exit code a POSIX shell would report for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            _ if self.is_command_not_found() => 127,
            WrapperError::Spawn { .. } => 126,
            WrapperError::Config { .. } | WrapperError::ConfigParse { .. } => 1,
        }
    }
}
