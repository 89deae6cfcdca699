//! Wrapper around `apt-cyg` that pins the mirror and package cache, and runs
//! cache maintenance for the `autoclean` and `clean` subcommands.

pub mod cache;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod external;
pub mod logging;

pub use config::WrapperConfig;
pub use dispatch::{Action, Dispatcher};
pub use error::{WrapperError, WrapperResult};
pub use external::{ExternalCommand, ProcessCommand};
