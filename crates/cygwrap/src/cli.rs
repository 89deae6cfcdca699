use std::ffi::OsString;

use clap::Parser;

/// Everything after the program name is captured verbatim, flags included.
#[derive(Parser, Debug)]
#[command(name = "cygwrap")]
#[command(about = "Run apt-cyg with the local mirror and package cache")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments forwarded to apt-cyg, or `autoclean` / `clean`
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    pub fn from_env() -> Self {
        Self::parse_raw(std::env::args_os())
    }

    /// Parse with an end-of-options marker injected after the program name, so
    /// that none of the caller's tokens (a literal `--` included) are consumed.
    pub fn parse_raw<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("cygwrap"));
        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(argv);
        Self::parse_from(escaped)
    }
}
