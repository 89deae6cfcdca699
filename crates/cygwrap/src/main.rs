use std::process;

use anyhow::Result;
use colored::Colorize;
use cygwrap::cli::Cli;
use cygwrap::error::WrapperError;
use cygwrap::{logging, Dispatcher, WrapperConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::from_env();
    logging::init_logging();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => match e.downcast_ref::<WrapperError>() {
            Some(err) => {
                match err {
                    // Same report a shell gives for an unresolvable command
                    WrapperError::Spawn { program, .. } if err.is_command_not_found() => {
                        eprintln!("{}: command not found", program)
                    }
                    _ => eprintln!("{} {}", "Error:".red(), err),
                }
                err.exit_code()
            }
            None => {
                eprintln!("{} {:#}", "Error:".red(), e);
                1
            }
        },
    };

    process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let config = WrapperConfig::from_env()?;
    let dispatcher = Dispatcher::new(config);
    Ok(dispatcher.dispatch(&cli.args).await?)
}
