use std::ffi::OsString;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{WrapperError, WrapperResult};

/// An external program the wrapper hands work off to.
#[async_trait]
pub trait ExternalCommand: Send + Sync {
    /// Run to completion and return the exit code.
    async fn run(&self, args: &[OsString]) -> WrapperResult<i32>;
}

/// Spawns a real executable, resolved through `PATH`, with inherited stdio.
#[derive(Debug, Clone)]
pub struct ProcessCommand {
    program: String,
}

impl ProcessCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl ExternalCommand for ProcessCommand {
    async fn run(&self, args: &[OsString]) -> WrapperResult<i32> {
        tracing::debug!(program = %self.program, ?args, "spawning external command");

        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| WrapperError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let code = exit_code(status);
        tracing::debug!(program = %self.program, code, "external command finished");
        Ok(code)
    }
}

/// Signal deaths are reported as `128 + signal`, like a shell does.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
