use std::ffi::{OsStr, OsString};
use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::{RunError, SignaledError};

/// Launches a binary and waits for it to exit.
///
/// This is the boundary between the file primitives and whatever actually sandboxes and spawns the
/// child: implementations receive native paths and arguments, typically including paths of
/// [`TempFile`](crate::fs::TempFile)s that must outlive the call.
pub trait RunBinary {
    /// Runs `argv0` with `args`, returning its exit code.
    fn run_binary(&self, argv0: &OsStr, args: &[OsString]) -> Result<i32, RunError>;
}

/// A [`RunBinary`] that spawns the binary directly as a child process, inheriting stdio and
/// environment.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    current_dir: Option<PathBuf>,
}

impl ProcessRunner {
    pub fn new() -> ProcessRunner {
        ProcessRunner::default()
    }

    pub fn current_dir<P: Into<PathBuf>>(&mut self, dir: P) -> &mut Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl RunBinary for ProcessRunner {
    fn run_binary(&self, argv0: &OsStr, args: &[OsString]) -> Result<i32, RunError> {
        let mut command = Command::new(argv0);
        command.args(args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        debug!(?argv0, ?args, "running binary");
        let status = command.status()?;

        match (status.code(), status.signal()) {
            (Some(code), _) => {
                debug!(?argv0, code, "binary exited");
                Ok(code)
            },
            (None, Some(signal)) => {
                debug!(?argv0, signal, "binary terminated by signal");
                Err(SignaledError { signal }.into())
            },
            (None, None) => unreachable!("exit status with neither a code nor a signal"),
        }
    }
}
