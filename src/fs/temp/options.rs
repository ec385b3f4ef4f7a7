use std::ffi::OsStr;

use rand::Rng;
use tracing::{debug, trace};

use super::{TempError, TempFile};
use crate::fs::error::ResourceExhaustedError;
use crate::fs::file::{DEFAULT_PERMISSIONS, File, FileMode, OpenError};
use crate::fs::path::{check_pattern, temp_name};

/// How many names [`TempFile::create`] tries before giving up.
pub const DEFAULT_TEMP_ATTEMPTS: u32 = 10;

/// A builder for creating temporary files with non-default settings. Available via
/// [`TempFile::options`].
#[derive(Debug, Clone)]
pub struct TempOptions {
    pub(crate) attempts: u32,
    pub(crate) permissions: u16,
}

impl TempOptions {
    pub fn new() -> TempOptions {
        TempOptions::default()
    }

    /// Sets how many candidate names are tried before failing with
    /// [`ResourceExhausted`](TempError::ResourceExhausted).
    pub const fn attempts(&mut self, value: u32) -> &mut Self {
        self.attempts = value;
        self
    }

    pub const fn permissions(&mut self, value: u16) -> &mut Self {
        self.permissions = value;
        self
    }

    /// Creates a new temporary file in `directory`, named after `pattern`. See
    /// [`temp_name`](crate::fs::path::temp_name) for the pattern syntax.
    ///
    /// Each candidate is created exclusively. A name that is already taken is replaced by a fresh
    /// one; any other failure is returned immediately.
    pub fn create<D, P, R>(&self, directory: D, pattern: P, rng: &mut R) -> Result<TempFile, TempError>
    where
        D: AsRef<OsStr>,
        P: AsRef<OsStr>,
        R: Rng + ?Sized,
    {
        let (directory, pattern) = (directory.as_ref(), pattern.as_ref());
        let mode = FileMode::READ_WRITE | FileMode::CREATE | FileMode::EXCLUSIVE;
        check_pattern(pattern)?;

        for attempt in 1..=self.attempts {
            let path = temp_name(directory, pattern, rng)?;
            match File::open_with_permissions(&path, mode, self.permissions) {
                Ok(file) => {
                    debug!(?path, attempt, "created temporary file");
                    return Ok(TempFile::new(file));
                },
                Err(OpenError::AlreadyExists(_)) => {
                    trace!(?path, attempt, "temporary file name taken, retrying");
                },
                Err(OpenError::NotFound(e)) => Err(e)?,
                Err(OpenError::PermissionDenied(e)) => Err(e)?,
                Err(OpenError::InvalidArgument(e)) => Err(e)?,
                Err(OpenError::IO(e)) => Err(e)?,
            }
        }

        debug!(?directory, ?pattern, attempts = self.attempts, "no free temporary file name");
        Err(ResourceExhaustedError { attempts: self.attempts }.into())
    }
}

impl Default for TempOptions {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_TEMP_ATTEMPTS,
            permissions: DEFAULT_PERMISSIONS,
        }
    }
}
