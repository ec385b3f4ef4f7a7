use std::ffi::OsStr;
use std::mem;

use rand::Rng;
use tracing::debug;

use super::{TempCloseError, TempError, TempOptions};
use crate::fs::file::{File, ReadError, SyncError, WriteError};
use crate::fs::ops::remove_file;

/// A file that is deleted when it is closed or dropped.
///
/// Closing happens in two steps: the descriptor is closed first, then the path is unlinked. Both
/// happen exactly once, whichever of [`TempFile::close`] and [`Drop`] gets there first.
/// [`TempFile::release`] hands the file back without deleting it.
#[derive(Debug, Default)]
pub struct TempFile {
    file: File,
    pending_deletion: bool,
}

impl TempFile {
    /// Creates a temporary file in `directory` with the default [`TempOptions`].
    pub fn create<D, P, R>(directory: D, pattern: P, rng: &mut R) -> Result<TempFile, TempError>
    where
        D: AsRef<OsStr>,
        P: AsRef<OsStr>,
        R: Rng + ?Sized,
    {
        TempOptions::new().create(directory, pattern, rng)
    }

    pub fn options() -> TempOptions {
        TempOptions::new()
    }

    pub(crate) const fn new(file: File) -> TempFile {
        TempFile {
            file,
            pending_deletion: true,
        }
    }

    pub fn path(&self) -> &OsStr {
        self.file.path()
    }

    pub const fn file(&self) -> &File {
        &self.file
    }

    pub const fn is_pending_deletion(&self) -> bool {
        self.pending_deletion
    }

    /// See [`File::write`].
    pub fn write<B: AsRef<[u8]>>(&mut self, bytes: B) -> Result<(), WriteError> {
        self.file.write(bytes)
    }

    /// See [`File::read`].
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
        self.file.read(buf)
    }

    /// See [`File::read_to_end`].
    pub fn read_to_end(&mut self, out: &mut Vec<u8>) -> Result<usize, ReadError> {
        self.file.read_to_end(out)
    }

    /// See [`File::sync`].
    pub fn sync(&mut self) -> Result<(), SyncError> {
        self.file.sync()
    }

    /// Closes the file, then deletes it.
    ///
    /// If closing fails, that error is returned even if deleting fails too. Either way, the path
    /// is forgotten and the file won't be deleted again.
    ///
    /// # Panics
    /// Panics if the file has already been closed.
    pub fn close(&mut self) -> Result<(), TempCloseError> {
        let path = self.file.path().to_owned();
        let delete = mem::replace(&mut self.pending_deletion, false);

        let closed = self.file.close();
        if !delete {
            return Ok(closed?);
        }

        match (closed, remove_file(&path)) {
            (Ok(()), removed) => Ok(removed?),
            (Err(error), Ok(())) => Err(error.into()),
            (Err(error), Err(unlink_error)) => {
                debug!(?path, %unlink_error, "discarding unlink error after failed close");
                Err(error.into())
            },
        }
    }

    /// Cancels the pending deletion and returns the underlying file, leaving this one empty.
    pub fn release(&mut self) -> File {
        self.pending_deletion = false;
        self.file.take()
    }

    pub fn into_file(mut self) -> File {
        self.release()
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.pending_deletion
            && let Err(error) = self.close()
        {
            debug!(%error, "discarding error from implicit temporary file close");
        }
    }
}
