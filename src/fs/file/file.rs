use std::ffi::{OsStr, OsString};
use std::fmt::{self, Debug, Formatter};
use std::mem;

use libc::c_int;
use tracing::{debug, trace};

use super::{CloseError, FileMode, OpenError, ReadError, SyncError, WriteError};
use crate::fs::error::{IOError, InvalidArgumentError};
use crate::fs::fd::Fd;
use crate::fs::panic::{ClosedFilePanic, DoubleClosePanic, Panic};
use crate::fs::syscall;

/// Permissions given to files created by [`File::open`].
pub const DEFAULT_PERMISSIONS: u16 = 0o600;

const BUFFER_SIZE: usize = 8192;

/// An open file, owning its descriptor.
///
/// A `File` is in one of three states:
/// - open: it has a descriptor and the path it was opened with.
/// - closed: [`File::close`] has been called. The path is empty and closing again panics.
/// - empty: it was created with [`Default`] or emptied by [`File::take`]. It has no descriptor and
///   no path, and closing or dropping it does nothing.
///
/// Writes are not buffered: each call to [`File::write`] hands its bytes to the OS before
/// returning, so a failure is reported by the write that caused it. After a failed write the file
/// keeps reporting that failure from every subsequent write, read and sync until it is closed.
///
/// Dropping an open `File` closes it, discarding any error. Call [`File::close`] to observe close
/// errors.
#[derive(Default)]
pub struct File {
    pub(crate) fd: Option<Fd>,
    path: OsString,
    mode: FileMode,
    closed: bool,
    failure: Option<IOError>,
}

impl File {
    pub fn open<P: AsRef<OsStr>>(path: P, mode: FileMode) -> Result<File, OpenError> {
        File::open_with_permissions(path, mode, DEFAULT_PERMISSIONS)
    }

    /// Like [`File::open`], with the permission bits used if the file is created.
    pub fn open_with_permissions<P: AsRef<OsStr>>(
        path: P,
        mode: FileMode,
        permissions: u16,
    ) -> Result<File, OpenError> {
        let path = path.as_ref();
        let flags = mode.flags()?;
        let pathname = syscall::c_path(path)?;

        let fd = Fd::open(&pathname, flags, permissions.into())
            .map_err(OpenError::interpret_raw_error)?;
        trace!(?path, ?mode, ?fd, "opened file");

        Ok(File {
            fd: Some(fd),
            path: path.to_owned(),
            mode,
            closed: false,
            failure: None,
        })
    }

    /// Adopts an already open descriptor.
    ///
    /// # Safety
    /// `fd` must be an open descriptor, compatible with `mode`, that nothing else will close.
    pub unsafe fn from_raw_fd<P: Into<OsString>>(fd: c_int, path: P, mode: FileMode) -> File {
        File {
            // SAFETY: Upheld by the caller.
            fd: Some(unsafe { Fd::from_raw(fd) }),
            path: path.into(),
            mode,
            closed: false,
            failure: None,
        }
    }

    /// The path this file was opened with, or an empty path once closed.
    pub fn path(&self) -> &OsStr {
        &self.path
    }

    pub const fn mode(&self) -> FileMode {
        self.mode
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns true for a file with no descriptor that was never closed, see [`File::take`].
    pub const fn is_empty(&self) -> bool {
        self.fd.is_none() && !self.closed
    }

    fn check_failure(&self) -> Result<(), IOError> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    fn live_fd(&self) -> &Fd {
        match &self.fd {
            Some(fd) => fd,
            None => ClosedFilePanic.panic(),
        }
    }

    /// Writes all of `bytes` to the file.
    ///
    /// # Panics
    /// Panics if the file is closed or empty.
    pub fn write<B: AsRef<[u8]>>(&mut self, bytes: B) -> Result<(), WriteError> {
        self.check_failure()?;
        if !self.mode.contains(FileMode::WRITE) {
            Err(InvalidArgumentError("file not opened for writing"))?
        }

        let result = self.live_fd().write_all(bytes.as_ref());
        if let Err(error) = result {
            debug!(path = ?self.path, %error, "write failed");
            self.failure = Some(error);
        }
        Ok(result?)
    }

    /// Reads into `buf`, returning the number of bytes read. Zero means end of file.
    ///
    /// # Panics
    /// Panics if the file is closed or empty.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
        self.check_failure()?;
        if !self.mode.contains(FileMode::READ) {
            Err(InvalidArgumentError("file not opened for reading"))?
        }
        Ok(self.live_fd().read(buf)?)
    }

    /// Reads until end of file, appending to `out`. Returns the number of bytes appended.
    ///
    /// # Panics
    /// Panics if the file is closed or empty.
    pub fn read_to_end(&mut self, out: &mut Vec<u8>) -> Result<usize, ReadError> {
        let start = out.len();
        let mut buf = [0_u8; BUFFER_SIZE];
        loop {
            match self.read(&mut buf)? {
                0 => return Ok(out.len() - start),
                count => out.extend_from_slice(&buf[..count]),
            }
        }
    }

    /// Flushes the file to stable storage, surfacing any error the OS deferred.
    ///
    /// # Panics
    /// Panics if the file is closed or empty.
    pub fn sync(&mut self) -> Result<(), SyncError> {
        self.check_failure()?;
        Ok(self.live_fd().sync()?)
    }

    /// Closes the file. Afterwards, [`File::path`] is empty.
    ///
    /// An error from an earlier [`File::write`] is not reported again. Closing an empty file does
    /// nothing.
    ///
    /// # Panics
    /// Panics if the file has already been closed.
    pub fn close(&mut self) -> Result<(), CloseError> {
        if self.closed {
            DoubleClosePanic.panic()
        }
        let Some(fd) = self.fd.take() else {
            return Ok(());
        };

        self.closed = true;
        self.failure = None;
        let path = mem::take(&mut self.path);
        trace!(?path, ?fd, "closing file");
        fd.close().map_err(|error: IOError| {
            debug!(?path, %error, "close failed");
            error.into()
        })
    }

    /// Moves the file out, leaving an empty file in its place.
    pub fn take(&mut self) -> File {
        mem::take(self)
    }
}

impl Drop for File {
    fn drop(&mut self) {
        if let Some(fd) = self.fd.take() {
            trace!(path = ?self.path, ?fd, "closing dropped file");
            // Fd::drop logs and discards errors instead of raising misuse panics.
            drop(fd);
        }
    }
}

impl Debug for File {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("File")
            .field("fd", &self.fd)
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("closed", &self.closed)
            .field("failure", &self.failure)
            .finish()
    }
}
