use std::ffi::CStr;
use std::fmt::{self, Debug, Formatter};
use std::mem::ManuallyDrop;

use libc::{c_int, mode_t};
use tracing::debug;

use crate::fs::RawOsError;
use crate::fs::error::IOError;
use crate::fs::syscall::{self, check_misuse};

/// Sole owner of an open file descriptor. The descriptor is closed exactly once, either by
/// [`Fd::close`] or when dropped.
pub(crate) struct Fd(c_int);

impl Fd {
    pub fn open(pathname: &CStr, flags: c_int, mode: mode_t) -> Result<Fd, RawOsError> {
        // SAFETY: pathname is a valid, NUL terminated string that outlives the call.
        syscall::retry(|| unsafe {
            libc::open(pathname.as_ptr(), flags | libc::O_CLOEXEC, mode as libc::c_uint)
        })
        .map(Fd)
    }

    /// # Safety
    /// `fd` must be an open descriptor that nothing else will close.
    pub const unsafe fn from_raw(fd: c_int) -> Fd {
        Fd(fd)
    }

    /// Writes the whole buffer, looping over short writes. Bytes written before a failure stay
    /// written.
    pub fn write_all(&self, mut buf: &[u8]) -> Result<(), IOError> {
        while !buf.is_empty() {
            // SAFETY: buf is valid for reads of buf.len() bytes.
            match syscall::retry(|| unsafe { libc::write(self.0, buf.as_ptr().cast(), buf.len()) }) {
                Ok(0) => Err(IOError(libc::EIO))?,
                Ok(count) => buf = &buf[count as usize..],
                Err(e) => Err(IOError(check_misuse(e)))?,
            }
        }
        Ok(())
    }

    pub fn read(&self, buf: &mut [u8]) -> Result<usize, IOError> {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        match syscall::retry(|| unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) }) {
            Ok(count) => Ok(count as usize),
            Err(e) => Err(IOError(check_misuse(e))),
        }
    }

    pub fn sync(&self) -> Result<(), IOError> {
        // SAFETY: fsync has no memory safety requirements.
        match syscall::retry(|| unsafe { libc::fsync(self.0) }) {
            Ok(_) => Ok(()),
            Err(e) => Err(IOError(check_misuse(e))),
        }
    }

    pub fn close(self) -> Result<(), IOError> {
        let fd = ManuallyDrop::new(self).0;
        // SAFETY: close invalidates the descriptor regardless of the outcome, and self has been
        // consumed without running Drop, so it is never closed again. EINTR is not retried because
        // the descriptor is already released at that point on Linux.
        if unsafe { libc::close(fd) } == -1 {
            Err(IOError(check_misuse(syscall::err_no())))?
        }
        Ok(())
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            debug!(fd = self.0, errno = syscall::err_no(), "discarding error from implicit close");
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
