use std::ffi::OsStr;

use derive_more::{Display, Error, From, IsVariant};
use libc::{EACCES, ENOENT, EPERM, EROFS};
use tracing::trace;

use crate::fs::error::{
    IOError, InvalidArgumentError, NotFoundError, PermissionDeniedError, impl_into_fs_error,
};
use crate::fs::syscall::{self, check_misuse};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum UnlinkError {
    NotFound(NotFoundError),
    PermissionDenied(PermissionDeniedError),
    InvalidArgument(InvalidArgumentError),
    IO(IOError),
}

impl_into_fs_error!(UnlinkError { NotFound, PermissionDenied, InvalidArgument, IO });

/// Removes the directory entry at `path`.
pub fn remove_file<P: AsRef<OsStr>>(path: P) -> Result<(), UnlinkError> {
    let path = path.as_ref();
    let pathname = syscall::c_path(path)?;

    // SAFETY: pathname is a valid, NUL terminated string that outlives the call.
    match syscall::retry(|| unsafe { libc::unlink(pathname.as_ptr()) }) {
        Ok(_) => {
            trace!(?path, "unlinked file");
            Ok(())
        },
        Err(e) => match check_misuse(e) {
            ENOENT => Err(NotFoundError.into()),
            EACCES | EPERM | EROFS => Err(PermissionDeniedError.into()),
            e => Err(IOError(e).into()),
        },
    }
}

/// Returns whether anything exists at `path`. Paths that can't be represented as a C string never
/// exist.
pub fn file_exists<P: AsRef<OsStr>>(path: P) -> bool {
    match syscall::c_path(path.as_ref()) {
        // SAFETY: pathname is a valid, NUL terminated string that outlives the call.
        Ok(pathname) => unsafe { libc::access(pathname.as_ptr(), libc::F_OK) == 0 },
        Err(_) => false,
    }
}
