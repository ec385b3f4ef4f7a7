use std::ffi::{CString, OsStr};
use std::io;
use std::os::unix::ffi::OsStrExt;

use libc::{EBADF, EFAULT, EINTR};

use crate::fs::RawOsError;
use crate::fs::error::InvalidArgumentError;
use crate::fs::panic::{BadFdPanic, BadStackAddrPanic, Panic};

pub(crate) fn err_no() -> RawOsError {
    io::Error::last_os_error().raw_os_error().unwrap_or(libc::EIO)
}

pub(crate) trait IsMinusOne: Copy {
    fn is_minus_one(self) -> bool;
}

macro_rules! impl_is_minus_one {
    ($($t:ty),+) => {
        $(impl IsMinusOne for $t {
            fn is_minus_one(self) -> bool {
                self == -1
            }
        })+
    };
}

impl_is_minus_one!(i32, isize);

/// Runs a raw syscall until it stops failing with `EINTR`, returning `errno` on any other failure.
pub(crate) fn retry<T: IsMinusOne, F: FnMut() -> T>(mut call: F) -> Result<T, RawOsError> {
    loop {
        let ret = call();
        if !ret.is_minus_one() {
            return Ok(ret);
        }
        match err_no() {
            EINTR => continue,
            e => return Err(e),
        }
    }
}

/// Panics for the error codes that can only come from misuse of a descriptor or buffer, passing
/// every other code through.
pub(crate) fn check_misuse(e: RawOsError) -> RawOsError {
    match e {
        EBADF => BadFdPanic.panic(),
        EFAULT => BadStackAddrPanic.panic(),
        e => e,
    }
}

pub(crate) fn c_path(path: &OsStr) -> Result<CString, InvalidArgumentError> {
    CString::new(path.as_bytes()).map_err(|_| InvalidArgumentError("path contains a NUL byte"))
}
