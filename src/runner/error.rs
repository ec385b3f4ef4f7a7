use std::io;

use derive_more::{Display, Error, From, IsVariant};
use libc::{EACCES, ENOENT, EPERM};

use crate::fs::error::{IOError, NotFoundError, PermissionDeniedError};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("child process terminated by signal {signal}")]
pub struct SignaledError {
    pub signal: i32,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum RunError {
    NotFound(NotFoundError),
    PermissionDenied(PermissionDeniedError),
    IO(IOError),
    Signaled(SignaledError),
}

impl From<io::Error> for RunError {
    fn from(value: io::Error) -> Self {
        match value.raw_os_error() {
            Some(ENOENT) => NotFoundError.into(),
            Some(EACCES | EPERM) => PermissionDeniedError.into(),
            Some(e) => IOError(e).into(),
            None => match value.kind() {
                io::ErrorKind::NotFound => NotFoundError.into(),
                io::ErrorKind::PermissionDenied => PermissionDeniedError.into(),
                _ => IOError(libc::EIO).into(),
            },
        }
    }
}
