use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

use derive_more::{Display, Error, From, IsVariant};

use crate::fs::RawOsError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("no such file or directory")]
pub struct NotFoundError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file already exists")]
pub struct AlreadyExistsError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("permission denied")]
pub struct PermissionDeniedError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("invalid argument: {_0}")]
pub struct InvalidArgumentError(#[error(not(source))] pub &'static str);

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("no unused temporary file name found after {attempts} attempts")]
pub struct ResourceExhaustedError {
    pub attempts: u32,
}

/// A generic I/O failure, carrying the OS error code that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IOError(pub RawOsError);

impl IOError {
    pub const fn raw_os_error(&self) -> RawOsError {
        self.0
    }
}

impl Display for IOError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "error during I/O: {}", io::Error::from_raw_os_error(self.0))
    }
}

impl Error for IOError {}

/// The union of every failure this crate can report.
///
/// Each operation returns its own, narrower error enum. All of them convert into [`FsError`], so a
/// caller juggling several operations can use `?` with a single error type.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum FsError {
    NotFound(NotFoundError),
    AlreadyExists(AlreadyExistsError),
    PermissionDenied(PermissionDeniedError),
    InvalidArgument(InvalidArgumentError),
    IO(IOError),
    ResourceExhausted(ResourceExhaustedError),
}

impl FsError {
    /// Returns the OS error code, if this is a generic I/O failure.
    pub const fn raw_os_error(&self) -> Option<RawOsError> {
        match self {
            FsError::IO(e) => Some(e.raw_os_error()),
            _ => None,
        }
    }
}

/// Implements `From<$error> for FsError` by forwarding each listed variant.
macro_rules! impl_into_fs_error {
    ($error:ident { $($variant:ident),+ $(,)? }) => {
        impl From<$error> for $crate::fs::error::FsError {
            fn from(value: $error) -> Self {
                match value {
                    $($error::$variant(e) => e.into(),)+
                }
            }
        }
    };
}

pub(crate) use impl_into_fs_error;
