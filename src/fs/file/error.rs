use derive_more::{Display, Error, From, IsVariant};
use libc::{EACCES, EEXIST, EINVAL, ENOENT, EPERM, EROFS};

use crate::fs::RawOsError;
use crate::fs::error::*;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum OpenError {
    NotFound(NotFoundError),
    AlreadyExists(AlreadyExistsError),
    PermissionDenied(PermissionDeniedError),
    InvalidArgument(InvalidArgumentError),
    IO(IOError),
}

impl OpenError {
    pub(crate) fn interpret_raw_error(error: RawOsError) -> OpenError {
        match error {
            ENOENT =>                NotFoundError.into(),
            EEXIST =>                AlreadyExistsError.into(),
            EACCES | EPERM | EROFS => PermissionDeniedError.into(),
            EINVAL =>                InvalidArgumentError("rejected by the operating system").into(),
            e =>                     IOError(e).into(),
        }
    }
}

impl_into_fs_error!(OpenError { NotFound, AlreadyExists, PermissionDenied, InvalidArgument, IO });

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum WriteError {
    InvalidArgument(InvalidArgumentError),
    IO(IOError),
}

impl_into_fs_error!(WriteError { InvalidArgument, IO });

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum ReadError {
    InvalidArgument(InvalidArgumentError),
    IO(IOError),
}

impl_into_fs_error!(ReadError { InvalidArgument, IO });

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum CloseError {
    IO(IOError),
}

impl_into_fs_error!(CloseError { IO });

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum SyncError {
    IO(IOError),
}

impl_into_fs_error!(SyncError { IO });
