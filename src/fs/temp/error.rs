use derive_more::{Display, Error, From, IsVariant};

use crate::fs::error::*;
use crate::fs::file::CloseError;
use crate::fs::ops::UnlinkError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum TempError {
    NotFound(NotFoundError),
    PermissionDenied(PermissionDeniedError),
    InvalidArgument(InvalidArgumentError),
    IO(IOError),
    ResourceExhausted(ResourceExhaustedError),
}

impl_into_fs_error!(TempError { NotFound, PermissionDenied, InvalidArgument, IO, ResourceExhausted });

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum TempCloseError {
    Close(CloseError),
    Unlink(UnlinkError),
}

impl_into_fs_error!(TempCloseError { Close, Unlink });
