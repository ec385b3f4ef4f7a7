use std::error::Error;

use derive_more::{Display, Error};

/// Errors that indicate a programming mistake rather than an expected failure. These are never
/// returned, only raised.
pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub struct BadFdPanic;
impl Panic for BadFdPanic {}

#[derive(Debug, Display, Error)]
#[display("pointer exceeded stack space")]
pub struct BadStackAddrPanic;
impl Panic for BadStackAddrPanic {}

#[derive(Debug, Display, Error)]
#[display("file handle closed twice")]
pub struct DoubleClosePanic;
impl Panic for DoubleClosePanic {}

#[derive(Debug, Display, Error)]
#[display("operation on a closed or empty file handle")]
pub struct ClosedFilePanic;
impl Panic for ClosedFilePanic {}
