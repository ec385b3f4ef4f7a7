#![cfg(unix)]

pub mod error;
pub mod file;
pub mod panic;
pub mod path;
pub mod temp;

mod fd;
mod ops;
mod syscall;

pub use error::FsError;
pub use file::{File, FileMode};
pub use ops::*;
pub use temp::{TempFile, TempOptions};

/// The raw error code reported by the OS, as found in `errno`.
pub type RawOsError = i32;
