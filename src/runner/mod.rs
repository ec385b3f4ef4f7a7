#![cfg(unix)]

mod error;
mod process;

pub use error::*;
pub use process::*;
