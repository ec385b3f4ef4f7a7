mod error;
mod file;
mod mode;

pub use error::*;
pub use file::*;
pub use mode::*;
