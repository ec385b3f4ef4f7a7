mod error;
mod options;
mod temp_file;
mod tests;

pub use error::*;
pub use options::*;
pub use temp_file::*;
