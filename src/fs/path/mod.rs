mod join;
mod temp_name;

pub use join::*;
pub use temp_name::*;
