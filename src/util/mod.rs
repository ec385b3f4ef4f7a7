pub mod panic;
pub mod test;
