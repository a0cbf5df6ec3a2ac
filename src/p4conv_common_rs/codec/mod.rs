pub mod core;
pub mod debug;
