pub mod codec;
pub mod utils;
