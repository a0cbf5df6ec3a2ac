pub mod debug_logger;
