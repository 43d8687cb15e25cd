pub mod config;
pub mod panic_hook;
pub mod tracing;

pub use config::Config;
