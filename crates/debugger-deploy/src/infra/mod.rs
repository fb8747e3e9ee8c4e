//! Infrastructure adapters for paths, platform defaults, config, and logging.

pub mod config;
pub mod logging;
pub mod paths;
pub mod platform;
