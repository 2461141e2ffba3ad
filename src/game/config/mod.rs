//! Config Module
//!
//! Start-up configuration for the block stacker.

pub mod stacker_config;

pub use stacker_config::{ConfigError, StackerConfig};
