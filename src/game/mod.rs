//! Game Module
//!
//! Block stacking on top of the engine's lattice and geometry.

pub mod builder;
pub mod config;
pub mod replay;

pub use builder::{ClickOutcome, ClickResponse, PlacementSet, PlacementStateMachine, RejectReason};
pub use config::{ConfigError, StackerConfig};
pub use replay::{ReplayError, parse_click_script};
