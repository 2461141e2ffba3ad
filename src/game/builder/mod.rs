//! Builder Module
//!
//! Click-driven block placement: the placed-cell set, its support rule, and
//! the state machine that applies clicks to it.

pub mod mode;
pub mod placement;

pub use mode::{ClickOutcome, ClickResponse, IDLE_STATUS, PlacementPhase, PlacementStateMachine};
pub use placement::{PlacementSet, RejectReason, check_placement};
