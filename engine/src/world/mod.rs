//! World Module
//!
//! The block lattice: cells, pick points and bounds.

pub mod grid;

pub use grid::{
    Cell, ClickPoint, DEFAULT_MAX_XYZ, DEFAULT_MIN_XYZ, GridBounds, MAX_BOUND_MAGNITUDE,
    cell_from_point,
};
