//! Block Placement
//!
//! The set of placed cells and the gravity rule that guards it: a block above
//! the first layer must sit on another block.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::world::{Cell, GridBounds};

/// Why a click did not place a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RejectReason {
    #[error("ground level is not placeable")]
    GroundLevel,
    #[error("out of bounds")]
    OutOfBounds,
    #[error("unsupported — no block beneath")]
    Unsupported,
    #[error("already occupied")]
    AlreadyOccupied,
}

/// The authoritative set of placed cells.
///
/// Invariant: every cell with `z >= 2` has its cell below in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementSet {
    cells: HashSet<Cell>,
}

impl PlacementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Cells in ascending `(x, y, z)` order.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Whether the support invariant holds for every placed cell.
    pub fn is_supported(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.z < 2 || self.cells.contains(&cell.below()))
    }

    /// Only the state machine's accept path may insert.
    pub(crate) fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}

impl fmt::Display for PlacementSet {
    /// `placed cells: none`, or one cell per line after a header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "placed cells: none");
        }
        write!(f, "placed cells:")?;
        for cell in self.sorted() {
            write!(f, "\n{cell}")?;
        }
        Ok(())
    }
}

/// Check whether `cell` may be placed, in rule order.
///
/// Ground comes first so any click on z = 0 reports the ground rule even when
/// x or y is also outside the lattice.
pub fn check_placement(
    cell: Cell,
    bounds: &GridBounds,
    placed: &PlacementSet,
) -> Result<(), RejectReason> {
    if cell.z == 0 {
        return Err(RejectReason::GroundLevel);
    }
    if !bounds.in_bounds(cell) {
        return Err(RejectReason::OutOfBounds);
    }
    if cell.z >= 2 && !placed.contains(cell.below()) {
        return Err(RejectReason::Unsupported);
    }
    if placed.contains(cell) {
        return Err(RejectReason::AlreadyOccupied);
    }
    Ok(())
}
