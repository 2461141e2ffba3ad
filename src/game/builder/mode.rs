//! Placement State Machine
//!
//! The single authority over which cells are occupied. Each click runs
//! Idle -> Validating -> Accepted | Rejected -> Idle to completion before the
//! next one is taken; `on_click` borrows the machine mutably, so two
//! validations can never overlap.

use serde::Serialize;

use super::placement::{PlacementSet, RejectReason, check_placement};
use crate::game::config::{ConfigError, StackerConfig};
use crate::render::color::CubePalette;
use crate::render::cube::{CubeGeometry, build_cube_with_palette};
use crate::render::mesh::{Mesh, Vertex};
use crate::world::{Cell, ClickPoint, GridBounds, cell_from_point};

/// Status shown before the first click.
pub const IDLE_STATUS: &str = "Stack some blocks!";

/// Where the machine is in the click protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlacementPhase {
    Idle,
    Validating,
    Accepted,
    Rejected,
}

/// Result of evaluating one click.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ClickOutcome {
    /// The cell was placed; `geometry` is the new block only.
    Accepted { cell: Cell, geometry: CubeGeometry },
    /// Nothing changed. `cell` is `None` when the click was not a finite point.
    Rejected { cell: Option<Cell>, reason: RejectReason },
}

impl ClickOutcome {
    pub fn phase(&self) -> PlacementPhase {
        match self {
            ClickOutcome::Accepted { .. } => PlacementPhase::Accepted,
            ClickOutcome::Rejected { .. } => PlacementPhase::Rejected,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ClickOutcome::Accepted { .. })
    }

    pub fn geometry(&self) -> Option<&CubeGeometry> {
        match self {
            ClickOutcome::Accepted { geometry, .. } => Some(geometry),
            ClickOutcome::Rejected { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            ClickOutcome::Accepted { .. } => None,
            ClickOutcome::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// Everything the presenter needs after a click.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClickResponse {
    /// User-facing status line
    pub status: String,
    pub outcome: ClickOutcome,
    /// Occupied cells after the click, sorted
    pub occupied_cells: Vec<Cell>,
}

impl ClickResponse {
    /// Incremental geometry to append to the scene, if any.
    pub fn new_geometry(&self) -> Option<&CubeGeometry> {
        self.outcome.geometry()
    }
}

/// Owns the placed cells and runs the click protocol.
#[derive(Debug, Clone)]
pub struct PlacementStateMachine {
    bounds: GridBounds,
    palette: CubePalette,
    placed: PlacementSet,
    phase: PlacementPhase,
}

impl Default for PlacementStateMachine {
    fn default() -> Self {
        Self::new(GridBounds::default())
    }
}

impl PlacementStateMachine {
    pub fn new(bounds: GridBounds) -> Self {
        Self::with_palette(bounds, CubePalette::default())
    }

    pub fn with_palette(bounds: GridBounds, palette: CubePalette) -> Self {
        Self {
            bounds,
            palette,
            placed: PlacementSet::new(),
            phase: PlacementPhase::Idle,
        }
    }

    pub fn from_config(config: &StackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_palette(config.bounds, config.palette()?))
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn palette(&self) -> CubePalette {
        self.palette
    }

    /// Always `Idle` between clicks.
    pub fn phase(&self) -> PlacementPhase {
        self.phase
    }

    /// Read-only view of the placed cells.
    pub fn current_occupied_cells(&self) -> &PlacementSet {
        &self.placed
    }

    /// Evaluate one click. Only an accepted click mutates state.
    pub fn on_click(&mut self, point: ClickPoint) -> ClickResponse {
        debug_assert_eq!(self.phase, PlacementPhase::Idle);
        self.phase = PlacementPhase::Validating;

        let outcome = self.validate_and_apply(point);
        self.phase = outcome.phase();
        let status = match &outcome {
            ClickOutcome::Accepted { cell, .. } => format!("clicked cell: {cell}"),
            ClickOutcome::Rejected { cell: Some(cell), reason } => {
                format!("clicked cell: {cell} ({reason})")
            }
            ClickOutcome::Rejected { cell: None, reason } => {
                format!("clicked point ({}, {}, {}) ({reason})", point.x, point.y, point.z)
            }
        };
        log::debug!("[Placement] {:?}: {}", self.phase, status);

        let response = ClickResponse {
            status,
            outcome,
            occupied_cells: self.placed.sorted(),
        };
        self.phase = PlacementPhase::Idle;
        response
    }

    fn validate_and_apply(&mut self, point: ClickPoint) -> ClickOutcome {
        if !point.is_finite() {
            return ClickOutcome::Rejected {
                cell: None,
                reason: RejectReason::OutOfBounds,
            };
        }

        let cell = cell_from_point(point);
        if let Err(reason) = check_placement(cell, &self.bounds, &self.placed) {
            return ClickOutcome::Rejected {
                cell: Some(cell),
                reason,
            };
        }

        self.placed.insert(cell);
        log::info!("[Placement] placed {} ({} total)", cell, self.placed.len());
        ClickOutcome::Accepted {
            cell,
            geometry: build_cube_with_palette(cell, self.palette),
        }
    }

    /// Occupied-cell listing in the status-panel format.
    pub fn listing(&self) -> String {
        self.placed.to_string()
    }

    /// Geometry for every placed cell, for rebuilding the whole scene.
    pub fn scene_geometry(&self) -> Vec<CubeGeometry> {
        self.placed
            .sorted()
            .into_iter()
            .map(|cell| build_cube_with_palette(cell, self.palette))
            .collect()
    }

    /// One indexed triangle mesh for the whole scene, blocks in listing order.
    pub fn scene_mesh(&self) -> Mesh {
        let blocks = self.scene_geometry();
        let mut mesh = Mesh::with_capacity(blocks.len() * 24, blocks.len() * 36);
        for block in &blocks {
            mesh.merge(&block.to_mesh());
        }
        mesh
    }

    /// Wireframe line-list vertices for the whole scene.
    pub fn scene_edges(&self) -> Vec<Vertex> {
        self.scene_geometry()
            .iter()
            .flat_map(CubeGeometry::edge_line_list)
            .collect()
    }

    /// Remove every placed block.
    pub fn reset(&mut self) {
        log::info!("[Placement] reset ({} blocks cleared)", self.placed.len());
        self.placed.clear();
    }
}
