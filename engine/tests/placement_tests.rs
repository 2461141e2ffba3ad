//! Placement Tests - Click Protocol and Support Rule
//!
//! Drives the placement state machine through the scenarios a user can hit
//! and checks the properties that must hold after every click.

use block_stacker_engine::game::builder::PlacementPhase;
use block_stacker_engine::game::{ClickOutcome, PlacementStateMachine, RejectReason};
use block_stacker_engine::world::{Cell, ClickPoint, GridBounds};

fn click(x: f64, y: f64, z: f64) -> ClickPoint {
    ClickPoint::new(x, y, z)
}

fn sorted(cells: &[(i32, i32, i32)]) -> Vec<Cell> {
    let mut cells: Vec<Cell> = cells.iter().map(|&c| c.into()).collect();
    cells.sort();
    cells
}

/// Small deterministic LCG so sequences are reproducible without extra crates.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self, lo: f64, hi: f64) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let unit = (self.0 >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_first_layer_accepted() {
    let mut stacker = PlacementStateMachine::default();
    let response = stacker.on_click(click(2.0, 1.0, 1.0));

    assert!(response.outcome.is_accepted());
    assert_eq!(response.occupied_cells, sorted(&[(2, 1, 1)]));
    assert_eq!(stacker.current_occupied_cells().sorted(), sorted(&[(2, 1, 1)]));
}

#[test]
fn test_floating_block_rejected() {
    let mut stacker = PlacementStateMachine::default();
    let response = stacker.on_click(click(2.0, 1.0, 2.0));

    assert_eq!(response.outcome.reason(), Some(RejectReason::Unsupported));
    assert_eq!(response.status, "clicked cell: (2, 1, 2) (unsupported — no block beneath)");
    assert!(stacker.current_occupied_cells().is_empty());
}

#[test]
fn test_stacking_on_supported_block() {
    let mut stacker = PlacementStateMachine::default();
    stacker.on_click(click(2.0, 1.0, 1.0));
    let response = stacker.on_click(click(2.0, 1.0, 2.0));

    assert!(response.outcome.is_accepted());
    assert_eq!(response.occupied_cells, sorted(&[(2, 1, 1), (2, 1, 2)]));
}

#[test]
fn test_ground_click_rejected_regardless_of_contents() {
    let mut stacker = PlacementStateMachine::default();
    for point in [click(0.0, 0.0, 0.0), click(0.0, 0.0, 1.0), click(0.0, 0.0, 0.0)] {
        let response = stacker.on_click(point);
        if point.z == 0.0 {
            assert_eq!(response.outcome.reason(), Some(RejectReason::GroundLevel));
            assert!(response.status.contains("ground level"));
        }
    }
    assert_eq!(stacker.current_occupied_cells().sorted(), sorted(&[(0, 0, 1)]));
}

#[test]
fn test_outside_lattice_rejected() {
    let mut stacker = PlacementStateMachine::new(GridBounds::new(-3, 3));
    let response = stacker.on_click(click(5.0, 5.0, 1.0));

    assert_eq!(
        response.outcome,
        ClickOutcome::Rejected {
            cell: Some(Cell::new(5, 5, 1)),
            reason: RejectReason::OutOfBounds
        }
    );
    assert!(response.status.contains("out of bounds"));
    assert!(stacker.current_occupied_cells().is_empty());
}

#[test]
fn test_negative_z_rejected_as_out_of_bounds() {
    let mut stacker = PlacementStateMachine::default();
    let response = stacker.on_click(click(0.0, 0.0, -2.0));
    assert_eq!(response.outcome.reason(), Some(RejectReason::OutOfBounds));
}

#[test]
fn test_above_ceiling_rejected_even_when_supported() {
    let mut stacker = PlacementStateMachine::new(GridBounds::new(-1, 2));
    assert!(stacker.on_click(click(1.0, 1.0, 1.0)).outcome.is_accepted());
    assert!(stacker.on_click(click(1.0, 1.0, 2.0)).outcome.is_accepted());
    let response = stacker.on_click(click(1.0, 1.0, 3.0));
    assert_eq!(response.outcome.reason(), Some(RejectReason::OutOfBounds));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_replacing_is_idempotent() {
    let mut stacker = PlacementStateMachine::default();
    stacker.on_click(click(-1.0, 2.0, 1.0));
    let before = stacker.current_occupied_cells().clone();

    let response = stacker.on_click(click(-1.2, 1.8, 0.7));
    assert_eq!(response.outcome.reason(), Some(RejectReason::AlreadyOccupied));
    assert!(response.status.contains("already occupied"));
    assert!(response.new_geometry().is_none());
    assert_eq!(stacker.current_occupied_cells(), &before);
}

#[test]
fn test_ground_never_placeable_anywhere() {
    let mut stacker = PlacementStateMachine::default();
    for x in -6..=6 {
        for y in -6..=6 {
            let response = stacker.on_click(click(x as f64 * 0.9, y as f64 * 1.1, 0.4));
            assert_eq!(response.outcome.reason(), Some(RejectReason::GroundLevel));
        }
    }
    assert!(stacker.current_occupied_cells().is_empty());
}

#[test]
fn test_support_invariant_holds_for_random_sequences() {
    for seed in 0..20u64 {
        let mut rng = Lcg(seed);
        let mut stacker = PlacementStateMachine::default();
        for _ in 0..400 {
            let before = stacker.current_occupied_cells().len();
            let point = click(
                rng.next_f64(-4.0, 4.0),
                rng.next_f64(-4.0, 4.0),
                rng.next_f64(-1.0, 4.6),
            );
            let response = stacker.on_click(point);

            let placed = stacker.current_occupied_cells();
            assert!(placed.is_supported(), "seed {seed}: {}", placed);
            let grew = placed.len() == before + 1;
            assert_eq!(grew, response.outcome.is_accepted());
            assert_eq!(response.occupied_cells, placed.sorted());
            assert_eq!(stacker.phase(), PlacementPhase::Idle);
        }
    }
}

#[test]
fn test_accepted_geometry_is_for_clicked_cell() {
    let mut stacker = PlacementStateMachine::default();
    let response = stacker.on_click(click(-2.6, 0.4, 1.4));
    let geometry = response.new_geometry().expect("accepted");
    assert_eq!(geometry.cell, Cell::new(-3, 0, 1));
    assert_eq!(geometry.edges.len(), 12);
    assert_eq!(geometry.triangles.len(), 12);
}

#[test]
fn test_independent_machines_do_not_share_state() {
    let mut a = PlacementStateMachine::default();
    let b = PlacementStateMachine::default();
    a.on_click(click(0.0, 0.0, 1.0));
    assert_eq!(a.current_occupied_cells().len(), 1);
    assert!(b.current_occupied_cells().is_empty());
}

#[test]
fn test_column_build_up() {
    let mut stacker = PlacementStateMachine::default();
    for z in 1..=3 {
        let response = stacker.on_click(click(1.0, -1.0, z as f64));
        assert!(response.outcome.is_accepted(), "z = {z}");
    }
    assert_eq!(
        stacker.listing(),
        "placed cells:\n(1, -1, 1)\n(1, -1, 2)\n(1, -1, 3)"
    );
}
