//! Block Stacker Engine Library
//!
//! Click a point in a 3D lattice, place a unit cube there if something holds
//! it up. The library is the interaction core only; windowing and drawing
//! belong to whatever presenter hosts it.
//!
//! # Modules
//!
//! - [`world`] - Lattice cells, pick points and bounds
//! - [`render`] - Cube geometry (edges, faces, GPU meshes) for placed blocks
//! - [`game`] - Placement state machine, configuration and click scripts
//!
//! # Example
//!
//! ```
//! use block_stacker_engine::game::PlacementStateMachine;
//! use block_stacker_engine::world::{ClickPoint, GridBounds};
//!
//! let mut stacker = PlacementStateMachine::new(GridBounds::default());
//!
//! let first = stacker.on_click(ClickPoint::new(2.0, 1.0, 1.0));
//! assert!(first.outcome.is_accepted());
//!
//! // Append only the new block to the scene
//! if let Some(geometry) = first.new_geometry() {
//!     assert_eq!(geometry.triangles.len(), 12);
//! }
//!
//! let floating = stacker.on_click(ClickPoint::new(0.0, 0.0, 2.0));
//! assert!(!floating.outcome.is_accepted());
//! ```

pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use game::{ClickOutcome, ClickResponse, PlacementSet, PlacementStateMachine, RejectReason};
pub use render::{CubeGeometry, build_cube};
pub use world::{Cell, ClickPoint, GridBounds, cell_from_point};
