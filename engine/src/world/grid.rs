//! Grid Model
//!
//! The discrete lattice that blocks are stacked in, and the mapping from a
//! continuous pick point to the cell it addresses.
//!
//! ## Coordinate System
//! - x, y: horizontal lattice axes, bounded by `[min_xyz, max_xyz]`
//! - z: vertical stacking axis, bounded by `[0, max_xyz]`
//! - z = 0 is the ground plane. It is part of the lattice (markers are drawn
//!   there) but never occupiable.
//!
//! ## Rounding
//! Pick points are rounded per component with round-half-away-from-zero
//! (`f64::round`): `0.5 -> 1`, `-0.5 -> -1`, `2.5 -> 3`. The cast to `i32`
//! saturates, so huge or non-finite input still yields a cell (NaN maps to 0).

use std::fmt;

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

/// Default lower bound for x and y.
pub const DEFAULT_MIN_XYZ: i32 = -3;
/// Default upper bound for x, y and z.
pub const DEFAULT_MAX_XYZ: i32 = 3;
/// Largest magnitude a configured bound may have.
pub const MAX_BOUND_MAGNITUDE: i32 = 1024;

/// One unit-cube slot in the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell directly beneath this one.
    pub const fn below(self) -> Self {
        Self::new(self.x, self.y, self.z - 1)
    }

    pub fn as_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<IVec3> for Cell {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<(i32, i32, i32)> for Cell {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A continuous 3D coordinate reported by the rendering surface on click.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClickPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ClickPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for ClickPoint {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Map a pick point to the cell it addresses (round-half-away-from-zero).
pub fn cell_from_point(point: ClickPoint) -> Cell {
    let rounded = point.as_dvec3().round();
    Cell::new(rounded.x as i32, rounded.y as i32, rounded.z as i32)
}

/// Lattice bounds.
///
/// x and y share the range `[min_xyz, max_xyz]`; z runs `[0, max_xyz]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridBounds {
    pub min_xyz: i32,
    pub max_xyz: i32,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            min_xyz: DEFAULT_MIN_XYZ,
            max_xyz: DEFAULT_MAX_XYZ,
        }
    }
}

impl GridBounds {
    pub const fn new(min_xyz: i32, max_xyz: i32) -> Self {
        Self { min_xyz, max_xyz }
    }

    /// Whether `cell` lies inside the lattice (ground plane included).
    pub fn in_bounds(&self, cell: Cell) -> bool {
        let horizontal = self.min_xyz..=self.max_xyz;
        horizontal.contains(&cell.x)
            && horizontal.contains(&cell.y)
            && (0..=self.max_xyz).contains(&cell.z)
    }

    /// Whether `min_xyz <= 0 < max_xyz` and both bounds are within
    /// [`MAX_BOUND_MAGNITUDE`].
    pub fn is_valid(&self) -> bool {
        (-MAX_BOUND_MAGNITUDE..=0).contains(&self.min_xyz)
            && (1..=MAX_BOUND_MAGNITUDE).contains(&self.max_xyz)
    }

    /// Half-length of the axis lines drawn through the origin.
    pub fn axis_extent(&self) -> i64 {
        let magnitude = self.min_xyz.unsigned_abs().max(self.max_xyz.unsigned_abs());
        i64::from(magnitude) + 1
    }

    /// Number of candidate lattice points, saturating at `usize::MAX`.
    pub fn lattice_len(&self) -> usize {
        let span = (i64::from(self.max_xyz) - i64::from(self.min_xyz) + 1).max(0) as u64;
        let height = (i64::from(self.max_xyz) + 1).max(0) as u64;
        let len = span.saturating_mul(span).saturating_mul(height);
        usize::try_from(len).unwrap_or(usize::MAX)
    }

    /// Every candidate lattice point, x-major then y then z.
    ///
    /// The presenter draws one click marker per point.
    pub fn lattice_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (min, max) = (self.min_xyz, self.max_xyz);
        (min..=max).flat_map(move |x| {
            (min..=max).flat_map(move |y| (0..=max).map(move |z| Cell::new(x, y, z)))
        })
    }
}
