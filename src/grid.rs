//! Host placement-grid constants.
//!
//! The host application snaps generated items to a fixed placement grid; the
//! sampling step of a [`Border`](crate::border::Border) and the `BaseMaterial`
//! UV tiling are both expressed in terms of this grid.

use crate::float_types::Real;

/// Horizontal size of one placement-grid cell, in world units.
/// One grid cell also spans exactly one `BaseMaterial` UV tile.
pub const LENGTH: Real = 32.0;

/// Vertical placement step of the host grid, in world units.
pub const HEIGHT: Real = 8.0;

/// Express a world-space length in placement-grid cells.
pub fn to_grid_length(length: Real) -> Real {
    length / LENGTH
}
