//! Validation errors
//!
//! Every failure is detected before any generated output is touched and is
//! reported as a single descriptive message naming the offending border or
//! axis, with the numeric discrepancy where one applies.

use crate::float_types::Real;
use std::fmt::Display;

/// Edge of the surface patch a border is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderRole {
    East,
    West,
    North,
    South,
}

impl Display for BorderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorderRole::East => write!(f, "East"),
            BorderRole::West => write!(f, "West"),
            BorderRole::North => write!(f, "North"),
            BorderRole::South => write!(f, "South"),
        }
    }
}

/// Material slot of the generated mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSlot {
    Top,
    Bottom,
    Side,
}

impl Display for MaterialSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialSlot::Top => write!(f, "Top"),
            MaterialSlot::Bottom => write!(f, "Bottom"),
            MaterialSlot::Side => write!(f, "Side"),
        }
    }
}

/// Why an authored curve cannot be used as a border profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    #[error("curve is not 2D")]
    NotPlanar,
    #[error("curve must contain exactly one spline, found {0}")]
    SplineCount(usize),
    #[error("curve needs at least 2 anchor points, found {0}")]
    TooFewPoints(usize),
    #[error("curve anchors must have strictly increasing X (anchor {0} goes backwards)")]
    NonMonotonic(usize),
}

/// All the ways surface generation can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    #[error("{0} border is not set")]
    BorderNotSet(BorderRole),
    #[error("{role} border is invalid: {source}")]
    BorderInvalid {
        role: BorderRole,
        source: CurveError,
    },
    #[error("{0} material is not set")]
    MaterialNotSet(MaterialSlot),
    #[error("{0} and {1} borders have different length: {2}")]
    LengthMismatch(BorderRole, BorderRole, Real),
    #[error("borders cannot join in altitude: {0}")]
    AltitudeMismatch(Real),
}
