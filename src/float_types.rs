// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// General-purpose tolerance for floating comparisons.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// General-purpose tolerance for floating comparisons.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-6;

/// Tolerance under which two opposing borders are considered to have equal
/// length, and under which the four borders are considered to close in
/// altitude when walked around the patch boundary.
pub const JOIN_EPSILON: Real = 1e-3;

/// Tolerance used by flatness checks and by the fixed-step sampling walk.
pub const SAMPLE_EPSILON: Real = 1e-4;
