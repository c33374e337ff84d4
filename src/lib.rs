//! Blend four independently authored 2D **Bezier border profiles** into a single
//! consistent, extruded quad-mesh surface patch.
//!
//! A [`Border`](border::Border) is a C0-continuous chain of cubic Bezier segments
//! running monotonically along its local X axis. Four of them, assigned to the
//! East/West/North/South edges of a patch, are validated for loop closure and then
//! blended into an `m x n` vertex grid with a matching bottom grid and four side
//! walls, per-face material slots, four corner pivots, and two UV channels
//! (`BaseMaterial` tiling and a margin-packed `Lightmap` atlas).
//!
//! The host application supplies raw curve control points ([`CurveData`](border::CurveData))
//! and receives a [`SurfaceMesh`](surface::SurfaceMesh); all persistence and export
//! stays on the host side.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod border;
pub mod curve;
pub mod errors;
pub mod float_types;
pub mod grid;
pub mod surface;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use border::{Border, CurveData};
pub use curve::CubicBezier;
pub use errors::{BorderRole, CurveError, GenerateError};
pub use surface::{SurfaceGenerator, SurfaceMesh, SurfaceSettings};
