//! Surface generation: settings, the four-border connector, the regenerating
//! orchestrator and the batch sweep.

use crate::border::CurveData;
use crate::float_types::Real;

pub mod connector;
pub mod generator;
pub mod mesh;
pub mod sweep;

pub use connector::{GeneratedSurface, generate};
pub use generator::{Pivot, SurfaceGenerator};
pub use mesh::{
    BASE_MATERIAL_UV, Face, LIGHTMAP_UV, MATERIAL_BOTTOM, MATERIAL_SIDE, MATERIAL_TOP,
    SurfaceMesh, UvLayer,
};
pub use sweep::{
    BorderEntry, MaterialEntry, SurfaceExporter, SweepError, SweepReport, SweepSettings,
    run_sweep,
};

/// One border assignment: the authored curve plus whether it is flipped from
/// its default orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSetting {
    pub curve: CurveData,
    pub flip: bool,
}

impl BorderSetting {
    pub const fn new(curve: CurveData, flip: bool) -> Self {
        BorderSetting { curve, flip }
    }
}

/// Persistent generation parameters.
///
/// Owned by the orchestrator and passed by reference into the connector,
/// which never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSettings {
    /// Subdivisions per grid cell when an axis pair is flat and its opposing
    /// pair is congruent.
    pub subdivisions_flat: u32,
    /// Subdivisions per grid cell when an axis pair is flat but the opposing
    /// pair differs.
    pub subdivisions_semi_flat: u32,
    /// Subdivisions per grid cell when an axis pair is curved.
    pub subdivisions_curved: u32,
    /// De Casteljau cuts per span before a profile is sampled into a
    /// polyline; bounds the error of the endpoint-linear sampling.
    pub bezier_precision: u32,
    /// Extrusion height between the top and bottom sheets.
    pub height: Real,
    /// Lightmap island margin, in percent of a chart.
    pub lightmap_margin: Real,
    /// Preserve border end tangents when profiles are resized across the
    /// patch. Opposing borders must share end tangents for this to close.
    pub preserve_tangents: bool,
    /// Ease row/column blend factors through a smoothstep curve instead of
    /// interpolating linearly.
    pub ease_blend: bool,
    /// Run the role-swapped second blending pass and average both, instead
    /// of letting East/West drive alone.
    pub symmetric_blend: bool,

    pub east: Option<BorderSetting>,
    pub west: Option<BorderSetting>,
    pub north: Option<BorderSetting>,
    pub south: Option<BorderSetting>,

    pub top_material: Option<String>,
    pub bottom_material: Option<String>,
    pub side_material: Option<String>,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        SurfaceSettings {
            subdivisions_flat: 4,
            subdivisions_semi_flat: 8,
            subdivisions_curved: 32,
            bezier_precision: 128,
            height: 2.0,
            lightmap_margin: 10.0,
            preserve_tangents: true,
            ease_blend: false,
            symmetric_blend: false,
            east: None,
            west: None,
            north: None,
            south: None,
            top_material: None,
            bottom_material: None,
            side_material: None,
        }
    }
}
