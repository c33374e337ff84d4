//! The orchestrator: owns the settings and the generated objects, and
//! regenerates the surface in place on demand.

use crate::errors::GenerateError;
use crate::float_types::Real;
use crate::surface::connector;
use crate::surface::mesh::SurfaceMesh;
use crate::surface::SurfaceSettings;
use nalgebra::Point3;

/// A named anchor point on the generated surface, used by downstream
/// placement and snapping tooling.
///
/// Pivots are the only part of the result that keeps its identity across
/// regenerations: the same four objects are moved, never replaced, because
/// downstream tooling references them by identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    pub name: String,
    pub position: Point3<Real>,
}

/// Owns the generation parameters and the current mesh/pivot objects.
#[derive(Debug, Clone)]
pub struct SurfaceGenerator {
    pub settings: SurfaceSettings,
    mesh: Option<SurfaceMesh>,
    pivots: [Pivot; 4],
}

impl SurfaceGenerator {
    pub fn new(settings: SurfaceSettings) -> Self {
        let pivots = [0, 1, 2, 3].map(|index| Pivot {
            name: format!("Pivot_{index}"),
            position: Point3::origin(),
        });
        SurfaceGenerator {
            settings,
            mesh: None,
            pivots,
        }
    }

    /// Re-run the connector and swap in the new result.
    ///
    /// The previous mesh is replaced wholesale on success; on failure it is
    /// left untouched and the error describes the violated constraint.
    pub fn regenerate(&mut self) -> Result<(), GenerateError> {
        let generated = connector::generate(&self.settings)?;
        log::debug!(
            "regenerated surface: {} vertices, {} faces",
            generated.mesh.vertex_count(),
            generated.mesh.face_count()
        );
        for (pivot, position) in self.pivots.iter_mut().zip(generated.pivots) {
            pivot.position = position;
        }
        self.mesh = Some(generated.mesh);
        Ok(())
    }

    /// The most recently generated mesh, if any generation has succeeded.
    pub fn mesh(&self) -> Option<&SurfaceMesh> {
        self.mesh.as_ref()
    }

    /// The four corner pivots.
    pub fn pivots(&self) -> &[Pivot; 4] {
        &self.pivots
    }
}
