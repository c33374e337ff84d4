//! Generated mesh output model.
//!
//! A [`SurfaceMesh`] is the full result handed back across the output
//! boundary: a vertex buffer, per-face index/material/shading data and two
//! named per-corner UV layers. It is rebuilt wholesale on every generation;
//! nothing edits a previous mesh in place.

use crate::float_types::Real;
use hashbrown::HashSet;
use nalgebra::{Point2, Point3};

/// Material slot index of top-surface faces.
pub const MATERIAL_TOP: usize = 0;
/// Material slot index of bottom-surface faces.
pub const MATERIAL_BOTTOM: usize = 1;
/// Material slot index of the four side walls.
pub const MATERIAL_SIDE: usize = 2;

/// Name of the tiled base-material UV layer.
pub const BASE_MATERIAL_UV: &str = "BaseMaterial";
/// Name of the margin-packed lightmap UV layer.
pub const LIGHTMAP_UV: &str = "Lightmap";

/// One face of the generated mesh: an index loop with consistent outward
/// winding, a material slot and a smooth-shading flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<usize>,
    pub material: usize,
    pub smooth: bool,
}

/// A named UV channel mapping `(face, corner)` to a 2D coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct UvLayer {
    pub name: String,
    /// Per-corner UVs for each face, parallel to the mesh face list.
    pub faces: Vec<Vec<Point2<Real>>>,
}

/// The generated surface mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    pub vertices: Vec<Point3<Real>>,
    pub faces: Vec<Face>,
    /// Host material names, indexed by [`Face::material`].
    pub materials: Vec<String>,
    pub uv_layers: Vec<UvLayer>,
}

impl SurfaceMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of unique undirected edges across all face loops.
    pub fn edge_count(&self) -> usize {
        let mut edges: HashSet<(usize, usize)> = HashSet::new();
        for face in &self.faces {
            for (corner, &a) in face.indices.iter().enumerate() {
                let b = face.indices[(corner + 1) % face.indices.len()];
                edges.insert((a.min(b), a.max(b)));
            }
        }
        edges.len()
    }

    /// Look up a UV layer by name.
    pub fn uv_layer(&self, name: &str) -> Option<&UvLayer> {
        self.uv_layers.iter().find(|layer| layer.name == name)
    }
}
