//! The surface connector: blends four border profiles into an extruded
//! quad-mesh patch.
//!
//! East and West borders run along the patch's X axis and carry the altitude
//! profile of the `y = 0` and `y = width` edges; North and South run along Y
//! and bound the far and near rows. After validating that the four profiles
//! close into a loop, East/West samples drive the rows: North and South are
//! resized to span the local altitude gap at each row, re-sampled, and
//! blended per column. The top grid is duplicated at `-height` for the bottom
//! sheet and the boundary rows are stitched into four side walls.

use crate::border::Border;
use crate::errors::{BorderRole, GenerateError, MaterialSlot};
use crate::float_types::{JOIN_EPSILON, Real};
use crate::grid;
use crate::surface::mesh::{
    BASE_MATERIAL_UV, Face, LIGHTMAP_UV, MATERIAL_BOTTOM, MATERIAL_SIDE, MATERIAL_TOP,
    SurfaceMesh, UvLayer,
};
use crate::surface::{BorderSetting, SurfaceSettings};
use nalgebra::{Point2, Point3};

/// A finished generation result: the mesh plus the four top-corner pivot
/// positions, in East/West/North/South corner order
/// (`(0,0)`, `(length,0)`, `(length,width)`, `(0,width)`).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSurface {
    pub mesh: SurfaceMesh,
    pub pivots: [Point3<Real>; 4],
}

/// Where a face sits on the patch; drives material, shading and both UV
/// projections. Classification is positional, derived from the face emission
/// order of the topology pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FaceClass {
    Top,
    Bottom,
    EastWall,
    WestWall,
    NorthWall,
    SouthWall,
}

/// Run the full connector pipeline against the given settings.
///
/// All validation happens before any geometry is produced; on error the
/// caller's previous mesh stays untouched.
pub fn generate(settings: &SurfaceSettings) -> Result<GeneratedSurface, GenerateError> {
    let east = role_border(&settings.east, BorderRole::East)?;
    let west = role_border(&settings.west, BorderRole::West)?;
    let north = role_border(&settings.north, BorderRole::North)?;
    let south = role_border(&settings.south, BorderRole::South)?;

    let materials = vec![
        required_material(&settings.top_material, MaterialSlot::Top)?,
        required_material(&settings.bottom_material, MaterialSlot::Bottom)?,
        required_material(&settings.side_material, MaterialSlot::Side)?,
    ];

    // Opposing borders must match in length, and walking the four corners
    // around the boundary must return to the starting altitude.
    let x_diff = (east.length() - west.length()).abs();
    if x_diff > JOIN_EPSILON {
        return Err(GenerateError::LengthMismatch(
            BorderRole::East,
            BorderRole::West,
            x_diff,
        ));
    }
    let y_diff = (north.length() - south.length()).abs();
    if y_diff > JOIN_EPSILON {
        return Err(GenerateError::LengthMismatch(
            BorderRole::North,
            BorderRole::South,
            y_diff,
        ));
    }
    let z_diff = (east.height() - west.height() + north.height() - south.height()).abs();
    if z_diff > JOIN_EPSILON {
        return Err(GenerateError::AltitudeMismatch(z_diff));
    }

    let ew_subdivisions = axis_subdivisions(&east, &west, &north, &south, settings);
    let ns_subdivisions = axis_subdivisions(&north, &south, &east, &west, settings);
    let precision = settings.bezier_precision;

    let east_points = east.sample(ew_subdivisions, precision);
    let west_points = west.sample(ew_subdivisions, precision);
    let m = east_points.len();
    let north_points = north.sample(ns_subdivisions, precision);
    let south_points = south.sample(ns_subdivisions, precision);
    let n = north_points.len();

    let keep_tangents = settings.preserve_tangents;

    // Blend pass: one top row and one bottom row of n points per East sample.
    // Row i occupies vertex indices [2ni, 2ni + 2n), top sheet first.
    let mut vertices: Vec<Point3<Real>> = Vec::with_capacity(2 * n * m);
    for (i, east_point) in east_points.iter().enumerate() {
        let west_point = west_points[i];
        let blend = blend_factor(i as Real / (m - 1) as Real, settings.ease_blend);
        let local_height = west_point.y + south.height() - east_point.y;
        let north_row = north
            .resized(local_height, keep_tangents)
            .sample(ns_subdivisions, precision);
        let south_row = south
            .resized(local_height, keep_tangents)
            .sample(ns_subdivisions, precision);

        for sheet in [settings.height, 0.0] {
            for (north_point, south_point) in north_row.iter().zip(&south_row) {
                vertices.push(Point3::new(
                    east_point.x,
                    blend * north_point.x + (1.0 - blend) * south_point.x,
                    blend * north_point.y + (1.0 - blend) * south_point.y + east_point.y + sheet,
                ));
            }
        }
    }

    // Optional second pass with the roles swapped (North/South driving,
    // East/West resized), averaged into the altitudes. The X/Y grid is
    // identical by construction, so only Z participates.
    if settings.symmetric_blend {
        let mut altitudes: Vec<Real> = vec![0.0; m * n];
        for (j, north_point) in north_points.iter().enumerate() {
            let south_point = south_points[j];
            let blend = blend_factor(j as Real / (n - 1) as Real, settings.ease_blend);
            let local_height = north_point.y + east.height() - south_point.y;
            let east_row = east
                .resized(local_height, keep_tangents)
                .sample(ew_subdivisions, precision);
            let west_row = west
                .resized(local_height, keep_tangents)
                .sample(ew_subdivisions, precision);
            for i in 0..m {
                altitudes[i * n + j] =
                    blend * west_row[i].y + (1.0 - blend) * east_row[i].y + south_point.y;
            }
        }
        for i in 0..m {
            for j in 0..n {
                let top = i * 2 * n + j;
                let bottom = top + n;
                let averaged = 0.5 * (vertices[bottom].z + altitudes[i * n + j]);
                vertices[bottom].z = averaged;
                vertices[top].z = averaged + settings.height;
            }
        }
    }

    // Offset Z so the lowest structural corner sits at 0.
    let corners = [
        0.0,
        east.height(),
        east.height() + north.height(),
        south.height(),
    ];
    let lowest = corners.iter().copied().fold(Real::INFINITY, Real::min);
    for vertex in vertices.iter_mut() {
        vertex.z -= lowest;
    }

    let quads = build_quads(m, n);
    let (faces, uv_layers) = classify_faces(&quads, &vertices, m, n, &east, &north, settings);

    let pivots = [
        vertices[0],
        vertices[2 * n * (m - 1)],
        vertices[2 * n * (m - 1) + n - 1],
        vertices[n - 1],
    ];

    Ok(GeneratedSurface {
        mesh: SurfaceMesh {
            vertices,
            faces,
            materials,
            uv_layers,
        },
        pivots,
    })
}

fn role_border(
    setting: &Option<BorderSetting>,
    role: BorderRole,
) -> Result<Border, GenerateError> {
    let setting = setting
        .as_ref()
        .ok_or(GenerateError::BorderNotSet(role))?;
    Border::from_curve(&setting.curve, setting.flip)
        .map_err(|source| GenerateError::BorderInvalid { role, source })
}

fn required_material(
    material: &Option<String>,
    slot: MaterialSlot,
) -> Result<String, GenerateError> {
    material
        .clone()
        .ok_or(GenerateError::MaterialNotSet(slot))
}

/// Density for one axis. A flat pair samples coarsely only when the opposing
/// pair is congruent (same curve, same flip); a flat pair facing differing
/// opposing profiles still needs intermediate resolution for the blended
/// transition, and any curved pair gets the full curved density.
fn axis_subdivisions(
    a: &Border,
    b: &Border,
    opposing_a: &Border,
    opposing_b: &Border,
    settings: &SurfaceSettings,
) -> u32 {
    if a.is_flat() && b.is_flat() {
        if opposing_a == opposing_b {
            settings.subdivisions_flat
        } else {
            settings.subdivisions_semi_flat
        }
    } else {
        settings.subdivisions_curved
    }
}

fn blend_factor(t: Real, ease: bool) -> Real {
    if ease { t * t * (3.0 - 2.0 * t) } else { t }
}

/// Connect the interleaved row layout into quads with outward-consistent
/// winding: East wall at the first row, top/bottom strips plus one South and
/// one North wall quad per interior step, West wall at the last row. Face
/// emission order is load-bearing: classification and the UV passes derive
/// a face's position on the patch from its index.
fn build_quads(m: usize, n: usize) -> Vec<[usize; 4]> {
    let row = 2 * n;
    let mut quads = Vec::with_capacity(2 * (m - 1) * (n - 1) + 2 * (m - 1) + 2 * (n - 1));
    for i in 0..m {
        if i == 0 {
            for j in 0..n - 1 {
                quads.push([j, j + 1, j + n + 1, j + n]);
            }
        }
        if i != 0 {
            let prev = (i - 1) * row;
            let curr = i * row;
            for j in 0..n - 1 {
                quads.push([prev + j, curr + j, curr + j + 1, prev + j + 1]);
            }
            for j in 0..n - 1 {
                quads.push([prev + n + j, prev + n + j + 1, curr + n + j + 1, curr + n + j]);
            }
            quads.push([prev, prev + n, curr + n, curr]);
            quads.push([prev + n + n - 1, prev + n - 1, curr + n - 1, curr + n + n - 1]);
        }
        if i == m - 1 {
            let curr = i * row;
            for j in 0..n - 1 {
                quads.push([curr + j, curr + n + j, curr + n + j + 1, curr + j + 1]);
            }
        }
    }
    quads
}

fn face_class(f: usize, m: usize, n: usize) -> FaceClass {
    let period = 2 * (n - 1) + 2;
    if f < n - 1 {
        return FaceClass::EastWall;
    }
    if f >= (n - 1) + period * (m - 1) {
        return FaceClass::WestWall;
    }
    let r = (f - (n - 1)) % period;
    if r < n - 1 {
        FaceClass::Top
    } else if r < 2 * (n - 1) {
        FaceClass::Bottom
    } else if r > 2 * (n - 1) {
        FaceClass::NorthWall
    } else {
        FaceClass::SouthWall
    }
}

/// Assign material slot, shading and both UV channels per face.
///
/// `BaseMaterial` is a plain tiling projection: one placement-grid cell spans
/// one UV tile. Floor and ceiling project their XY footprint; walls project
/// their run axis against a two-band Z (0 or the extrusion height, picked by
/// which sheet the wall vertex belongs to) so wall texturing lines up with
/// the floor tiling.
///
/// `Lightmap` packs the six face groups into fixed charts of the unit square:
/// top `[0,.5]x[0,.5]`, bottom `[0,.5]x[.5,1]`, East `[.5,.75]x[.5,1]`,
/// West `[.75,1]x[.5,1]`, North `[.5,.75]x[0,.5]`, South `[.75,1]x[0,.5]`,
/// each inset by the configured margin on both edges to prevent bleed.
fn classify_faces(
    quads: &[[usize; 4]],
    vertices: &[Point3<Real>],
    m: usize,
    n: usize,
    east: &Border,
    north: &Border,
    settings: &SurfaceSettings,
) -> (Vec<Face>, Vec<UvLayer>) {
    let margin = settings.lightmap_margin / 100.0 * 0.25 / 2.0;
    let span = 0.5 - 2.0 * margin;
    let east_length = east.length();
    let north_length = north.length();
    let top_sheet = |id: usize| id % (2 * n) < n;

    let mut faces = Vec::with_capacity(quads.len());
    let mut base_uvs = Vec::with_capacity(quads.len());
    let mut lightmap_uvs = Vec::with_capacity(quads.len());

    for (f, quad) in quads.iter().enumerate() {
        let class = face_class(f, m, n);
        let (material, smooth) = match class {
            FaceClass::Top => (MATERIAL_TOP, true),
            FaceClass::Bottom => (MATERIAL_BOTTOM, true),
            _ => (MATERIAL_SIDE, false),
        };

        let mut base = Vec::with_capacity(4);
        let mut lightmap = Vec::with_capacity(4);
        for &id in quad.iter() {
            let vertex = vertices[id];
            let wall_band = if top_sheet(id) { settings.height } else { 0.0 };

            base.push(match class {
                FaceClass::Top | FaceClass::Bottom => {
                    Point2::new(vertex.x / grid::LENGTH, vertex.y / grid::LENGTH)
                },
                FaceClass::NorthWall | FaceClass::SouthWall => {
                    Point2::new(vertex.x / grid::LENGTH, wall_band / grid::LENGTH)
                },
                FaceClass::EastWall | FaceClass::WestWall => {
                    Point2::new(vertex.y / grid::LENGTH, wall_band / grid::LENGTH)
                },
            });

            lightmap.push(match class {
                FaceClass::Top => Point2::new(
                    margin + vertex.x / east_length * span,
                    margin + vertex.y / north_length * span,
                ),
                FaceClass::Bottom => Point2::new(
                    margin + vertex.x / east_length * span,
                    0.5 + margin + vertex.y / north_length * span,
                ),
                FaceClass::EastWall => {
                    let mut u = 0.5 + margin;
                    if !top_sheet(id) {
                        u += 0.25 - 2.0 * margin;
                    }
                    Point2::new(u, 0.5 + margin + vertex.y / north_length * span)
                },
                FaceClass::WestWall => {
                    let mut u = 0.75 + margin;
                    if !top_sheet(id) {
                        u += 0.25 - 2.0 * margin;
                    }
                    Point2::new(u, 0.5 + margin + vertex.y / north_length * span)
                },
                FaceClass::NorthWall => {
                    let mut u = 0.5 + margin;
                    if !top_sheet(id) {
                        u += 0.25 - 2.0 * margin;
                    }
                    Point2::new(u, margin + vertex.x / east_length * span)
                },
                FaceClass::SouthWall => {
                    let mut u = 0.75 + margin;
                    if top_sheet(id) {
                        u += 0.25 - 2.0 * margin;
                    }
                    Point2::new(u, margin + vertex.x / east_length * span)
                },
            });
        }

        faces.push(Face {
            indices: quad.to_vec(),
            material,
            smooth,
        });
        base_uvs.push(base);
        lightmap_uvs.push(lightmap);
    }

    let uv_layers = vec![
        UvLayer {
            name: BASE_MATERIAL_UV.to_string(),
            faces: base_uvs,
        },
        UvLayer {
            name: LIGHTMAP_UV.to_string(),
            faces: lightmap_uvs,
        },
    ];
    (faces, uv_layers)
}
