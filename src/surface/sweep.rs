//! Batch sweep: generate and export every closable combination of a border
//! library against a material list.
//!
//! The sweep walks the Cartesian product `materials x borders^4`, picking the
//! four borders in boundary-chain order (East, North, West, South; the West
//! and South picks are flip-negated when assigned, since the chain traverses
//! them backwards). Combinations whose chain cannot geometrically close are
//! skipped up front with the same tolerances the connector itself enforces —
//! a skip is expected pruning, not an error. Each surviving combination is
//! generated and handed to the injected exporter immediately.

use crate::border::{Border, CurveData};
use crate::errors::{BorderRole, GenerateError};
use crate::float_types::JOIN_EPSILON;
use crate::surface::connector::{self, GeneratedSurface};
use crate::surface::{BorderSetting, SurfaceSettings};

/// One entry of the border library.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderEntry {
    pub name: String,
    pub curve: CurveData,
    pub flip: bool,
}

/// One entry of the material list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialEntry {
    /// Host material name, assigned as the top material of each variant.
    pub material: String,
    /// Name used in export paths; falls back to the material name.
    pub export_name: Option<String>,
}

/// Inputs of a batch sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSettings {
    /// Collection prefix of every export path.
    pub collection: String,
    pub borders: Vec<BorderEntry>,
    pub materials: Vec<MaterialEntry>,
}

/// Receiver for generated variants. Export itself (file formats, icon
/// rendering, importer invocation) lives entirely on the host side.
pub trait SurfaceExporter {
    /// Called once per generated variant. Returning an error aborts the sweep.
    fn export(&mut self, path: &str, surface: &GeneratedSurface) -> Result<(), String>;
}

/// Why a sweep aborted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SweepError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("export of '{path}' failed: {reason}")]
    Export { path: String, reason: String },
}

/// Totals accumulated over one sweep run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepReport {
    pub generated: usize,
    pub skipped: usize,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
}

/// Run the sweep. `base` supplies every parameter except the border and
/// top-material assignments, which the sweep rotates through.
pub fn run_sweep(
    base: &SurfaceSettings,
    sweep: &SweepSettings,
    exporter: &mut dyn SurfaceExporter,
) -> Result<SweepReport, SweepError> {
    let mut report = SweepReport::default();
    let border_count = sweep.borders.len();
    let total = sweep.materials.len() * border_count.pow(4);
    let mut current = 0usize;

    for material in &sweep.materials {
        let material_name = material
            .export_name
            .clone()
            .unwrap_or_else(|| material.material.clone());

        for c0 in 0..border_count {
            for c1 in 0..border_count {
                for c2 in 0..border_count {
                    for c3 in 0..border_count {
                        current += 1;
                        log::debug!("sweep combination {current}/{total}");

                        let entries = [
                            &sweep.borders[c0],
                            &sweep.borders[c1],
                            &sweep.borders[c2],
                            &sweep.borders[c3],
                        ];
                        if !chain_closes(&entries)? {
                            report.skipped += 1;
                            continue;
                        }

                        let mut settings = base.clone();
                        settings.top_material = Some(material.material.clone());
                        settings.east = Some(BorderSetting::new(
                            entries[0].curve.clone(),
                            entries[0].flip,
                        ));
                        settings.north = Some(BorderSetting::new(
                            entries[1].curve.clone(),
                            entries[1].flip,
                        ));
                        settings.west = Some(BorderSetting::new(
                            entries[2].curve.clone(),
                            !entries[2].flip,
                        ));
                        settings.south = Some(BorderSetting::new(
                            entries[3].curve.clone(),
                            !entries[3].flip,
                        ));

                        let surface = connector::generate(&settings)?;
                        let path = export_path(&sweep.collection, &material_name, &entries);
                        log::info!("generating and exporting: {path}");
                        exporter
                            .export(&path, &surface)
                            .map_err(|reason| SweepError::Export {
                                path: path.clone(),
                                reason,
                            })?;

                        report.generated += 1;
                        report.vertices += surface.mesh.vertex_count();
                        report.edges += surface.mesh.edge_count();
                        report.faces += surface.mesh.face_count();
                    }
                }
            }
        }
    }

    log::info!(
        "generated {} surface items ({} skipped): {} vertices, {} edges, {} faces",
        report.generated,
        report.skipped,
        report.vertices,
        report.edges,
        report.faces
    );
    Ok(report)
}

/// Corner-closure filter on the authored chain (East, North, West, South,
/// before the West/South flip negation). Altitude partial sums must never
/// dip below ground, the loop must return to the starting altitude, and a
/// chain whose far corner is back at ground while an interior corner is
/// raised is rejected as degenerate.
fn chain_closes(entries: &[&BorderEntry; 4]) -> Result<bool, GenerateError> {
    let roles = [
        BorderRole::East,
        BorderRole::North,
        BorderRole::West,
        BorderRole::South,
    ];
    let mut chain = Vec::with_capacity(4);
    for (entry, role) in entries.iter().zip(roles) {
        let border = Border::from_curve(&entry.curve, entry.flip)
            .map_err(|source| GenerateError::BorderInvalid { role, source })?;
        chain.push(border);
    }

    let eps = JOIN_EPSILON;
    if (chain[0].length() - chain[2].length()).abs() > eps
        || (chain[1].length() - chain[3].length()).abs() > eps
    {
        return Ok(false);
    }

    let z1 = chain[0].height();
    let z2 = z1 + chain[1].height();
    let z3 = z2 + chain[2].height();
    let z0 = z3 + chain[3].height();
    if z1 < -eps || z2 < -eps || z3 < -eps || z0.abs() > eps {
        return Ok(false);
    }
    if z3 <= eps && (z1 > eps || z2 > eps) {
        return Ok(false);
    }
    Ok(true)
}

fn export_path(collection: &str, material: &str, entries: &[&BorderEntry; 4]) -> String {
    let tag = |entry: &BorderEntry| {
        format!("{}{}", entry.name, if entry.flip { "f" } else { "" })
    };
    format!(
        "{}/{}/{}-{}-{}-{}",
        collection,
        material,
        tag(entries[0]),
        tag(entries[1]),
        tag(entries[2]),
        tag(entries[3]),
    )
}
