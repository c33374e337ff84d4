use bordermesh::surface::{
    BorderEntry, GeneratedSurface, MaterialEntry, SurfaceExporter, SweepError,
    SweepSettings, run_sweep,
};

mod support;

use crate::support::{flat_square_settings, line_curve};

#[derive(Default)]
struct RecordingExporter {
    paths: Vec<String>,
}

impl SurfaceExporter for RecordingExporter {
    fn export(&mut self, path: &str, _surface: &GeneratedSurface) -> Result<(), String> {
        self.paths.push(path.to_string());
        Ok(())
    }
}

struct FailingExporter;

impl SurfaceExporter for FailingExporter {
    fn export(&mut self, _path: &str, _surface: &GeneratedSurface) -> Result<(), String> {
        Err("disk full".to_string())
    }
}

fn sweep_settings(borders: Vec<BorderEntry>) -> SweepSettings {
    SweepSettings {
        collection: "Surfaces".to_string(),
        borders,
        materials: vec![MaterialEntry {
            material: "Grass".to_string(),
            export_name: None,
        }],
    }
}

fn flat_entry() -> BorderEntry {
    BorderEntry {
        name: "flat4".to_string(),
        curve: line_curve(0.0, 0.0, 4.0, 0.0),
        flip: false,
    }
}

fn slope_entry(flip: bool) -> BorderEntry {
    BorderEntry {
        name: "slope4".to_string(),
        curve: line_curve(0.0, 0.0, 4.0, 1.0),
        flip,
    }
}

#[test]
fn single_flat_border_generates_one_variant() {
    let base = flat_square_settings(4.0);
    let sweep = sweep_settings(vec![flat_entry()]);
    let mut exporter = RecordingExporter::default();

    let report = run_sweep(&base, &sweep, &mut exporter).unwrap();
    assert_eq!(report.generated, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(exporter.paths, vec!["Surfaces/Grass/flat4-flat4-flat4-flat4"]);

    // One flat 4-unit box: 8 vertices, 12 edges, 6 quads.
    assert_eq!(report.vertices, 8);
    assert_eq!(report.edges, 12);
    assert_eq!(report.faces, 6);
}

#[test]
fn unclosable_chain_is_skipped_not_failed() {
    // A single ever-rising border can never return to the start altitude.
    let base = flat_square_settings(4.0);
    let sweep = sweep_settings(vec![slope_entry(false)]);
    let mut exporter = RecordingExporter::default();

    let report = run_sweep(&base, &sweep, &mut exporter).unwrap();
    assert_eq!(report.generated, 0);
    assert_eq!(report.skipped, 1);
    assert!(exporter.paths.is_empty());
}

#[test]
fn mixed_library_prunes_by_corner_closure() {
    // Chain altitudes per pick: flat 0, slope +1, flipped slope -1. Of the
    // 81 combinations, exactly six close without dipping below ground or
    // tripping the degenerate-shape rule:
    //   flat,flat,flat,flat
    //   slope,flat,flat,slope_f      (+1, 0, 0, -1)
    //   flat,slope,flat,slope_f      ( 0,+1, 0, -1)
    //   flat,flat,slope,slope_f      ( 0, 0,+1, -1)
    //   slope,slope,slope_f,slope_f  (+1,+1,-1, -1)
    //   slope,slope_f,slope,slope_f  (+1,-1,+1, -1)
    let base = flat_square_settings(4.0);
    let sweep = sweep_settings(vec![flat_entry(), slope_entry(false), slope_entry(true)]);
    let mut exporter = RecordingExporter::default();

    let report = run_sweep(&base, &sweep, &mut exporter).unwrap();
    assert_eq!(report.generated, 6);
    assert_eq!(report.skipped, 81 - 6);
    assert_eq!(exporter.paths.len(), 6);
    assert!(
        exporter
            .paths
            .contains(&"Surfaces/Grass/flat4-flat4-flat4-flat4".to_string())
    );
    assert!(
        exporter
            .paths
            .contains(&"Surfaces/Grass/slope4-flat4-flat4-slope4f".to_string())
    );
}

#[test]
fn export_failure_aborts_the_sweep() {
    let base = flat_square_settings(4.0);
    let sweep = sweep_settings(vec![flat_entry()]);

    match run_sweep(&base, &sweep, &mut FailingExporter) {
        Err(SweepError::Export { path, reason }) => {
            assert_eq!(path, "Surfaces/Grass/flat4-flat4-flat4-flat4");
            assert_eq!(reason, "disk full");
        },
        other => panic!("unexpected result: {other:?}"),
    }
}
