//! Test support library
//! Provides shared curve builders & helpers for the integration suites.

use bordermesh::border::{AnchorPoint, CurveData};
use bordermesh::float_types::Real;
use bordermesh::surface::{BorderSetting, SurfaceSettings};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A straight border profile from `(x0, y0)` to `(x1, y1)` with collinear
/// handles at the third points, so the span is an exact line.
pub fn line_curve(x0: Real, y0: Real, x1: Real, y1: Real) -> CurveData {
    let a = Point2::new(x0, y0);
    let b = Point2::new(x1, y1);
    let third = (b - a) / 3.0;
    CurveData::from_points(vec![
        AnchorPoint::new(a, a - third, a + third),
        AnchorPoint::new(b, b - third, b + third),
    ])
}

/// A symmetric bump of the given length: starts and ends at altitude 0,
/// rising toward the middle (peak altitude `0.75 * rise` at half length).
pub fn bump_curve(length: Real, rise: Real) -> CurveData {
    let quarter = length / 4.0;
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(length, 0.0);
    CurveData::from_points(vec![
        AnchorPoint::new(a, Point2::new(-quarter, -rise), Point2::new(quarter, rise)),
        AnchorPoint::new(
            b,
            Point2::new(length - quarter, rise),
            Point2::new(length + quarter, -rise),
        ),
    ])
}

/// Settings for a flat square patch bounded by four straight borders of the
/// given size, with all three materials assigned.
pub fn flat_square_settings(size: Real) -> SurfaceSettings {
    let line = line_curve(0.0, 0.0, size, 0.0);
    SurfaceSettings {
        east: Some(BorderSetting::new(line.clone(), false)),
        west: Some(BorderSetting::new(line.clone(), false)),
        north: Some(BorderSetting::new(line.clone(), false)),
        south: Some(BorderSetting::new(line, false)),
        top_material: Some("TopMaterial".to_string()),
        bottom_material: Some("BottomMaterial".to_string()),
        side_material: Some("SideMaterial".to_string()),
        ..SurfaceSettings::default()
    }
}
