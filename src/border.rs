//! Border profiles: validated chains of cubic Bezier spans.
//!
//! A [`Border`] is built from a host-authored curve ([`CurveData`]) and is the
//! unit the surface connector works with. Its local X axis is the direction
//! the profile runs along ("length"); Y is altitude ("height"). The first
//! anchor is normalized to the origin at construction, so length and height
//! are always relative.

use crate::curve::{CubicBezier, subdivide_chain};
use crate::errors::CurveError;
use crate::float_types::{Real, SAMPLE_EPSILON};
use crate::grid;
use nalgebra::{Point2, Vector2};

/// One authored anchor with its two tangent handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    pub position: Point2<Real>,
    pub handle_left: Point2<Real>,
    pub handle_right: Point2<Real>,
}

impl AnchorPoint {
    pub const fn new(
        position: Point2<Real>,
        handle_left: Point2<Real>,
        handle_right: Point2<Real>,
    ) -> Self {
        AnchorPoint {
            position,
            handle_left,
            handle_right,
        }
    }
}

/// One open run of anchor points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spline {
    pub points: Vec<AnchorPoint>,
}

/// Dimensionality flag carried by host curve objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensions {
    D2,
    D3,
}

/// A host-authored curve object, as handed across the input boundary:
/// an ordered list of anchors organized into splines, plus the host's
/// dimensionality flag.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveData {
    pub dimensions: Dimensions,
    pub splines: Vec<Spline>,
}

impl CurveData {
    /// A flat 2D curve holding a single spline.
    pub fn from_points(points: Vec<AnchorPoint>) -> Self {
        CurveData {
            dimensions: Dimensions::D2,
            splines: vec![Spline { points }],
        }
    }
}

/// Check that an authored curve can serve as a border profile: it must be a
/// flat 2D object holding exactly one spline of at least 2 anchors whose X
/// coordinates strictly increase.
pub fn validate_curve(curve: &CurveData) -> Result<(), CurveError> {
    if curve.dimensions != Dimensions::D2 {
        return Err(CurveError::NotPlanar);
    }
    if curve.splines.len() != 1 {
        return Err(CurveError::SplineCount(curve.splines.len()));
    }
    let points = &curve.splines[0].points;
    if points.len() < 2 {
        return Err(CurveError::TooFewPoints(points.len()));
    }
    for (index, pair) in points.windows(2).enumerate() {
        if pair[1].position.x <= pair[0].position.x {
            return Err(CurveError::NonMonotonic(index + 1));
        }
    }
    Ok(())
}

/// A validated, C0-continuous chain of cubic spans forming one edge profile.
///
/// Invariants held by construction: the chain is non-empty, span `i`'s end
/// anchor is span `i+1`'s start anchor, the first anchor sits at the origin
/// and anchor X increases monotonically.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    spans: Vec<CubicBezier>,
}

impl Border {
    /// Build a border from an authored curve, one cubic span per consecutive
    /// anchor pair.
    ///
    /// With `flip` the chain is reversed end-to-end and mirrored along its
    /// travel direction: length is preserved, height is negated. This lets a
    /// border authored for the East edge be reused, unmodified in data, on
    /// the West edge.
    pub fn from_curve(curve: &CurveData, flip: bool) -> Result<Border, CurveError> {
        validate_curve(curve)?;
        let points = &curve.splines[0].points;
        let mut spans: Vec<CubicBezier> = points
            .windows(2)
            .map(|pair| {
                CubicBezier::new(
                    pair[0].position,
                    pair[0].handle_right,
                    pair[1].handle_left,
                    pair[1].position,
                )
            })
            .collect();

        if flip {
            spans.reverse();
            for span in spans.iter_mut() {
                *span = span
                    .reversed()
                    .scaled(Point2::origin(), Vector2::new(-1.0, 1.0));
            }
        }

        let offset = -spans[0].p.coords;
        for span in spans.iter_mut() {
            *span = span.translated(offset);
        }

        Ok(Border { spans })
    }

    /// The chain's cubic spans, in travel order.
    pub fn spans(&self) -> &[CubicBezier] {
        &self.spans
    }

    /// End anchor relative to the (origin) start anchor.
    pub fn size(&self) -> Vector2<Real> {
        self.spans[self.spans.len() - 1].q.coords
    }

    /// Extent along the travel axis.
    pub fn length(&self) -> Real {
        self.size().x
    }

    /// Altitude difference between the two end anchors.
    pub fn height(&self) -> Real {
        self.size().y
    }

    /// Length expressed in placement-grid cells.
    pub fn grid_length(&self) -> Real {
        grid::to_grid_length(self.length())
    }

    /// Height expressed in placement-grid cells.
    pub fn grid_height(&self) -> Real {
        grid::to_grid_length(self.height())
    }

    /// True when every control point's altitude stays within tolerance of the
    /// start anchor's. Flat borders get the coarsest sampling density since
    /// linear interpolation along them is already exact.
    pub fn is_flat(&self) -> bool {
        let reference = self.spans[0].p.y;
        self.spans.iter().all(|span| {
            [span.p, span.r, span.l, span.q]
                .iter()
                .all(|point| (point.y - reference).abs() < SAMPLE_EPSILON)
        })
    }

    /// Sample the profile into a polyline by walking X in fixed steps of
    /// `grid::LENGTH / grid_subdivisions`.
    ///
    /// Each span is first refined with `precision` de Casteljau cuts; the walk
    /// then scans the refined spans (resuming from the last match rather than
    /// restarting) and interpolates altitude *linearly between the matched
    /// span's two endpoint anchors*. This is a deliberate approximation: it
    /// keeps sampling O(n) with no root-finding, and `precision` exists
    /// precisely to bound its chordal error. The exact final anchor is always
    /// appended, so equal-length borders produce polylines with identical
    /// endpoints regardless of stepping remainders.
    pub fn sample(&self, grid_subdivisions: u32, precision: u32) -> Vec<Point2<Real>> {
        let refined = subdivide_chain(&self.spans, precision);
        let mut points = Vec::new();
        let step = grid::LENGTH / grid_subdivisions as Real;
        let length = self.length();
        let mut x = 0.0;
        let mut resume = 0usize;
        while x + SAMPLE_EPSILON < length {
            for (offset, span) in refined[resume..].iter().enumerate() {
                if span.p.x <= x && x < span.q.x {
                    resume += offset;
                    let mut y = span.p.y;
                    if x != span.p.x {
                        y = span.p.y + (span.q.y - span.p.y) / (span.q.x - span.p.x)
                            * (x - span.p.x);
                    }
                    points.push(Point2::new(x, y));
                    break;
                }
            }
            x += step;
        }
        points.push(self.spans[self.spans.len() - 1].q);
        points
    }

    /// A copy whose total height becomes `new_height`.
    ///
    /// Every control point's altitude is offset proportionally to its X
    /// fraction along the chain. With `keep_tangents`, the first span's
    /// outgoing handle is forced to move with its anchor (and symmetrically
    /// for the last span's incoming handle) so the end tangent directions
    /// survive the resize; intermediate offsets stay purely
    /// length-proportional.
    pub fn resized(&self, new_height: Real, keep_tangents: bool) -> Border {
        let diff = new_height - self.height();
        let length = self.length();
        let last = self.spans.len() - 1;
        let spans = self
            .spans
            .iter()
            .enumerate()
            .map(|(index, span)| {
                let dp = span.p.x / length * diff;
                let mut dr = span.r.x / length * diff;
                let mut dl = span.l.x / length * diff;
                let dq = span.q.x / length * diff;
                if keep_tangents && index == 0 {
                    dr = dp;
                }
                if keep_tangents && index == last {
                    dl = dq;
                }
                CubicBezier::new(
                    span.p + Vector2::new(0.0, dp),
                    span.r + Vector2::new(0.0, dr),
                    span.l + Vector2::new(0.0, dl),
                    span.q + Vector2::new(0.0, dq),
                )
            })
            .collect();
        Border { spans }
    }

    /// Reconstruct an authored curve from the chain, mirroring the outer
    /// handles about their anchors. Feeding the result back through
    /// [`Border::from_curve`] reproduces this border exactly.
    pub fn to_curve_data(&self) -> CurveData {
        let first = &self.spans[0];
        let mut points = Vec::with_capacity(self.spans.len() + 1);
        points.push(AnchorPoint::new(
            first.p,
            first.p - (first.r - first.p),
            first.r,
        ));
        for pair in self.spans.windows(2) {
            points.push(AnchorPoint::new(pair[0].q, pair[0].l, pair[1].r));
        }
        let last = &self.spans[self.spans.len() - 1];
        points.push(AnchorPoint::new(
            last.q,
            last.l,
            last.q - (last.l - last.q),
        ));
        CurveData::from_points(points)
    }
}
