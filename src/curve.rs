//! Single-span cubic Bezier math: evaluation, de Casteljau splitting,
//! subdivision and affine transforms.
//!
//! A [`CubicBezier`] is a plain value type; transform methods return new
//! values instead of mutating shared state, so two borders built from the
//! same authored curve can never alias each other.

use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

/// One cubic Bezier span.
///
/// Control points follow the anchor/handle convention of authored curves:
/// `p` is the start anchor, `r` its outgoing handle, `l` the end anchor's
/// incoming handle and `q` the end anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p: Point2<Real>,
    pub r: Point2<Real>,
    pub l: Point2<Real>,
    pub q: Point2<Real>,
}

impl CubicBezier {
    pub const fn new(p: Point2<Real>, r: Point2<Real>, l: Point2<Real>, q: Point2<Real>) -> Self {
        CubicBezier { p, r, l, q }
    }

    /// Evaluate the Bernstein form `u³p + 3u²t·r + 3ut²·l + t³q` with `u = 1-t`.
    ///
    /// `t` outside `[0, 1]` extrapolates; there is no bounds check.
    pub fn evaluate(&self, t: Real) -> Point2<Real> {
        let u = 1.0 - t;
        Point2::from(
            self.p.coords * (u * u * u)
                + self.r.coords * (3.0 * u * u * t)
                + self.l.coords * (3.0 * u * t * t)
                + self.q.coords * (t * t * t),
        )
    }

    /// Split at parameter `t` (de Casteljau), returning the two sub-spans
    /// whose concatenation reproduces this span exactly.
    pub fn split(&self, t: Real) -> (CubicBezier, CubicBezier) {
        let q = self.evaluate(t);
        let u = 1.0 - t;
        let c0 = u * u;
        let c1 = 2.0 * t * u;
        let c2 = t * t;
        let p1b = self.p + (self.r - self.p) * t;
        let p2b = self.q + (self.l - self.q) * u;
        let left_l = Point2::from(self.p.coords * c0 + self.r.coords * c1 + self.l.coords * c2);
        let right_r = Point2::from(self.r.coords * c0 + self.l.coords * c1 + self.q.coords * c2);
        (
            CubicBezier::new(self.p, p1b, left_l, q),
            CubicBezier::new(q, right_r, p2b, self.q),
        )
    }

    /// Cut this span into `cuts + 1` sub-spans by repeatedly splitting the
    /// remainder at a decreasing fraction, so the cut parameters land at
    /// `i / (cuts + 1)`.
    ///
    /// Sub-spans are even in *parameter* space, not in arc length; the border
    /// sampler re-parametrizes by X afterwards, which makes the cheap split
    /// sufficient.
    pub fn subdivide(&self, cuts: u32) -> Vec<CubicBezier> {
        let mut spans = Vec::with_capacity(cuts as usize + 1);
        let mut rest = *self;
        for i in 0..cuts {
            let (head, tail) = rest.split(1.0 / (cuts + 1 - i) as Real);
            spans.push(head);
            rest = tail;
        }
        spans.push(rest);
        spans
    }

    /// Same span travelled in the opposite direction.
    pub const fn reversed(&self) -> Self {
        CubicBezier::new(self.q, self.l, self.r, self.p)
    }

    /// Reverse the travel direction in place.
    pub fn reverse(&mut self) {
        *self = self.reversed();
    }

    /// Translate all four control points.
    pub fn translated(&self, offset: Vector2<Real>) -> Self {
        CubicBezier::new(
            self.p + offset,
            self.r + offset,
            self.l + offset,
            self.q + offset,
        )
    }

    /// Scale all four control points about `pivot` with a per-axis factor.
    pub fn scaled(&self, pivot: Point2<Real>, factors: Vector2<Real>) -> Self {
        let scale = |pt: Point2<Real>| {
            Point2::new(
                pivot.x + factors.x * (pt.x - pivot.x),
                pivot.y + factors.y * (pt.y - pivot.y),
            )
        };
        CubicBezier::new(
            scale(self.p),
            scale(self.r),
            scale(self.l),
            scale(self.q),
        )
    }
}

/// Subdivide every span of a chain, flattening the result.
pub fn subdivide_chain(spans: &[CubicBezier], cuts: u32) -> Vec<CubicBezier> {
    spans.iter().flat_map(|span| span.subdivide(cuts)).collect()
}
