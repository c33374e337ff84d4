use bordermesh::CubicBezier;
use nalgebra::{Point2, Vector2};

mod support;

use crate::support::approx_eq;

fn sample_span() -> CubicBezier {
    CubicBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 2.0),
        Point2::new(3.0, -1.0),
        Point2::new(4.0, 1.0),
    )
}

#[test]
fn evaluate_endpoints() {
    let span = sample_span();
    assert_eq!(span.evaluate(0.0), span.p);
    let end = span.evaluate(1.0);
    assert!(approx_eq(end.x, span.q.x, 1e-12));
    assert!(approx_eq(end.y, span.q.y, 1e-12));
}

#[test]
fn evaluate_midpoint() {
    // Bernstein weights at t = 0.5 are (1/8, 3/8, 3/8, 1/8).
    let mid = sample_span().evaluate(0.5);
    assert!(approx_eq(mid.x, 2.0, 1e-12));
    assert!(approx_eq(mid.y, 0.5, 1e-12));
}

#[test]
fn split_is_exact() {
    let span = sample_span();
    let cut = 0.3;
    let (left, right) = span.split(cut);

    assert_eq!(left.p, span.p);
    assert_eq!(right.q, span.q);
    // C0 continuity at the cut.
    assert_eq!(left.q, right.p);

    // Re-parametrized halves must reproduce the original at every t.
    for i in 0..=20 {
        let t = i as f64 / 20.0;
        let expected = span.evaluate(t);
        let actual = if t < cut {
            left.evaluate(t / cut)
        } else {
            right.evaluate((t - cut) / (1.0 - cut))
        };
        assert!(approx_eq(actual.x, expected.x, 1e-9), "x at t={t}");
        assert!(approx_eq(actual.y, expected.y, 1e-9), "y at t={t}");
    }
}

#[test]
fn subdivide_is_parameter_even() {
    let span = sample_span();
    let parts = span.subdivide(3);
    assert_eq!(parts.len(), 4);

    // Cut anchors land at i/4 in parameter space.
    for (i, part) in parts.iter().enumerate() {
        let expected = span.evaluate(i as f64 / 4.0);
        assert!(approx_eq(part.p.x, expected.x, 1e-9));
        assert!(approx_eq(part.p.y, expected.y, 1e-9));
    }
    assert_eq!(parts[3].q, span.q);

    // Consecutive parts chain without gaps.
    for pair in parts.windows(2) {
        assert!(approx_eq(pair[0].q.x, pair[1].p.x, 1e-12));
        assert!(approx_eq(pair[0].q.y, pair[1].p.y, 1e-12));
    }
}

#[test]
fn subdivide_zero_cuts_is_identity() {
    let span = sample_span();
    assert_eq!(span.subdivide(0), vec![span]);
}

#[test]
fn reversed_runs_backwards() {
    let span = sample_span();
    let reversed = span.reversed();
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let a = span.evaluate(t);
        let b = reversed.evaluate(1.0 - t);
        assert!(approx_eq(a.x, b.x, 1e-12));
        assert!(approx_eq(a.y, b.y, 1e-12));
    }
}

#[test]
fn reverse_twice_round_trips() {
    let span = sample_span();
    let mut twice = span;
    twice.reverse();
    twice.reverse();
    assert_eq!(twice, span);
}

#[test]
fn translated_moves_all_points() {
    let span = sample_span().translated(Vector2::new(2.0, -1.0));
    assert_eq!(span.p, Point2::new(2.0, -1.0));
    assert_eq!(span.r, Point2::new(3.0, 1.0));
    assert_eq!(span.l, Point2::new(5.0, -2.0));
    assert_eq!(span.q, Point2::new(6.0, 0.0));
}

#[test]
fn scaled_is_per_axis() {
    let span = sample_span().scaled(Point2::origin(), Vector2::new(-1.0, 1.0));
    assert_eq!(span.p, Point2::new(0.0, 0.0));
    assert_eq!(span.r, Point2::new(-1.0, 2.0));
    assert_eq!(span.l, Point2::new(-3.0, -1.0));
    assert_eq!(span.q, Point2::new(-4.0, 1.0));

    let about_pivot = sample_span().scaled(Point2::new(4.0, 0.0), Vector2::new(2.0, 1.0));
    assert_eq!(about_pivot.p, Point2::new(-4.0, 0.0));
    assert_eq!(about_pivot.q, Point2::new(4.0, 1.0));
}
