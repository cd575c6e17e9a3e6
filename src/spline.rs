//! Uniform b-spline to bezier control point derivation
//!
//! A smooth piecewise-cubic curve through a run of knots is produced segment
//! by segment: [`bspline`] turns 2-3 consecutive knots (plus optional pinned
//! endpoints carried over from neighbouring segments) into the four control
//! points of one cubic bezier.

use crate::{Cubic, Error, Point, Scalar};

const F13: Scalar = 1.0 / 3.0;
const F23: Scalar = 2.0 / 3.0;

/// Length of the polyline represented by the given points
pub fn polyline_length(points: &[Point]) -> Scalar {
    points
        .windows(2)
        .map(|pair| pair[0].dist(pair[1]))
        .sum()
}

/// Cheap one-pass estimate of the arc length of a cubic bezier given as its
/// four control points.
///
/// The chord is a lower bound and the control polygon an upper bound, the
/// estimate is their average. Fails with [`Error::InvalidArity`] unless
/// exactly four points are supplied.
pub fn approx_arc_length(points: &[Point]) -> Result<Scalar, Error> {
    if points.len() != 4 {
        return Err(Error::InvalidArity {
            expected: 4,
            provided: points.len(),
        });
    }
    let lower = points[0].dist(points[3]);
    let upper = polyline_length(points);
    Ok(lower + (upper - lower) / 2.0)
}

/// Compute the control points of one cubic bezier segment from consecutive
/// knots.
///
/// The total number of supplied points must be exactly four:
/// `points.len()` plus one for each of `start` and `end` that is given,
/// otherwise the segment is under- or over-determined and the call fails with
/// [`Error::InvalidArity`].
///
/// A pinned `start` (or `end`) is taken verbatim as `c0` (or `c3`), which is
/// how adjacent segments share the exact tangent point at their common knot.
/// An unpinned endpoint is derived as the midpoint of the incoming and
/// outgoing tangent helpers, the standard uniform b-spline to bezier
/// construction.
pub fn bspline(points: &[Point], start: Option<Point>, end: Option<Point>) -> Result<Cubic, Error> {
    let provided = points.len() + start.is_some() as usize + end.is_some() as usize;
    if provided != 4 {
        return Err(Error::InvalidArity {
            expected: 4,
            provided,
        });
    }

    let c0 = match start {
        Some(start) => start,
        None => {
            let h0 = points[0].lerp(points[1], F23);
            let h1 = points[1].lerp(points[2], F13);
            h0.midpoint(h1)
        }
    };

    // the first point has already been consumed as the tangent anchor
    // unless the start was pinned
    let offset = if start.is_some() { 0 } else { 1 };
    let c1 = points[offset].lerp(points[offset + 1], F13);
    let c2 = points[offset].lerp(points[offset + 1], F23);

    let c3 = match end {
        Some(end) => end,
        None => {
            let h0 = points[offset].lerp(points[offset + 1], F23);
            let h1 = points[offset + 1].lerp(points[offset + 2], F13);
            h0.midpoint(h1)
        }
    };

    Ok(Cubic([c0, c1, c2, c3]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    const PREC: Scalar = 1e-9;

    fn assert_points_eq(actual: [Point; 4], expected: [[Scalar; 2]; 4]) {
        for (point, reference) in actual.iter().zip(expected.iter()) {
            assert_approx_eq!(point.x(), reference[0], PREC);
            assert_approx_eq!(point.y(), reference[1], PREC);
        }
    }

    #[test]
    fn test_bspline_pinned_both() {
        // live segment case: two knots plus both endpoints pinned
        let segment = bspline(
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            Some(Point::new(0.0, 0.0)),
            Some(Point::new(10.0, 0.0)),
        )
        .unwrap();
        assert_points_eq(
            segment.points(),
            [
                [0.0, 0.0],
                [3.333333333333333, 0.0],
                [6.666666666666666, 0.0],
                [10.0, 0.0],
            ],
        );
    }

    #[test]
    fn test_bspline_pinned_start() {
        // penultimate segment case: three knots plus pinned start
        let segment = bspline(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ],
            Some(Point::new(0.0, 0.0)),
            None,
        )
        .unwrap();
        assert_points_eq(
            segment.points(),
            [
                [0.0, 0.0],
                [3.333333333333333, 0.0],
                [6.666666666666666, 0.0],
                [8.333333333333332, 1.6666666666666665],
            ],
        );
    }

    #[test]
    fn test_bspline_pinned_end() {
        let segment = bspline(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ],
            None,
            Some(Point::new(20.0, 10.0)),
        )
        .unwrap();
        assert_points_eq(
            segment.points(),
            [
                [8.333333333333332, 1.6666666666666665],
                [10.0, 3.333333333333333],
                [10.0, 6.666666666666666],
                [20.0, 10.0],
            ],
        );
    }

    #[test]
    fn test_bspline_unpinned() {
        let segment = bspline(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0),
            ],
            None,
            None,
        )
        .unwrap();
        assert_points_eq(
            segment.points(),
            [
                [8.333333333333332, 1.6666666666666665],
                [10.0, 3.333333333333333],
                [10.0, 6.666666666666666],
                [11.666666666666666, 8.333333333333332],
            ],
        );
    }

    #[test]
    fn test_bspline_arity() {
        let p = Point::new(1.0, 1.0);

        // every combination summing to four succeeds
        assert!(bspline(&[p; 4], None, None).is_ok());
        assert!(bspline(&[p; 3], Some(p), None).is_ok());
        assert!(bspline(&[p; 3], None, Some(p)).is_ok());
        assert!(bspline(&[p; 2], Some(p), Some(p)).is_ok());

        // anything else is rejected
        let err = bspline(&[p; 3], None, None);
        assert_eq!(
            err,
            Err(Error::InvalidArity {
                expected: 4,
                provided: 3
            })
        );
        assert!(bspline(&[p; 5], None, None).is_err());
        assert!(bspline(&[p; 4], Some(p), None).is_err());
        assert!(bspline(&[p; 4], Some(p), Some(p)).is_err());
        assert!(bspline(&[], Some(p), Some(p)).is_err());
    }

    #[test]
    fn test_continuity_at_shared_knot() {
        // pin segment i's end and segment i+1's start to the same point and
        // the tessellations must share it exactly
        let shared = Point::new(8.333333333333332, 1.6666666666666665);
        let left = bspline(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ],
            Some(Point::new(0.0, 0.0)),
            None,
        )
        .unwrap();
        let right = bspline(
            &[Point::new(10.0, 0.0), Point::new(20.0, 10.0)],
            Some(shared),
            Some(Point::new(20.0, 10.0)),
        )
        .unwrap();
        assert!(left.end().is_close_to(shared));

        let left_poly = left.tessellate(10);
        let right_poly = right.tessellate(10);
        // no gap and no overlap at the seam
        assert_eq!(*right_poly.first().unwrap(), shared);
        assert!(left_poly.last().unwrap().is_close_to(shared));
    }

    #[test]
    fn test_polyline_length() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
        ];
        assert_approx_eq!(polyline_length(&points), 30.0, PREC);
        assert_approx_eq!(polyline_length(&points[..1]), 0.0);
        assert_approx_eq!(polyline_length(&[]), 0.0);
    }

    #[test]
    fn test_approx_arc_length() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
        ];
        // chord is sqrt(500), control polygon is 30
        assert_approx_eq!(approx_arc_length(&points).unwrap(), 26.18033988749895, PREC);

        assert_eq!(
            approx_arc_length(&points[..3]),
            Err(Error::InvalidArity {
                expected: 4,
                provided: 3
            })
        );
        assert!(approx_arc_length(&[]).is_err());
    }
}
