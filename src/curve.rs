//! Cubic bezier segment and its polyline approximation

use crate::{Point, Scalar};
use std::fmt;

/// Step count [`Cubic::tessellate`] falls back to when given zero steps
pub const DEFAULT_STEPS: usize = 100;

/// Cubic bezier curve
///
/// Polynomial form:
/// `(1 - t) ^ 3 * p0 + 3 * (1 - t) ^ 2 * t * p1 + 3 * (1 - t) * t ^ 2 * p2 + t ^ 3 * p3`
///
/// `p0` and `p3` lie on the curve, `p1` and `p2` are tangent control points.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cubic(pub [Point; 4]);

impl fmt::Debug for Cubic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Cubic([p0, p1, p2, p3]) = self;
        write!(f, "Cubic {:?} {:?} {:?} {:?}", p0, p1, p2, p3)
    }
}

impl Cubic {
    pub fn new(
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) -> Self {
        Self([p0.into(), p1.into(), p2.into(), p3.into()])
    }

    /// Zero-length placeholder segment collapsed onto a single point
    pub fn degenerate(p: impl Into<Point>) -> Self {
        let p = p.into();
        Self([p, p, p, p])
    }

    pub fn points(&self) -> [Point; 4] {
        self.0
    }

    /// Point at which curve starts
    pub fn start(&self) -> Point {
        self.0[0]
    }

    /// Point at which curve ends
    pub fn end(&self) -> Point {
        self.0[3]
    }

    /// Evaluate curve at parameter value `t` in (0.0..=1.0)
    ///
    /// The boundary values short-circuit: `t == 0.0` returns the first control
    /// point and `t == 1.0` the last one bit-identically, so adjacent segments
    /// sharing a knot tessellate to the exact same seam point.
    pub fn at(&self, t: Scalar) -> Point {
        let Self([p0, p1, p2, p3]) = self;
        if t == 0.0 {
            return *p0;
        }
        if t == 1.0 {
            return *p3;
        }
        // at(t) =
        //   (1 - t) ^ 3 * p0 +
        //   3 * (1 - t) ^ 2 * t * p1 +
        //   3 * (1 - t) * t ^ 2 * p2 +
        //   t ^ 3 * p3
        let (t1, t_1) = (t, 1.0 - t);
        let (t2, t_2) = (t1 * t1, t_1 * t_1);
        let (t3, t_3) = (t2 * t1, t_2 * t_1);
        t_3 * p0 + 3.0 * t1 * t_2 * p1 + 3.0 * t2 * t_1 * p2 + t3 * p3
    }

    /// Approximate the curve with a polyline of `steps + 1` points evenly
    /// spaced in the parameter `t` (not in arc length).
    ///
    /// A zero step count falls back to [`DEFAULT_STEPS`], so the result is
    /// never shorter than two points.
    pub fn tessellate(&self, steps: usize) -> Vec<Point> {
        let steps = if steps == 0 { DEFAULT_STEPS } else { steps };
        let mut polyline = Vec::with_capacity(steps + 1);
        for step in 0..=steps {
            polyline.push(self.at(step as Scalar / steps as Scalar));
        }
        polyline
    }
}
