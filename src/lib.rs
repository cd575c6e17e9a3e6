//! Incremental b-spline sketching engine.
//!
//! A sequence of user-placed anchor points is turned into a smooth
//! piecewise-cubic curve: a uniform cubic b-spline approximated by chained
//! bezier segments. The curve tail is rederived on every pointer move, so the
//! segment still being dragged stays live until the next anchor is committed.
//!
//! Main pieces:
//!  - [`bspline`] derives the four control points of one segment
//!  - [`Cubic`] evaluates a segment into a polyline for rendering
//!  - [`CurveSession`] drives both from pointer events through a [`CurveHost`]
//!
#![deny(warnings)]

mod curve;
mod error;
mod geometry;
mod session;
mod spline;

pub use curve::{Cubic, DEFAULT_STEPS};
pub use error::Error;
pub use geometry::{scalar_fmt, BBox, Point, Scalar, EPSILON};
pub use session::{CurveHost, CurveSession, MARKER_PEN_WIDTH, MARKER_SIZE, TAIL_STEPS};
pub use spline::{approx_arc_length, bspline, polyline_length};
