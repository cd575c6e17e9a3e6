//! Interactive sketching session
//!
//! [`CurveSession`] owns the growing anchor/knot/segment sequences and turns
//! pointer events into sliding-window recomputation of the curve tail. All
//! rendering is delegated to an injected [`CurveHost`].

use crate::{bspline, BBox, Cubic, Error, Point, Scalar};

/// Tessellation density used when redrawing the curve tail.
pub const TAIL_STEPS: usize = 10;

/// First-knot marker icon size in host units
pub const MARKER_SIZE: Scalar = 11.0;
/// First-knot marker pen width in host units
pub const MARKER_PEN_WIDTH: Scalar = 2.0;

const MARKER_HALF_EXTENT: Scalar = (MARKER_SIZE + MARKER_PEN_WIDTH) / 2.0;

/// Rendering capabilities the session needs from its host.
///
/// The host owns all drawing objects; the session only hands over finished
/// polylines and highlight state changes.
pub trait CurveHost {
    /// Replace the rendered polyline of the segment at `index`
    fn render_polyline(&mut self, index: usize, polyline: &[Point]);

    /// Toggle the highlight of the first knot marker
    fn set_first_marker_highlight(&mut self, highlighted: bool);
}

/// One in-progress curve sketch.
///
/// Three sequences grow in lockstep: the raw `anchors` the user pressed, the
/// `knots` carrying continuity-adjusted segment endpoints, and the derived
/// bezier `segments`. Equal length at all times is the structural invariant.
#[derive(Debug, Default, Clone)]
pub struct CurveSession {
    anchors: Vec<Point>,
    knots: Vec<Point>,
    segments: Vec<Cubic>,
    over_first: bool,
}

impl CurveSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Continuity-adjusted segment endpoints
    pub fn knots(&self) -> &[Point] {
        &self.knots
    }

    /// Derived bezier segments, index-aligned with the knots
    pub fn segments(&self) -> &[Cubic] {
        &self.segments
    }

    /// Commit the pointer position as a new knot.
    ///
    /// Appends a zero-length placeholder segment; the segment only takes
    /// shape on the following pointer moves.
    pub fn commit_point(&mut self, point: impl Into<Point>) {
        let point = point.into();
        tracing::debug!("[commit_point] {:?}", point);
        self.anchors.push(point);
        self.knots.push(point);
        self.segments.push(Cubic::degenerate(point));
        self.check_lockstep();
    }

    /// Reshape the curve tail against the not-yet-committed cursor position.
    ///
    /// The live segment is rederived from the last knot and the cursor, then
    /// the penultimate segment is rederived with the cursor as its forward
    /// tangent anchor and its computed end is stored back as the continuity
    /// knot. The live segment intentionally reads the knot from before that
    /// update; deriving in the opposite order changes the visual joint.
    ///
    /// Both derivations are computed before anything is stored, so a failed
    /// call leaves the session unchanged.
    pub fn move_cursor(
        &mut self,
        cursor: impl Into<Point>,
        host: &mut impl CurveHost,
    ) -> Result<(), Error> {
        let cursor = cursor.into();
        let n = self.anchors.len();
        if n > 0 {
            let live = bspline(
                &[self.anchors[n - 1], cursor],
                Some(self.knots[n - 1]),
                Some(cursor),
            )?;
            if n > 1 {
                let penultimate = bspline(
                    &[self.anchors[n - 2], self.anchors[n - 1], cursor],
                    Some(self.knots[n - 2]),
                    None,
                )?;
                self.segments[n - 1] = live;
                self.segments[n - 2] = penultimate;
                self.knots[n - 1] = penultimate.end();
            } else {
                self.segments[n - 1] = live;
            }
            self.check_lockstep();
        }

        let over_first = self.is_over_first(cursor);
        if over_first != self.over_first {
            host.set_first_marker_highlight(over_first);
            self.over_first = over_first;
        }

        self.redraw_tail(host);
        Ok(())
    }

    /// Discard all knots and segments, returning to the initial empty state
    pub fn clear(&mut self) {
        tracing::debug!("[clear] {} knots", self.knots.len());
        self.anchors.clear();
        self.knots.clear();
        self.segments.clear();
        self.over_first = false;
    }

    /// Decide if the cursor is within the bounding box of the first knot
    /// marker, boundary included. Used by hosts to offer curve closing.
    pub fn is_over_first(&self, cursor: impl Into<Point>) -> bool {
        match self.anchors.first() {
            None => false,
            Some(first) => BBox::around(*first, MARKER_HALF_EXTENT).contains(cursor.into()),
        }
    }

    /// Re-tessellate the last (two) segment(s) and hand the polylines to the
    /// host.
    fn redraw_tail(&self, host: &mut impl CurveHost) {
        let n = self.segments.len();
        if n == 0 {
            return;
        }
        tracing::debug!("[redraw_tail] segments {}..{}", n.saturating_sub(2), n);

        // TODO: pick the step count from approx_arc_length instead of a fixed constant
        for index in n.saturating_sub(2)..n {
            let mut polyline = self.segments[index].tessellate(TAIL_STEPS);
            // the stored knots win over the segment endpoints, so the seam
            // stays exact while the tail is still provisional
            polyline[0] = self.knots[index];
            if index + 1 < n {
                let last = polyline.len() - 1;
                polyline[last] = self.knots[index + 1];
            }
            host.render_polyline(index, &polyline);
        }
    }

    fn check_lockstep(&self) {
        debug_assert!(
            self.anchors.len() == self.knots.len() && self.knots.len() == self.segments.len(),
            "anchors/knots/segments out of lockstep: {}/{}/{}",
            self.anchors.len(),
            self.knots.len(),
            self.segments.len(),
        );
    }
}
