//! A retained recording canvas.
//!
//! [`DisplayList`] implements [`Canvas`] by storing every drawing call as a
//! [`CanvasOp`] in issue order. It never fails. Uses:
//! - a backend-neutral intermediate form for callers that replay the ops
//!   against a real drawing surface later;
//! - a logging double for tests that assert on emitted calls;
//! - bounding-box computation for callers placing the drawing on a page.

use kurbo::Point;

use crate::canvas::{Canvas, CanvasResult, PaintStyle};
use crate::types::Scalar;

// ---------------------------------------------------------------------------
// CanvasOp
// ---------------------------------------------------------------------------

/// One recorded drawing call, with full destination-space payload.
///
/// The cubic variant stores its control points in natural order (`c1`,
/// `c2`, `end`), independent of the [`Canvas`] call signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasOp {
    MoveTo(Point),
    Line {
        from: Point,
        to: Point,
    },
    CubicBezier {
        from: Point,
        c1: Point,
        c2: Point,
        end: Point,
        style: PaintStyle,
    },
    QuadraticBezier {
        from: Point,
        ctrl: Point,
        end: Point,
        style: PaintStyle,
    },
}

// ---------------------------------------------------------------------------
// BoundingBox
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box over destination-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: Scalar,
    pub min_y: Scalar,
    pub max_x: Scalar,
    pub max_y: Scalar,
}

impl BoundingBox {
    /// An empty (inverted) bounding box.
    pub const EMPTY: Self = Self {
        min_x: Scalar::INFINITY,
        min_y: Scalar::INFINITY,
        max_x: Scalar::NEG_INFINITY,
        max_y: Scalar::NEG_INFINITY,
    };

    /// Check if this bounding box is valid (non-empty).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Width, or 0 when empty.
    #[must_use]
    pub fn width(&self) -> Scalar {
        if self.is_valid() {
            self.max_x - self.min_x
        } else {
            0.0
        }
    }

    /// Height, or 0 when empty.
    #[must_use]
    pub fn height(&self) -> Scalar {
        if self.is_valid() {
            self.max_y - self.min_y
        } else {
            0.0
        }
    }

    /// Expand to include a point.
    pub fn include_point(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Expand to include another bounding box.
    pub fn union(&mut self, other: &Self) {
        if other.is_valid() {
            self.min_x = self.min_x.min(other.min_x);
            self.min_y = self.min_y.min(other.min_y);
            self.max_x = self.max_x.max(other.max_x);
            self.max_y = self.max_y.max(other.max_y);
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

// ---------------------------------------------------------------------------
// DisplayList
// ---------------------------------------------------------------------------

/// An ordered list of recorded drawing calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayList {
    pub ops: Vec<CanvasOp>,
}

impl DisplayList {
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Append an op directly.
    pub fn push(&mut self, op: CanvasOp) {
        self.ops.push(op);
    }

    /// Append all ops from another list.
    pub fn merge(&mut self, other: &Self) {
        self.ops.extend(other.ops.iter().copied());
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Bounding box over all recorded points.
    ///
    /// A conservative control-hull bound: curve control points are included
    /// as-is rather than solving for curve extrema.
    #[must_use]
    pub fn bbox(&self) -> BoundingBox {
        let mut bb = BoundingBox::EMPTY;
        for op in &self.ops {
            match *op {
                CanvasOp::MoveTo(p) => bb.include_point(p),
                CanvasOp::Line { from, to } => {
                    bb.include_point(from);
                    bb.include_point(to);
                }
                CanvasOp::CubicBezier {
                    from, c1, c2, end, ..
                } => {
                    bb.include_point(from);
                    bb.include_point(c1);
                    bb.include_point(c2);
                    bb.include_point(end);
                }
                CanvasOp::QuadraticBezier {
                    from, ctrl, end, ..
                } => {
                    bb.include_point(from);
                    bb.include_point(ctrl);
                    bb.include_point(end);
                }
            }
        }
        bb
    }
}

impl Canvas for DisplayList {
    fn is_ok(&self) -> bool {
        true
    }

    fn move_to(&mut self, p: Point) -> CanvasResult {
        self.ops.push(CanvasOp::MoveTo(p));
        Ok(())
    }

    fn line_to(&mut self, from: Point, to: Point) -> CanvasResult {
        self.ops.push(CanvasOp::Line { from, to });
        Ok(())
    }

    fn cubic_bezier_to(
        &mut self,
        from: Point,
        c1: Point,
        end: Point,
        c2: Point,
        style: PaintStyle,
    ) -> CanvasResult {
        self.ops.push(CanvasOp::CubicBezier {
            from,
            c1,
            c2,
            end,
            style,
        });
        Ok(())
    }

    fn quadratic_bezier_to(
        &mut self,
        from: Point,
        ctrl: Point,
        end: Point,
        style: PaintStyle,
    ) -> CanvasResult {
        self.ops.push(CanvasOp::QuadraticBezier {
            from,
            ctrl,
            end,
            style,
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
