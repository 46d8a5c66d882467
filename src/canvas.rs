//! The canvas capability the interpreter draws against.
//!
//! A canvas is the external collaborator that actually emits lines and
//! curves in destination coordinates. It owns its own error state: a canvas
//! may already be failed from earlier, unrelated drawing, and once any call
//! fails the canvas keeps the authoritative diagnostic. Callers of this
//! crate see only the stop, never a restated cause.

use std::fmt;

use kurbo::Point;

// ---------------------------------------------------------------------------
// PaintStyle
// ---------------------------------------------------------------------------

/// Drawing style accepted by the curve primitives.
///
/// The interpreter always passes [`Stroke`](Self::Stroke); the other
/// variants exist for canvases that expose the same primitives directly to
/// their own callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    /// Stroke the outline only.
    #[default]
    Stroke,
    /// Fill the enclosed region only.
    Fill,
    /// Fill, then stroke the outline.
    FillStroke,
}

impl PaintStyle {
    /// Decode a one- or two-letter style string (`"D"`, `"F"`, `"FD"`,
    /// `"DF"`), as used by PDF-style hosts. Anything else strokes.
    pub fn from_str_code(code: &str) -> Self {
        match code {
            "F" => Self::Fill,
            "FD" | "DF" => Self::FillStroke,
            _ => Self::Stroke,
        }
    }
}

// ---------------------------------------------------------------------------
// CanvasFault
// ---------------------------------------------------------------------------

/// Marker error: the canvas has entered its failed state.
///
/// Deliberately carries no payload. The canvas retains its own diagnostic;
/// consumers report that drawing stopped, not why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasFault;

impl fmt::Display for CanvasFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "canvas is in a failed state")
    }
}

impl std::error::Error for CanvasFault {}

/// Convenience type alias for canvas call results.
pub type CanvasResult = Result<(), CanvasFault>;

// ---------------------------------------------------------------------------
// Canvas trait
// ---------------------------------------------------------------------------

/// Drawing capability consumed by [`interpret`](crate::interpret).
///
/// All coordinates are in destination units. Each drawing call returns
/// `Err(CanvasFault)` once the canvas has failed; after the first failure a
/// canvas must keep failing rather than resume half-way through a figure.
pub trait Canvas {
    /// Whether the canvas is still healthy. A canvas can be failed before
    /// any call is made in the current pass.
    fn is_ok(&self) -> bool;

    /// Move the drawing cursor without emitting geometry.
    fn move_to(&mut self, p: Point) -> CanvasResult;

    /// Straight line segment from `from` to `to`.
    fn line_to(&mut self, from: Point, to: Point) -> CanvasResult;

    /// Cubic Bezier segment.
    ///
    /// Argument order mirrors the host curve primitive: the second control
    /// point is passed after the endpoint.
    fn cubic_bezier_to(
        &mut self,
        from: Point,
        c1: Point,
        end: Point,
        c2: Point,
        style: PaintStyle,
    ) -> CanvasResult;

    /// Quadratic Bezier segment.
    ///
    /// Quadratics are a distinct primitive; a canvas that only draws cubics
    /// performs its own degree elevation.
    fn quadratic_bezier_to(
        &mut self,
        from: Point,
        ctrl: Point,
        end: Point,
        style: PaintStyle,
    ) -> CanvasResult;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
