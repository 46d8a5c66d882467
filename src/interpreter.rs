//! The path interpretation pass.
//!
//! [`interpret`] walks a [`PathSet`] command by command, maps each
//! coordinate through the [`Transform`], and issues drawing calls against a
//! [`Canvas`]. Two pieces of state thread through a pass:
//! - the *current point*: the last destination-space coordinate produced,
//!   the implicit start of the next primitive;
//! - the *subpath start point*: the most recent `MoveTo` target, which
//!   `ClosePath` lines back to.
//!
//! The pass is synchronous and single-threaded; command order is emission
//! order. It stops at the first failure, whether the canvas was already
//! failed, a drawing call fails, or an unknown command tag turns up.

use kurbo::Point;

use crate::canvas::{Canvas, PaintStyle};
use crate::error::{DrawError, DrawResult};
use crate::types::{PathCommand, PathSet, Transform};

// ---------------------------------------------------------------------------
// Pass state
// ---------------------------------------------------------------------------

/// Mutable cursor state for one pass. Created fresh per call to
/// [`interpret`], never shared.
struct PassState {
    /// Last destination-space point produced.
    current: Point,
    /// Destination-space target of the current subpath's `MoveTo`.
    start: Point,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Draw every subpath of `paths` onto `canvas`, mapping source coordinates
/// through `transform`.
///
/// Drawing calls are issued in strict command order, one call per command.
/// The first failure halts the pass: a command in subpath *k* failing means
/// no calls are issued for any later command of *k* nor for subpaths
/// *k+1..n*. A canvas that is already failed produces
/// [`DrawError::CanvasFailure`] before any call is made.
///
/// `paths` and `transform` are read-only; all observable effects go through
/// `canvas`.
///
/// # Errors
///
/// - [`DrawError::UnsupportedCommand`] when a [`PathCommand::Unknown`] tag
///   is encountered.
/// - [`DrawError::CanvasFailure`] when the canvas is, or becomes, failed.
///   The canvas keeps the authoritative diagnostic in that case.
pub fn interpret<C: Canvas + ?Sized>(
    paths: &PathSet,
    transform: Transform,
    canvas: &mut C,
) -> DrawResult<()> {
    let mut state = PassState {
        current: Point::ZERO,
        start: Point::ZERO,
    };

    for subpath in &paths.subpaths {
        for command in &subpath.commands {
            // A canvas can be failed before this pass ever touches it.
            if !canvas.is_ok() {
                return Err(DrawError::CanvasFailure);
            }
            run_command(command, transform, canvas, &mut state)?;
        }
    }

    Ok(())
}

/// Execute one command: resolve destination coordinates, dispatch the
/// canvas call, update the cursor state.
fn run_command<C: Canvas + ?Sized>(
    command: &PathCommand,
    transform: Transform,
    canvas: &mut C,
    state: &mut PassState,
) -> DrawResult<()> {
    match *command {
        PathCommand::MoveTo(p) => {
            let dest = transform.apply(p);
            canvas.move_to(dest)?;
            state.current = dest;
            state.start = dest;
        }
        PathCommand::LineTo(p) => {
            let dest = transform.apply(p);
            canvas.line_to(state.current, dest)?;
            state.current = dest;
        }
        PathCommand::HorizontalLineTo(x) => {
            // Substitute the current destination y, not just ignore it: the
            // emitted call carries a full point.
            let dest = Point::new(transform.apply_x(x), state.current.y);
            canvas.line_to(state.current, dest)?;
            state.current = dest;
        }
        PathCommand::VerticalLineTo(y) => {
            let dest = Point::new(state.current.x, transform.apply_y(y));
            canvas.line_to(state.current, dest)?;
            state.current = dest;
        }
        PathCommand::CubicCurveTo { c1, c2, end } => {
            let c1 = transform.apply(c1);
            let c2 = transform.apply(c2);
            let end = transform.apply(end);
            canvas.cubic_bezier_to(state.current, c1, end, c2, PaintStyle::Stroke)?;
            state.current = end;
        }
        PathCommand::QuadraticCurveTo { ctrl, end } => {
            let ctrl = transform.apply(ctrl);
            let end = transform.apply(end);
            canvas.quadratic_bezier_to(state.current, ctrl, end, PaintStyle::Stroke)?;
            state.current = end;
        }
        PathCommand::ClosePath => {
            canvas.line_to(state.current, state.start)?;
            state.current = state.start;
        }
        PathCommand::Unknown(tag) => {
            return Err(DrawError::UnsupportedCommand { tag });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
