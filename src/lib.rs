//! Interpreter for pre-parsed "basic SVG" path data.
//!
//! A [`PathSet`] is a scale-independent description of 2D vector paths:
//! ordered subpaths made of move/line/curve/close commands. [`interpret`]
//! walks one path set and converts it into imperative drawing calls against
//! a [`Canvas`] capability, applying a uniform scale-and-translate
//! [`Transform`] along the way.
//!
//! Key design points:
//! - The command set is a closed enum; argument arity is enforced by
//!   construction, not checked at interpretation time.
//! - The canvas owns its own error state. Every drawing call returns a
//!   `Result`, and the interpreter stops at the first failure without
//!   restating the canvas's diagnostic.
//! - Quadratic curves are passed through as a distinct primitive; degree
//!   elevation, if any, is the canvas's business.
//!
//! Parsing the textual `d="..."` syntax is out of scope: path data is
//! assumed to arrive already decoded into [`PathCommand`] values.

pub mod canvas;
pub mod display_list;
pub mod error;
pub mod interpreter;
pub mod types;

pub use canvas::{Canvas, CanvasFault, CanvasResult, PaintStyle};
pub use display_list::{BoundingBox, CanvasOp, DisplayList};
pub use error::{DrawError, DrawResult};
pub use interpreter::interpret;
pub use types::{PathCommand, PathSet, Scalar, Subpath, Transform, EPSILON};
