//! Core types: path commands, subpaths, path sets, and the pass transform.

use kurbo::Point;

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Convenience alias for coordinate values.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

// ---------------------------------------------------------------------------
// PathCommand
// ---------------------------------------------------------------------------

/// A single drawing command within a subpath.
///
/// All coordinates are absolute, in source-local units; the interpreter maps
/// them to destination units through a [`Transform`]. Argument arity is
/// fixed per kind by the enum payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Begin a new figure at the given point. Also becomes the target of a
    /// later [`ClosePath`](Self::ClosePath).
    MoveTo(Point),
    /// Straight line from the current point to the given point.
    LineTo(Point),
    /// Cubic Bezier from the current point through two control points.
    CubicCurveTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// Curve endpoint.
        end: Point,
    },
    /// Quadratic Bezier from the current point through one control point.
    QuadraticCurveTo {
        /// The single control point.
        ctrl: Point,
        /// Curve endpoint.
        end: Point,
    },
    /// Horizontal line to the given x; y is substituted from the current
    /// point.
    HorizontalLineTo(Scalar),
    /// Vertical line to the given y; x is substituted from the current
    /// point.
    VerticalLineTo(Scalar),
    /// Straight line back to the start of the current subpath.
    ClosePath,
    /// An unrecognized command tag.
    ///
    /// Decoders that ingest path data from an untyped external format carry
    /// tags they do not understand through as `Unknown`; interpretation
    /// rejects them with [`DrawError::UnsupportedCommand`]. Statically
    /// constructed paths never contain this variant.
    ///
    /// [`DrawError::UnsupportedCommand`]: crate::error::DrawError::UnsupportedCommand
    Unknown(char),
}

// ---------------------------------------------------------------------------
// Subpath and PathSet
// ---------------------------------------------------------------------------

/// An ordered sequence of [`PathCommand`]s.
///
/// Order is semantically significant: each command's effect depends on the
/// point left behind by the previous one. By convention a subpath begins
/// with a [`PathCommand::MoveTo`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Subpath {
    pub commands: Vec<PathCommand>,
}

impl Subpath {
    /// Create an empty subpath.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a subpath from a command sequence.
    pub const fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Append a command.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }
}

/// An ordered collection of subpaths plus the source viewbox extent.
///
/// Subpaths are drawn independently; no subpath carries state into the
/// next. `width` and `height` describe the extent of the source coordinate
/// space. Interpretation ignores them, but callers typically derive the
/// scale factor from them (e.g. `desired_width / paths.width`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathSet {
    /// Source viewbox width, in source-local units.
    pub width: Scalar,
    /// Source viewbox height, in source-local units.
    pub height: Scalar,
    pub subpaths: Vec<Subpath>,
}

impl PathSet {
    /// Create an empty path set with the given viewbox extent.
    pub const fn new(width: Scalar, height: Scalar) -> Self {
        Self {
            width,
            height,
            subpaths: Vec::new(),
        }
    }

    /// Append a subpath.
    pub fn push(&mut self, subpath: Subpath) {
        self.subpaths.push(subpath);
    }
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// The scale-and-translate mapping from source-local path coordinates to
/// destination coordinates, immutable for one interpretation pass.
///
/// Source point (sx, sy) maps to `(origin.x + scale * sx,
/// origin.y + scale * sy)`. The origin is typically the host's current
/// drawing cursor; the scale converts source units to the host's unit of
/// measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Scalar,
    pub origin: Point,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        origin: Point::ZERO,
    };

    /// Create a transform from a scale factor and an origin point.
    pub const fn new(scale: Scalar, origin: Point) -> Self {
        Self { scale, origin }
    }

    /// Apply the transform to a point.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.apply_x(p.x), self.apply_y(p.y))
    }

    /// Map a source x coordinate to destination space.
    #[inline]
    pub fn apply_x(&self, x: Scalar) -> Scalar {
        self.scale.mul_add(x, self.origin.x)
    }

    /// Map a source y coordinate to destination space.
    #[inline]
    pub fn apply_y(&self, y: Scalar) -> Scalar {
        self.scale.mul_add(y, self.origin.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
