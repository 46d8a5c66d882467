//! Error types for path interpretation.

use std::fmt;

use crate::canvas::CanvasFault;

/// An error that terminates an interpretation pass.
///
/// Neither condition is recoverable within the pass: the interpreter halts
/// at the point of failure and issues no further canvas calls. A caller
/// that wants to retry must re-run the pass from scratch against a clean
/// canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// An unrecognized path command tag was encountered.
    UnsupportedCommand {
        /// The offending tag.
        tag: char,
    },
    /// The canvas reported failure, either before the pass started or in
    /// response to a drawing call. The canvas owns the authoritative
    /// diagnostic; this variant carries no message of its own.
    CanvasFailure,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCommand { tag } => {
                write!(f, "unexpected path command '{tag}'")
            }
            Self::CanvasFailure => write!(f, "canvas failure"),
        }
    }
}

impl std::error::Error for DrawError {}

impl From<CanvasFault> for DrawError {
    fn from(_: CanvasFault) -> Self {
        Self::CanvasFailure
    }
}

/// Convenience type alias for results using [`DrawError`].
pub type DrawResult<T> = Result<T, DrawError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
