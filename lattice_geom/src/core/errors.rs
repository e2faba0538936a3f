//! Error type shared by every fallible shape operation.
//!
//! Degenerate geometry (zero radius, zero length, zero area) is never an error. Errors only
//! come from invalid path command sequencing and from mutators called through a read only
//! view. A failed call never leaves partial state behind.

use thiserror::Error;

/// Error returned by fallible shape operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A drawing command was issued on a path that has no `move_to` yet.
    #[error("`{operation}` requires a preceding move_to")]
    MissingMoveTo {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// An operation that edits the last element was called on a path without elements.
    #[error("`{operation}` called on a path without elements")]
    EmptyPath {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// Mutator called through an unmodifiable view.
    #[error("`{operation}` is not supported on an unmodifiable shape")]
    NotSupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// A multi shape was offered where only a simple shape may be stored.
    #[error("multi shapes cannot be nested")]
    NestedMultiShape,
}

impl ShapeError {
    /// Returns `true` if the error reports an operation called in an invalid state
    /// (sequencing errors on paths, nesting of multi shapes).
    pub fn is_illegal_state(&self) -> bool {
        matches!(
            self,
            ShapeError::MissingMoveTo { .. }
                | ShapeError::EmptyPath { .. }
                | ShapeError::NestedMultiShape
        )
    }

    /// Returns `true` if the error reports a mutation attempted through a read only view.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, ShapeError::NotSupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        let err = ShapeError::MissingMoveTo {
            operation: "line_to",
        };
        assert!(err.is_illegal_state());
        assert!(!err.is_not_supported());
        assert_eq!(err.to_string(), "`line_to` requires a preceding move_to");

        let err = ShapeError::NotSupported {
            operation: "translate",
        };
        assert!(err.is_not_supported());
        assert!(!err.is_illegal_state());
    }
}
