//! Error types for map construction and path bookkeeping.

use crate::coord::Coord;
use std::fmt;

/// Errors raised while validating a grid or a start/end coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// Input had the wrong shape or type, e.g. a coordinate component that is
    /// not an integer.
    TypeMismatch { reason: String },
    /// Input had the right type but an unacceptable value: an unknown cell
    /// label, a negative component, a coordinate of the wrong arity or an end
    /// equal to the start.
    InvalidValue { reason: String },
    /// The coordinate lies beyond the grid. `row_len` is the length of the
    /// addressed row if that row exists.
    OutOfBounds {
        coord: Coord,
        rows: usize,
        row_len: Option<usize>,
    },
    /// The coordinate is in bounds but lands on impassable terrain.
    InvalidTerrain { coord: Coord },
}

impl MapError {
    pub(crate) fn type_mismatch(reason: impl Into<String>) -> MapError {
        MapError::TypeMismatch {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_value(reason: impl Into<String>) -> MapError {
        MapError::InvalidValue {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { reason } => write!(f, "type mismatch: {reason}"),
            Self::InvalidValue { reason } => write!(f, "invalid value: {reason}"),
            Self::OutOfBounds {
                coord,
                rows,
                row_len: Some(len),
            } => write!(
                f,
                "coordinate {coord} out of bounds: grid has {rows} rows and row {} has {len} cells",
                coord.row
            ),
            Self::OutOfBounds {
                coord,
                rows,
                row_len: None,
            } => write!(f, "coordinate {coord} out of bounds: grid has {rows} rows"),
            Self::InvalidTerrain { coord } => {
                write!(f, "coordinate {coord} lands on impassable terrain")
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Misuse of a [CoordStack](crate::coord_stack::CoordStack). A correct search
/// never produces one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
    /// Attempted to pop from a stack with no elements.
    Empty,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot pop from an empty coordinate stack"),
        }
    }
}

impl std::error::Error for StackError {}
