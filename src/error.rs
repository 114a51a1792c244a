use crate::Grid;
use std::fmt;

/// Broad classes of [`Error`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested item does not exist; no data was produced.
    NotFound,

    /// A precondition on the arguments was violated.
    InvalidArgument,
}

/// Errors returned by dataset generation and boundary sampling.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The dataset name does not match any known generator.
    DatasetNotFound { name: String },

    /// A grid must have at least one cell per side.
    ZeroDensity,

    /// A boundary cache needs at least one node.
    NoNodes,

    /// The same node id was given twice.
    DuplicateNode { id: String },

    /// A boundary cache was reused with a grid it was not allocated for.
    GridMismatch { expected: Grid, actual: Grid },

    /// Input sets don't have matching lengths.
    InputLenMismatch { expected: usize, actual: usize },

    /// The matrix must be square.
    NotSquare { rows: usize, cols: usize },

    /// A reduction factor of zero was given.
    ZeroFactor,

    /// The side of the matrix is not a multiple of the reduction factor.
    IndivisibleReduction { len: usize, factor: usize },

    /// There is nothing to split.
    EmptyDataset,

    /// A fraction outside of `[0, 1]` was given.
    InvalidFraction(f64),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DatasetNotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DatasetNotFound { name } => write!(f, "unknown dataset {name:?}"),
            Error::ZeroDensity => write!(f, "grid density must be strictly positive"),
            Error::NoNodes => write!(f, "no node to sample"),
            Error::DuplicateNode { id } => write!(f, "node {id:?} given more than once"),
            Error::GridMismatch { expected, actual } => write!(
                f,
                "cache was allocated for a {0}x{0} grid over {1:?}, got a {2}x{2} grid over {3:?}",
                expected.density(),
                expected.domain(),
                actual.density(),
                actual.domain(),
            ),
            Error::InputLenMismatch { expected, actual } => write!(
                f,
                "input sets don't have the same length (expected {expected} items, got {actual})",
            ),
            Error::NotSquare { rows, cols } => {
                write!(f, "expected a square matrix, got {rows}x{cols}")
            }
            Error::ZeroFactor => write!(f, "reduction factor must be strictly positive"),
            Error::IndivisibleReduction { len, factor } => write!(
                f,
                "matrix side {len} is not divisible by the reduction factor {factor}",
            ),
            Error::EmptyDataset => write!(f, "dataset is empty"),
            Error::InvalidFraction(fraction) => {
                write!(f, "fraction {fraction} is not within [0, 1]")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let not_found = Error::DatasetNotFound {
            name: String::from("moons"),
        };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(Error::ZeroDensity.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::NoNodes.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::InputLenMismatch {
                expected: 4,
                actual: 3
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_display() {
        let err = Error::DatasetNotFound {
            name: String::from("moons"),
        };
        assert_eq!(err.to_string(), "unknown dataset \"moons\"");
        let err = Error::GridMismatch {
            expected: Grid::new(2, [-6.0, 6.0]).unwrap(),
            actual: Grid::new(3, [-1.0, 1.0]).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "cache was allocated for a 2x2 grid over [-6.0, 6.0], got a 3x3 grid over [-1.0, 1.0]"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = Error::IndivisibleReduction { len: 10, factor: 3 };
        assert_eq!(
            err.to_string(),
            "matrix side 10 is not divisible by the reduction factor 3"
        );
    }
}
