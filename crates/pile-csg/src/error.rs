//! Error types for geometry construction.

use std::error::Error;
use std::fmt;

/// Errors from constructing geometry objects.
#[derive(Clone, Debug, PartialEq)]
pub enum CsgError {
    /// A lattice was given an empty universe array.
    EmptyLattice,
    /// A lattice row does not match the width of the first row.
    RaggedLattice {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// The expected length.
        expected: usize,
    },
    /// A lattice pitch component is zero, negative, or NaN.
    NonPositivePitch {
        /// The offending pitch value.
        pitch: f64,
    },
}

impl fmt::Display for CsgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice universe array is empty"),
            Self::RaggedLattice { row, len, expected } => {
                write!(
                    f,
                    "lattice row {row} has {len} universes, expected {expected}"
                )
            }
            Self::NonPositivePitch { pitch } => {
                write!(f, "lattice pitch must be positive, got {pitch}")
            }
        }
    }
}

impl Error for CsgError {}
