//! Error types for the lattice specification compiler.
//!
//! One enum per subsystem: normalization, code parsing, registry
//! resolution, and the single-assembly path. [`CompileError`] wraps the
//! subsystem errors without translating them — its `Display` delegates
//! and `source()` exposes the original, so callers always see the
//! original error kind. Nothing is downgraded to a warning and nothing
//! retries: an invalid specification must never silently become a
//! plausible-looking model.

use pile_csg::CsgError;
use std::error::Error;
use std::fmt;

/// Errors from grid normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NormalizeError {
    /// A grid row exceeds the fixed maximum width.
    RowTooLong {
        /// Index of the offending row.
        row: usize,
        /// Number of codes in it.
        len: usize,
    },
    /// Post-padding row count is not exactly the grid size.
    ///
    /// Reached only when the input has more rows than the grid holds;
    /// for any narrower input the padding loop guarantees the count.
    ReformatInvariant {
        /// The row count that was produced.
        rows: usize,
    },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowTooLong { row, len } => {
                write!(
                    f,
                    "lattice row {row} has {len} codes; all rows must be of length 8 or shorter"
                )
            }
            Self::ReformatInvariant { rows } => {
                write!(f, "reformatting produced {rows} rows instead of 8")
            }
        }
    }
}

impl Error for NormalizeError {}

/// Errors from component-code parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeError {
    /// An `"AR"`-prefixed code whose remainder is not a number.
    MalformedParameter {
        /// The full offending code.
        code: String,
    },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedParameter { code } => {
                write!(f, "'{code}' has no parseable insertion height after 'AR'")
            }
        }
    }
}

impl Error for CodeError {}

/// Errors from builder-registry resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// A simple code with no registered builder.
    UnknownComponentCode {
        /// The offending code.
        code: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownComponentCode { code } => {
                write!(f, "'{code}' is not a known lattice unit type")
            }
        }
    }
}

impl Error for ResolveError {}

/// Errors from the direct single-assembly construction path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssemblyError {
    /// The code is not in the component vocabulary at all.
    UnknownComponentCode {
        /// The offending code.
        code: String,
    },
    /// The code is valid vocabulary but does not denote a fuel
    /// assembly.
    InvalidFuelAssemblyType {
        /// The offending code.
        code: String,
    },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownComponentCode { code } => {
                write!(f, "'{code}' is not a known lattice unit type")
            }
            Self::InvalidFuelAssemblyType { code } => {
                write!(f, "'{code}' is not a known fuel assembly type")
            }
        }
    }
}

impl Error for AssemblyError {}

/// Any failure of a full lattice compilation.
///
/// Purely a propagation wrapper: `Display` shows the underlying message
/// verbatim and `source()` returns the underlying error.
#[derive(Clone, Debug, PartialEq)]
pub enum CompileError {
    /// Grid normalization failed.
    Normalize(NormalizeError),
    /// A cell code failed to parse.
    Code(CodeError),
    /// A cell code failed to resolve to a builder.
    Resolve(ResolveError),
    /// Assembling the lattice geometry failed.
    Geometry(CsgError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normalize(e) => e.fmt(f),
            Self::Code(e) => e.fmt(f),
            Self::Resolve(e) => e.fmt(f),
            Self::Geometry(e) => e.fmt(f),
        }
    }
}

impl Error for CompileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Normalize(e) => Some(e),
            Self::Code(e) => Some(e),
            Self::Resolve(e) => Some(e),
            Self::Geometry(e) => Some(e),
        }
    }
}

impl From<NormalizeError> for CompileError {
    fn from(e: NormalizeError) -> Self {
        Self::Normalize(e)
    }
}

impl From<CodeError> for CompileError {
    fn from(e: CodeError) -> Self {
        Self::Code(e)
    }
}

impl From<ResolveError> for CompileError {
    fn from(e: ResolveError) -> Self {
        Self::Resolve(e)
    }
}

impl From<CsgError> for CompileError {
    fn from(e: CsgError) -> Self {
        Self::Geometry(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_display_is_the_inner_message() {
        let inner = NormalizeError::RowTooLong { row: 0, len: 9 };
        let wrapped = CompileError::from(inner.clone());
        assert_eq!(wrapped.to_string(), inner.to_string());
    }

    #[test]
    fn compile_error_source_exposes_the_original_kind() {
        let wrapped = CompileError::from(CodeError::MalformedParameter {
            code: "ARx".to_owned(),
        });
        let source = wrapped.source().expect("source must be present");
        assert!(source.downcast_ref::<CodeError>().is_some());
    }
}
