//! Component-code classification.
//!
//! The grammar is deliberately independent of the supported vocabulary:
//! a code is parametrized iff it carries the `"AR"` prefix, and
//! everything else passes through as a simple code for the registry to
//! accept or reject. Unknown simple codes are therefore not a parse
//! error.

use crate::error::CodeError;

/// Prefix marking a variable-height absorber rod code.
pub const PARAMETRIZED_PREFIX: &str = "AR";

/// A classified cell code.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedCode {
    /// A fixed-vocabulary code, passed through verbatim.
    Simple(String),
    /// An absorber rod with a continuous insertion height.
    AbsorberRod {
        /// Rod tip elevation in cm.
        height: f64,
    },
}

impl ParsedCode {
    /// Classify a cell code.
    ///
    /// `"AR"` followed by a decimal number (optionally signed, optional
    /// fractional part) parses to [`ParsedCode::AbsorberRod`]; a bare
    /// or non-numeric remainder after `"AR"` fails with
    /// [`CodeError::MalformedParameter`]. Any other code is
    /// [`ParsedCode::Simple`].
    pub fn parse(code: &str) -> Result<Self, CodeError> {
        match code.strip_prefix(PARAMETRIZED_PREFIX) {
            Some(suffix) => suffix
                .parse::<f64>()
                .map(|height| Self::AbsorberRod { height })
                .map_err(|_| CodeError::MalformedParameter {
                    code: code.to_owned(),
                }),
            None => Ok(Self::Simple(code.to_owned())),
        }
    }
}
