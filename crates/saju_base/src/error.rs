//! Error types for symbol parsing.
//!
//! The pillar engine is total and never returns these; they only arise
//! when converting user-supplied names or raw indices into cycle types.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from cycle-symbol conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CycleError {
    /// Name is not a known stem, branch or stem-branch pair.
    UnknownSymbol(String),
    /// Stem and branch differ in parity and never meet in the 60-cycle.
    ParityMismatch { stem: u8, branch: u8 },
    /// Raw index outside the cycle.
    IndexOutOfRange(i64),
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol(s) => write!(f, "unknown cycle symbol: {s}"),
            Self::ParityMismatch { stem, branch } => {
                write!(f, "stem {stem} and branch {branch} never pair (parity differs)")
            }
            Self::IndexOutOfRange(i) => write!(f, "cycle index out of range: {i}"),
        }
    }
}

impl Error for CycleError {}
