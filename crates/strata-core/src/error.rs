//! Error types for rule construction and table lookup.

use std::error::Error;
use std::fmt;

/// Errors from [`Rule`](crate::Rule) construction and
/// [`RuleTable`](crate::RuleTable) lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The alphabet must have at least two symbols.
    AlphabetTooSmall {
        /// The rejected alphabet size.
        alphabet: u8,
    },
    /// The neighborhood radius must be at least 1.
    RadiusZero,
    /// The rule number exceeds the number of total functions over the
    /// neighborhood space (`alphabet^(alphabet^(2*radius+1)) - 1`).
    NumberOutOfRange {
        /// The rejected rule number.
        number: u128,
        /// The exclusive upper bound on valid rule numbers.
        bound: u128,
    },
    /// The neighborhood space `alphabet^(2*radius+1)` does not fit in
    /// memory; no transition table can be materialized.
    NeighborhoodSpaceTooLarge {
        /// The alphabet size of the rejected rule.
        alphabet: u8,
        /// The radius of the rejected rule.
        radius: u32,
    },
    /// A neighborhood contained a symbol outside `[0, alphabet)`.
    ///
    /// The table is total over well-formed patterns, so this is the
    /// only way a lookup can miss. It indicates a corrupted row and is
    /// fatal to the evolution step that encountered it.
    SymbolOutOfRange {
        /// The offending symbol value.
        symbol: u8,
        /// The alphabet size of the table being consulted.
        alphabet: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphabetTooSmall { alphabet } => {
                write!(f, "alphabet size must be >= 2, got {alphabet}")
            }
            Self::RadiusZero => write!(f, "neighborhood radius must be >= 1"),
            Self::NumberOutOfRange { number, bound } => {
                write!(f, "rule number {number} not in [0, {bound})")
            }
            Self::NeighborhoodSpaceTooLarge { alphabet, radius } => {
                write!(
                    f,
                    "neighborhood space {alphabet}^(2*{radius}+1) too large to tabulate"
                )
            }
            Self::SymbolOutOfRange { symbol, alphabet } => {
                write!(f, "symbol {symbol} outside alphabet [0, {alphabet})")
            }
        }
    }
}

impl Error for RuleError {}
