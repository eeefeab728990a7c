//! Rule descriptors and the neighborhood transition table.
//!
//! A [`Rule`] is the triple `(number, radius, alphabet)` identifying one
//! cellular automaton. Its [`RuleTable`] is the materialized total
//! function from every neighborhood pattern to an output symbol, stored
//! as a flat array indexed by the pattern's base-`alphabet` encoding.
//!
//! # Numbering convention
//!
//! The canonical (Wolfram) convention is used: write the rule number in
//! base `alphabet` with exactly `alphabet^(2*radius+1)` digits, most
//! significant first, zero-padded on the left; the lexicographically
//! greatest pattern maps to the most significant digit. Equivalently,
//! the pattern whose encoded integer value is `p` maps to the digit at
//! base-`alphabet` place `p`. For `radius = 1, alphabet = 2` this is
//! exactly the classic 8-row truth table (rule 110: `111→0, 110→1,
//! 101→1, 100→0, 011→1, 010→1, 001→1, 000→0`). The alternate LSB-first
//! convention is incompatible and deliberately not supported.

use crate::error::RuleError;

/// A cell state. Symbols are small non-negative integers in
/// `[0, alphabet)`; symbol `1` is the conventional "active" state.
pub type Symbol = u8;

// ── Rule ────────────────────────────────────────────────────────────

/// A validated cellular automaton rule descriptor.
///
/// Construction via [`Rule::new`] enforces every invariant, so a `Rule`
/// in hand can always be tabulated. Fields are private to keep it that
/// way; use the accessors.
///
/// # Examples
///
/// ```
/// use strata_core::Rule;
///
/// let rule = Rule::new(110, 1, 2).unwrap();
/// assert_eq!(rule.pattern_len(), 3);
/// assert_eq!(rule.neighborhood_count(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    number: u128,
    radius: u32,
    alphabet: u8,
}

impl Rule {
    /// Largest transition table this crate will materialize, in entries.
    ///
    /// `alphabet^(2*radius+1)` beyond this bound is rejected at
    /// construction with [`RuleError::NeighborhoodSpaceTooLarge`].
    pub const MAX_TABLE_LEN: u128 = 1 << 28;

    /// Create a new rule, validating all three components.
    ///
    /// # Errors
    ///
    /// - [`RuleError::AlphabetTooSmall`] if `alphabet < 2`
    /// - [`RuleError::RadiusZero`] if `radius == 0`
    /// - [`RuleError::NeighborhoodSpaceTooLarge`] if
    ///   `alphabet^(2*radius+1)` exceeds [`Rule::MAX_TABLE_LEN`]
    /// - [`RuleError::NumberOutOfRange`] if `number` is not below
    ///   `alphabet^(alphabet^(2*radius+1))`, the count of total
    ///   functions over the neighborhood space
    pub fn new(number: u128, radius: u32, alphabet: u8) -> Result<Self, RuleError> {
        if alphabet < 2 {
            return Err(RuleError::AlphabetTooSmall { alphabet });
        }
        if radius == 0 {
            return Err(RuleError::RadiusZero);
        }

        let pattern_len = 2 * radius + 1;
        let neighborhoods = (alphabet as u128)
            .checked_pow(pattern_len)
            .filter(|&n| n <= Self::MAX_TABLE_LEN)
            .ok_or(RuleError::NeighborhoodSpaceTooLarge { alphabet, radius })?;

        // Number of total functions neighborhood → symbol. When this
        // overflows u128, every representable number is in range.
        let bound = u32::try_from(neighborhoods)
            .ok()
            .and_then(|n| (alphabet as u128).checked_pow(n));
        if let Some(bound) = bound {
            if number >= bound {
                return Err(RuleError::NumberOutOfRange { number, bound });
            }
        }

        Ok(Self {
            number,
            radius,
            alphabet,
        })
    }

    /// The rule number.
    pub fn number(&self) -> u128 {
        self.number
    }

    /// The neighborhood radius (cells on each side).
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// The alphabet size `k`; symbols are `[0, k)`.
    pub fn alphabet(&self) -> u8 {
        self.alphabet
    }

    /// Neighborhood width, `2*radius + 1`.
    pub fn pattern_len(&self) -> usize {
        (2 * self.radius + 1) as usize
    }

    /// Size of the neighborhood space, `alphabet^(2*radius+1)`.
    ///
    /// Fits in `usize`: construction bounds it by [`Rule::MAX_TABLE_LEN`].
    pub fn neighborhood_count(&self) -> usize {
        (self.alphabet as u128).pow(2 * self.radius + 1) as usize
    }

    /// Materialize this rule's transition table.
    pub fn table(&self) -> RuleTable {
        let k = self.alphabet as u128;
        let count = self.neighborhood_count();
        let mut outputs = Vec::with_capacity(count);

        // Peel base-k digits least significant first: the digit at
        // place p is exactly the output for the pattern encoded as p.
        let mut n = self.number;
        for _ in 0..count {
            outputs.push((n % k) as Symbol);
            n /= k;
        }
        debug_assert_eq!(n, 0, "rule number validated against bound at construction");

        RuleTable {
            outputs,
            radius: self.radius,
            alphabet: self.alphabet,
        }
    }
}

// ── RuleTable ───────────────────────────────────────────────────────

/// The materialized neighborhood → output transition table of a rule.
///
/// Immutable once built, and total: every well-formed pattern of
/// `2*radius + 1` symbols in `[0, alphabet)` has an output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    /// Output symbol for each pattern, indexed by the pattern's
    /// base-`alphabet` encoded integer value.
    outputs: Vec<Symbol>,
    radius: u32,
    alphabet: u8,
}

impl RuleTable {
    /// Validate `(number, radius, alphabet)` and build the table in one
    /// step. Equivalent to `Rule::new(..)?.table()`.
    pub fn build(number: u128, radius: u32, alphabet: u8) -> Result<Self, RuleError> {
        Ok(Rule::new(number, radius, alphabet)?.table())
    }

    /// The neighborhood radius this table was built for.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// The alphabet size this table was built for.
    pub fn alphabet(&self) -> u8 {
        self.alphabet
    }

    /// Neighborhood width, `2*radius + 1`.
    pub fn pattern_len(&self) -> usize {
        (2 * self.radius + 1) as usize
    }

    /// Number of table entries.
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Always `false`: the smallest valid table has `2^3` entries.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Look up the output symbol for a neighborhood pattern, leftmost
    /// symbol most significant.
    ///
    /// # Errors
    ///
    /// [`RuleError::SymbolOutOfRange`] if any pattern symbol is outside
    /// the alphabet. The table is total, so this is the only miss path.
    ///
    /// # Panics
    ///
    /// Panics if `pattern.len() != self.pattern_len()`; callers build
    /// patterns of exactly the table's width.
    pub fn lookup(&self, pattern: &[Symbol]) -> Result<Symbol, RuleError> {
        assert_eq!(
            pattern.len(),
            self.pattern_len(),
            "pattern width must match table radius"
        );
        let k = self.alphabet as usize;
        let mut index = 0usize;
        for &s in pattern {
            if s >= self.alphabet {
                return Err(RuleError::SymbolOutOfRange {
                    symbol: s,
                    alphabet: self.alphabet,
                });
            }
            index = index * k + s as usize;
        }
        Ok(self.outputs[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rule_110_truth_table() {
        let table = RuleTable::build(110, 1, 2).unwrap();
        let expect = [
            ([1, 1, 1], 0),
            ([1, 1, 0], 1),
            ([1, 0, 1], 1),
            ([1, 0, 0], 0),
            ([0, 1, 1], 1),
            ([0, 1, 0], 1),
            ([0, 0, 1], 1),
            ([0, 0, 0], 0),
        ];
        for (pattern, out) in expect {
            assert_eq!(table.lookup(&pattern).unwrap(), out, "pattern {pattern:?}");
        }
    }

    #[test]
    fn binary_radius_1_bounds() {
        // 2^(2^3) = 256 total functions.
        assert!(Rule::new(255, 1, 2).is_ok());
        assert_eq!(
            Rule::new(256, 1, 2),
            Err(RuleError::NumberOutOfRange {
                number: 256,
                bound: 256
            })
        );
    }

    #[test]
    fn alphabet_below_two_rejected() {
        assert_eq!(
            Rule::new(0, 1, 1),
            Err(RuleError::AlphabetTooSmall { alphabet: 1 })
        );
        assert_eq!(
            Rule::new(0, 1, 0),
            Err(RuleError::AlphabetTooSmall { alphabet: 0 })
        );
    }

    #[test]
    fn radius_zero_rejected() {
        assert_eq!(Rule::new(0, 0, 2), Err(RuleError::RadiusZero));
    }

    #[test]
    fn ternary_table_digits() {
        // Rule 5 base 3 is digits [2, 1] at places 0 and 1: pattern 0
        // maps to 2, pattern 1 maps to 1, everything above to 0.
        let table = RuleTable::build(5, 1, 3).unwrap();
        assert_eq!(table.len(), 27);
        assert_eq!(table.lookup(&[0, 0, 0]).unwrap(), 2);
        assert_eq!(table.lookup(&[0, 0, 1]).unwrap(), 1);
        assert_eq!(table.lookup(&[0, 0, 2]).unwrap(), 0);
        assert_eq!(table.lookup(&[2, 2, 2]).unwrap(), 0);
    }

    #[test]
    fn radius_2_table_len() {
        let table = RuleTable::build(0, 2, 2).unwrap();
        assert_eq!(table.len(), 32);
        assert_eq!(table.pattern_len(), 5);
    }

    #[test]
    fn huge_neighborhood_space_rejected() {
        // 2^(2*64+1) entries will not be tabulated.
        assert_eq!(
            Rule::new(0, 64, 2),
            Err(RuleError::NeighborhoodSpaceTooLarge {
                alphabet: 2,
                radius: 64
            })
        );
    }

    #[test]
    fn radius_3_binary_bound_saturates() {
        // 2^(2^7) overflows u128, so every number is valid.
        assert!(Rule::new(u128::MAX, 3, 2).is_ok());
    }

    #[test]
    fn symbol_outside_alphabet_fails_lookup() {
        let table = RuleTable::build(110, 1, 2).unwrap();
        assert_eq!(
            table.lookup(&[0, 2, 0]),
            Err(RuleError::SymbolOutOfRange {
                symbol: 2,
                alphabet: 2
            })
        );
    }

    proptest! {
        /// Every elementary rule's table matches direct bit extraction.
        #[test]
        fn elementary_table_matches_bits(number in 0u16..256) {
            let table = RuleTable::build(number as u128, 1, 2).unwrap();
            for p in 0u8..8 {
                let pattern = [(p >> 2) & 1, (p >> 1) & 1, p & 1];
                let expected = ((number >> p) & 1) as Symbol;
                prop_assert_eq!(table.lookup(&pattern).unwrap(), expected);
            }
        }

        /// Table outputs are always inside the alphabet.
        #[test]
        fn outputs_within_alphabet(number in 0u64..7_625_597_484_987u64) {
            // Bound is 3^27, the ternary radius-1 function count.
            let rule = Rule::new(number as u128, 1, 3).unwrap();
            let table = rule.table();
            for i in 0..27u8 {
                let pattern = [i / 9, (i / 3) % 3, i % 3];
                prop_assert!(table.lookup(&pattern).unwrap() < 3);
            }
        }
    }
}
