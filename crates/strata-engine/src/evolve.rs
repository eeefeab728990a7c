//! One evolution step of a row under a rule table.
//!
//! The row is topologically a ring: neighborhood indices wrap at both
//! ends, so cell 0 and cell `L - 1` are adjacent during evolution
//! (labeling downstream deliberately does not share this topology).

use smallvec::SmallVec;
use strata_core::{RuleError, RuleTable, Symbol};

/// Evolve `row` one generation into `out`, reusing its allocation.
///
/// For each position `i`, the neighborhood
/// `row[(i - radius) mod L] ..= row[(i + radius) mod L]` is looked up
/// in `table` and the result written to `out[i]`. The output length
/// always equals the input length. Pure: identical inputs produce
/// identical outputs.
///
/// # Errors
///
/// [`RuleError::SymbolOutOfRange`] if the row holds a symbol outside
/// the table's alphabet. The table itself is total, so a well-formed
/// row never fails.
pub fn evolve_into(
    row: &[Symbol],
    table: &RuleTable,
    out: &mut Vec<Symbol>,
) -> Result<(), RuleError> {
    let len = row.len() as isize;
    let radius = table.radius() as isize;
    let width = table.pattern_len();

    out.clear();
    out.reserve(row.len());

    let mut pattern: SmallVec<[Symbol; 8]> = SmallVec::with_capacity(width);
    for i in 0..len {
        pattern.clear();
        for j in 0..width as isize {
            let idx = (i + j - radius).rem_euclid(len) as usize;
            pattern.push(row[idx]);
        }
        out.push(table.lookup(&pattern)?);
    }
    Ok(())
}

/// Allocating convenience wrapper around [`evolve_into`].
pub fn evolve(row: &[Symbol], table: &RuleTable) -> Result<Vec<Symbol>, RuleError> {
    let mut out = Vec::with_capacity(row.len());
    evolve_into(row, table, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strata_core::RuleTable;

    fn rule_110() -> RuleTable {
        RuleTable::build(110, 1, 2).unwrap()
    }

    #[test]
    fn single_center_seed_one_step() {
        // Hand-derived from the rule 110 truth table.
        let next = evolve(&[0, 0, 1, 0, 0], &rule_110()).unwrap();
        assert_eq!(next, vec![0, 1, 1, 0, 0]);
    }

    #[test]
    fn position_zero_wraps_to_last_cell() {
        // Neighborhood of position 0 is (row[6], row[0], row[1]) =
        // (1, 1, 0), which rule 110 maps to 1.
        let next = evolve(&[1, 0, 0, 0, 0, 0, 1], &rule_110()).unwrap();
        assert_eq!(next[0], 1);
        // Position 6 sees (row[5], row[6], row[0]) = (0, 1, 1) → 1.
        assert_eq!(next[6], 1);
    }

    #[test]
    fn length_preserved() {
        for len in [1, 2, 3, 7, 64] {
            let row = vec![0 as Symbol; len];
            assert_eq!(evolve(&row, &rule_110()).unwrap().len(), len);
        }
    }

    #[test]
    fn radius_2_wraps_both_sides() {
        // Rule 1 at radius 2: only the all-zero 5-cell pattern maps to
        // 1. A lone active cell poisons every neighborhood within two
        // cells of it, wrapping around the ring.
        let table = RuleTable::build(1, 2, 2).unwrap();
        let next = evolve(&[1, 0, 0, 0, 0, 0], &table).unwrap();
        assert_eq!(next, vec![0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn corrupt_symbol_surfaces_lookup_failure() {
        let err = evolve(&[0, 3, 0], &rule_110()).unwrap_err();
        assert!(matches!(err, RuleError::SymbolOutOfRange { symbol: 3, .. }));
    }

    proptest! {
        /// Evolution is a pure function of (row, table).
        #[test]
        fn evolve_is_pure(
            row in proptest::collection::vec(0u8..2, 1..64),
            number in 0u16..256,
        ) {
            let table = RuleTable::build(number as u128, 1, 2).unwrap();
            let a = evolve(&row, &table).unwrap();
            let b = evolve(&row, &table).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.len(), row.len());
        }

        /// Output symbols stay inside the alphabet.
        #[test]
        fn outputs_stay_in_alphabet(
            row in proptest::collection::vec(0u8..3, 1..48),
            number in 0u64..1_000_000,
        ) {
            let table = RuleTable::build(number as u128, 1, 3).unwrap();
            let next = evolve(&row, &table).unwrap();
            prop_assert!(next.iter().all(|&s| s < 3));
        }
    }
}
