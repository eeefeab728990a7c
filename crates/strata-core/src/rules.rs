//! Preset elementary rules.
//!
//! Well-known binary radius-1 rule numbers plus a showcase candidate
//! list for callers that pick a rule at random rather than fixing one.

use crate::error::RuleError;
use crate::rule::Rule;

/// Rule 30 — chaotic; historically used for random number generation.
pub const RULE_30: u64 = 30;

/// Rule 54 — complex localized structures.
pub const RULE_54: u64 = 54;

/// Rule 90 — Sierpinski triangle from a single seed.
pub const RULE_90: u64 = 90;

/// Rule 110 — Turing complete; the default pattern generator.
pub const RULE_110: u64 = 110;

/// Rule 150 — additive, three-cell XOR.
pub const RULE_150: u64 = 150;

/// Rule 184 — traffic flow model.
pub const RULE_184: u64 = 184;

/// Candidate list for random rule selection: rules that produce
/// long-lived structured regions rather than uniform or frozen fields.
pub const SHOWCASE: &[u64] = &[
    RULE_30, RULE_54, RULE_90, RULE_110, RULE_150, RULE_184, 60, 122, 126, 182,
];

/// Construct a binary radius-1 (elementary) rule.
///
/// # Errors
///
/// [`RuleError::NumberOutOfRange`] if `number > 255`.
pub fn elementary(number: u64) -> Result<Rule, RuleError> {
    Rule::new(number as u128, 1, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_rules_all_valid() {
        for &n in SHOWCASE {
            assert!(elementary(n).is_ok(), "rule {n}");
        }
    }

    #[test]
    fn elementary_rejects_past_255() {
        assert!(elementary(255).is_ok());
        assert!(elementary(256).is_err());
    }
}
