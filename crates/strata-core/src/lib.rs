//! Core types for the Strata cellular automaton pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Strata workspace:
//! cell symbols, rule descriptors, the rule transition table, and the
//! error types for rule construction and lookup.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod rule;
pub mod rules;

pub use error::RuleError;
pub use rule::{Rule, RuleTable, Symbol};
