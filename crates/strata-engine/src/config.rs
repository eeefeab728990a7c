//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] is the builder-input for a
//! [`SimulationSession`](crate::session::SimulationSession).
//! [`validate()`](SessionConfig::validate) checks structural invariants
//! up front so that a constructed session never starts from a state it
//! cannot run.

use std::error::Error;
use std::fmt;

use strata_core::{Rule, Symbol};
use strata_label::{Color, Connectivity, Palette};

use crate::seed::SeedStrategy;

// ── RuleSelection ───────────────────────────────────────────────────

/// How the session obtains its rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleSelection {
    /// Use exactly this rule.
    Fixed(Rule),
    /// Pick one rule uniformly from this list with the session's RNG.
    Candidates(Vec<Rule>),
}

impl RuleSelection {
    fn rules(&self) -> &[Rule] {
        match self {
            Self::Fixed(rule) => std::slice::from_ref(rule),
            Self::Candidates(rules) => rules,
        }
    }
}

// ── SessionMode ─────────────────────────────────────────────────────

/// Batch or streaming operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    /// Materialize a complete diagram of `steps` rows (the seed row is
    /// row 0), label once, color once.
    Batch {
        /// Height of the finished diagram, including the seed row.
        steps: usize,
    },
    /// Indefinite scrolling: keep a FIFO window of the last `window`
    /// rows and re-label it every tick.
    Streaming {
        /// Window depth in rows.
        window: usize,
    },
}

// ── ConfigError ─────────────────────────────────────────────────────

/// Errors detected during [`SessionConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Row length is zero.
    ZeroRowLength,
    /// Batch step count is zero.
    ZeroSteps,
    /// Streaming window depth is zero.
    ZeroWindowDepth,
    /// The candidate rule list is empty.
    EmptyCandidates,
    /// The designated active symbol is outside a selectable rule's
    /// alphabet, so labeling could never match any cell.
    ActiveOutsideAlphabet {
        /// The configured active symbol.
        active: Symbol,
        /// The offending rule's alphabet size.
        alphabet: u8,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRowLength => write!(f, "row length must be >= 1"),
            Self::ZeroSteps => write!(f, "batch step count must be >= 1"),
            Self::ZeroWindowDepth => write!(f, "streaming window depth must be >= 1"),
            Self::EmptyCandidates => write!(f, "candidate rule list is empty"),
            Self::ActiveOutsideAlphabet { active, alphabet } => {
                write!(f, "active symbol {active} outside alphabet [0, {alphabet})")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SessionConfig ───────────────────────────────────────────────────

/// Complete input for constructing a simulation session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Rule selection: fixed triple or candidate list.
    pub selection: RuleSelection,
    /// Fixed row length `L` for the session's lifetime.
    pub row_len: usize,
    /// Batch or streaming operation.
    pub mode: SessionMode,
    /// Seed-row strategy.
    pub seed_strategy: SeedStrategy,
    /// Labeling connectivity; the default keeps hard column edges.
    pub connectivity: Connectivity,
    /// The symbol eligible for component labeling.
    pub active: Symbol,
    /// Palette for foreground components.
    pub palette: Palette,
    /// Background color for label 0 and the largest component.
    pub background: Color,
    /// Seed for the session's deterministic RNG.
    pub seed: u64,
}

impl SessionConfig {
    /// A config with conventional defaults: uniform-random seeding,
    /// no-wrap labeling, active symbol 1, stock palette on black.
    pub fn new(selection: RuleSelection, row_len: usize, mode: SessionMode) -> Self {
        Self {
            selection,
            row_len,
            mode,
            seed_strategy: SeedStrategy::default(),
            connectivity: Connectivity::default(),
            active: 1,
            palette: Palette::default(),
            background: Color::BLACK,
            seed: 0,
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// The first violated invariant, as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_len == 0 {
            return Err(ConfigError::ZeroRowLength);
        }
        match self.mode {
            SessionMode::Batch { steps: 0 } => return Err(ConfigError::ZeroSteps),
            SessionMode::Streaming { window: 0 } => return Err(ConfigError::ZeroWindowDepth),
            _ => {}
        }
        if self.selection.rules().is_empty() {
            return Err(ConfigError::EmptyCandidates);
        }
        for rule in self.selection.rules() {
            if self.active >= rule.alphabet() {
                return Err(ConfigError::ActiveOutsideAlphabet {
                    active: self.active,
                    alphabet: rule.alphabet(),
                });
            }
        }
        Ok(())
    }
}
