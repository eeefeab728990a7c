//! Strata: a cellular automaton space-time pipeline.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Strata sub-crates. For most users, adding `strata` as a
//! single dependency is sufficient.
//!
//! The pipeline: a rule number becomes a transition table
//! ([`types::RuleTable`]), a seed row evolves on a ring into a
//! space-time diagram ([`engine::SpaceTimeBuffer`]), the diagram's
//! active cells partition into 4-connected components
//! ([`label::label()`](strata_label::label::label)), and each component
//! resolves to a color with the largest suppressed as background
//! ([`label::assign()`](strata_label::color::assign)). An external
//! renderer consumes the resulting [`engine::Frame`]; nothing in here
//! draws, persists, or talks to a network.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // Rule 110 on a 60-cell ring, scrolling a 30-row window.
//! let mut config = SessionConfig::new(
//!     RuleSelection::Fixed(rules::elementary(110).unwrap()),
//!     60,
//!     SessionMode::Streaming { window: 30 },
//! );
//! config.seed = 7;
//!
//! let mut session = SimulationSession::new(config).unwrap();
//! for _ in 0..30 {
//!     let frame = session.tick().unwrap();
//!     // A renderer would now fill one rect per cell with
//!     // frame.colors[&frame.labels.get(row, col)].
//!     assert_eq!(frame.cols, 60);
//! }
//! assert_eq!(session.last_metrics().rows_visible, 30);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Symbols, rules, transition tables, rule presets |
//! | [`engine`] | `strata-engine` | Evolution, buffers, seeding, sessions, metrics |
//! | [`label`] | `strata-label` | Component labeling, palettes, color maps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: symbols, rules, transition tables (`strata-core`).
pub use strata_core as types;

/// Evolution engine, buffers, and sessions (`strata-engine`).
pub use strata_engine as engine;

/// Component labeling and color assignment (`strata-label`).
pub use strata_label as label;

/// Rule presets, re-exported from `strata-core` for convenience.
pub use strata_core::rules;

/// The most commonly used items across the workspace.
pub mod prelude {
    pub use strata_core::{rules, Rule, RuleError, RuleTable, Symbol};
    pub use strata_engine::{
        evolve, Frame, RuleSelection, SeedStrategy, SessionConfig, SessionError, SessionMode,
        SimulationSession, SpaceTimeBuffer, TickMetrics,
    };
    pub use strata_label::{
        assign, label, Color, ColorMap, ComponentRegistry, Connectivity, LabelGrid, Labeling,
        Palette,
    };
}
