//! Evolution engine, space-time buffer, and session orchestration for
//! the Strata cellular automaton pipeline.
//!
//! The pipeline per tick is: evolve the current row under the rule
//! table ([`evolve()`](evolve::evolve)), append it to the
//! [`SpaceTimeBuffer`], re-label
//! the visible buffer, re-colorize, and hand the resulting
//! [`Frame`](session::Frame) to the external renderer. The
//! [`SimulationSession`](session::SimulationSession) owns every piece
//! of that state; there are no ambient globals.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod evolve;
pub mod metrics;
pub mod seed;
pub mod session;

pub use buffer::{BufferError, SpaceTimeBuffer};
pub use config::{ConfigError, RuleSelection, SessionConfig, SessionMode};
pub use evolve::{evolve, evolve_into};
pub use metrics::TickMetrics;
pub use seed::{pick_rule, seed_row, SeedStrategy};
pub use session::{Frame, SessionError, SimulationSession};
