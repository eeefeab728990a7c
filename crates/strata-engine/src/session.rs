//! The simulation session: one automaton, one buffer, one pipeline.
//!
//! [`SimulationSession`] owns everything a run needs — rule and table
//! (built once, read-only), the current row, the space-time buffer, the
//! labeling and coloring configuration, and a seeded RNG. Each
//! [`tick()`](SimulationSession::tick) performs evolve → re-label →
//! re-colorize and returns a [`Frame`] for the external renderer; the
//! next tick must not begin until that frame has been consumed, which
//! `&mut self` enforces at compile time.
//!
//! Labeling and coloring are never incremental: rows entering or
//! leaving the window can merge or split components non-locally, so
//! every tick recomputes both over the whole visible buffer.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use strata_core::{Rule, RuleError, RuleTable, Symbol};
use strata_label::{assign, label, Color, ColorMap, Connectivity, LabelError, LabelGrid, Palette};

use crate::buffer::SpaceTimeBuffer;
use crate::config::{ConfigError, RuleSelection, SessionConfig, SessionMode};
use crate::evolve::evolve_into;
use crate::metrics::TickMetrics;
use crate::seed::{pick_rule, seed_row, SeedStrategy};

// ── Frame ───────────────────────────────────────────────────────────

/// One tick's renderable output.
///
/// The renderer maps each `(row, col)` to a rectangle of its chosen
/// cell size and fills it with `colors[labels.get(row, col)]`; cell
/// geometry, device pixels, and redraw timing are its business alone.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Per-cell component ids over the visible buffer.
    pub labels: LabelGrid,
    /// Label id → color, including label 0 and the background
    /// component.
    pub colors: ColorMap,
    /// Visible row count.
    pub rows: usize,
    /// Column count (the session's fixed row length).
    pub cols: usize,
}

// ── SessionError ────────────────────────────────────────────────────

/// Errors from a running session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Evolution hit a corrupted row (table lookup failure).
    Rule(RuleError),
    /// Labeling rejected the buffer snapshot.
    Label(LabelError),
    /// The operation is only available in the named mode.
    ModeMismatch {
        /// The mode the operation requires.
        required: &'static str,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(e) => write!(f, "evolution failed: {e}"),
            Self::Label(e) => write!(f, "labeling failed: {e}"),
            Self::ModeMismatch { required } => {
                write!(f, "operation requires {required} mode")
            }
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            Self::Label(e) => Some(e),
            Self::ModeMismatch { .. } => None,
        }
    }
}

impl From<RuleError> for SessionError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

impl From<LabelError> for SessionError {
    fn from(e: LabelError) -> Self {
        Self::Label(e)
    }
}

// ── SimulationSession ───────────────────────────────────────────────

/// A single-threaded, cooperatively ticked simulation.
///
/// # Examples
///
/// ```
/// use strata_core::rules;
/// use strata_engine::{RuleSelection, SessionConfig, SessionMode, SimulationSession};
///
/// let config = SessionConfig::new(
///     RuleSelection::Fixed(rules::elementary(110).unwrap()),
///     40,
///     SessionMode::Streaming { window: 24 },
/// );
/// let mut session = SimulationSession::new(config).unwrap();
/// let frame = session.tick().unwrap();
/// assert_eq!(frame.cols, 40);
/// assert_eq!(frame.rows, 1);
/// ```
pub struct SimulationSession {
    rule: Rule,
    table: RuleTable,
    row_len: usize,
    mode: SessionMode,
    seed_strategy: SeedStrategy,
    connectivity: Connectivity,
    active: Symbol,
    palette: Palette,
    background: Color,
    rng: ChaCha8Rng,
    buffer: SpaceTimeBuffer,
    /// The automaton's population at the newest generation.
    current: Vec<Symbol>,
    /// Evolution target, swapped with `current` each tick.
    scratch: Vec<Symbol>,
    /// Flattened buffer snapshot handed to the labeler.
    flat: Vec<Symbol>,
    metrics: TickMetrics,
    reseeds: u64,
}

impl SimulationSession {
    /// Validate `config` and construct a ready-to-tick session.
    ///
    /// Candidate-list rule selection draws from the session RNG here,
    /// so a given `(config, seed)` always picks the same rule.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if validation fails; the simulation never starts.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let rule = match &config.selection {
            RuleSelection::Fixed(rule) => *rule,
            RuleSelection::Candidates(rules) => {
                pick_rule(rules, &mut rng).ok_or(ConfigError::EmptyCandidates)?
            }
        };
        let table = rule.table();

        let current = seed_row(config.row_len, config.seed_strategy, &mut rng);
        let mut buffer = match config.mode {
            SessionMode::Batch { .. } => SpaceTimeBuffer::batch(config.row_len),
            SessionMode::Streaming { window } => SpaceTimeBuffer::window(config.row_len, window),
        };
        if matches!(config.mode, SessionMode::Batch { .. }) {
            // The seed row is row 0 of a batch diagram.
            let _ = buffer.push_row(current.clone());
        }

        Ok(Self {
            rule,
            table,
            row_len: config.row_len,
            mode: config.mode,
            seed_strategy: config.seed_strategy,
            connectivity: config.connectivity,
            active: config.active,
            palette: config.palette,
            background: config.background,
            rng,
            buffer,
            current,
            scratch: Vec::new(),
            flat: Vec::new(),
            metrics: TickMetrics::default(),
            reseeds: 0,
        })
    }

    /// The rule this session runs (fixed at construction).
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The session's fixed row length.
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// Read-only view of the space-time buffer.
    pub fn buffer(&self) -> &SpaceTimeBuffer {
        &self.buffer
    }

    /// Metrics from the most recent tick (or batch run).
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.metrics
    }

    /// Execute one tick: evolve one generation, append it to the
    /// buffer, re-label and re-colorize the visible buffer.
    ///
    /// # Errors
    ///
    /// [`SessionError::Rule`] if the current row is corrupted. A
    /// row-length mismatch at the buffer is not an error: the buffer is
    /// discarded and reinitialized from a fresh seed, counted in
    /// [`TickMetrics::reseed_events`].
    pub fn tick(&mut self) -> Result<Frame, SessionError> {
        let start = Instant::now();

        evolve_into(&self.current, &self.table, &mut self.scratch)?;
        std::mem::swap(&mut self.current, &mut self.scratch);
        let evolve_us = elapsed_us(start);

        self.push_current();
        let frame = self.render_frame(evolve_us, start)?;
        Ok(frame)
    }

    /// Run a batch session to completion and return the one frame.
    ///
    /// Evolves until the buffer holds `steps` rows (the seed row is row
    /// 0), then labels and colors the full diagram once. Calling it
    /// again on a finished session just re-renders the same diagram.
    ///
    /// # Errors
    ///
    /// [`SessionError::ModeMismatch`] in streaming mode;
    /// [`SessionError::Rule`] on a corrupted row.
    pub fn run_batch(&mut self) -> Result<Frame, SessionError> {
        let steps = match self.mode {
            SessionMode::Batch { steps } => steps,
            SessionMode::Streaming { .. } => {
                return Err(SessionError::ModeMismatch { required: "batch" })
            }
        };

        let start = Instant::now();
        while self.buffer.len() < steps {
            evolve_into(&self.current, &self.table, &mut self.scratch)?;
            std::mem::swap(&mut self.current, &mut self.scratch);
            self.push_current();
        }
        let evolve_us = elapsed_us(start);

        self.render_frame(evolve_us, start)
    }

    /// Discard the buffer and restart from a fresh seed row.
    ///
    /// The rule, table, and all presentation parameters are kept; only
    /// the population state resets. Valid between ticks only, which
    /// `&mut self` enforces.
    pub fn reseed(&mut self) {
        self.buffer.clear();
        self.current = seed_row(self.row_len, self.seed_strategy, &mut self.rng);
        if matches!(self.mode, SessionMode::Batch { .. }) {
            let _ = self.buffer.push_row(self.current.clone());
        }
        self.reseeds += 1;
    }

    /// Change the row length, invalidating the buffer outright.
    ///
    /// There is no partial patching: the buffer is rebuilt at the new
    /// width and the population reseeded.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroRowLength`] if `new_len == 0`; the session is
    /// left unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<(), ConfigError> {
        if new_len == 0 {
            return Err(ConfigError::ZeroRowLength);
        }
        self.row_len = new_len;
        self.buffer = match self.mode {
            SessionMode::Batch { .. } => SpaceTimeBuffer::batch(new_len),
            SessionMode::Streaming { window } => SpaceTimeBuffer::window(new_len, window),
        };
        self.reseed();
        Ok(())
    }

    /// Append the current row, recovering from a width mismatch by
    /// discarding the buffer and reseeding. A row is never truncated
    /// or padded to fit.
    fn push_current(&mut self) {
        if self.buffer.push_row(self.current.clone()).is_err() {
            self.reseed();
            let row = self.current.clone();
            debug_assert_eq!(row.len(), self.buffer.row_len());
            let _ = self.buffer.push_row(row);
        }
    }

    /// Label and colorize the visible buffer, filling in metrics.
    fn render_frame(&mut self, evolve_us: u64, start: Instant) -> Result<Frame, SessionError> {
        let rows = self.buffer.len();
        let cols = self.buffer.row_len();
        self.buffer.flatten_into(&mut self.flat);

        let label_start = Instant::now();
        let labeling = label(&self.flat, rows, cols, self.active, self.connectivity)?;
        let label_us = elapsed_us(label_start);

        let color_start = Instant::now();
        let colors = assign(&labeling.registry, &self.palette, self.background);
        let color_us = elapsed_us(color_start);

        self.metrics = TickMetrics {
            total_us: elapsed_us(start),
            evolve_us,
            label_us,
            color_us,
            rows_visible: rows,
            components: labeling.registry.len(),
            reseed_events: self.reseeds,
        };

        Ok(Frame {
            labels: labeling.grid,
            colors,
            rows,
            cols,
        })
    }
}

fn elapsed_us(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_micros()).unwrap_or(u64::MAX)
}
