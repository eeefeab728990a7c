//! Per-tick performance metrics for the simulation session.
//!
//! [`TickMetrics`] captures timing and pipeline counts for a single
//! tick. The session populates it after each `tick()` call; consumers
//! read the most recent values via
//! [`SimulationSession::last_metrics`](crate::session::SimulationSession::last_metrics).

/// Timing and pipeline metrics collected during a single tick.
///
/// All durations are in microseconds. Re-labeling the whole visible
/// buffer dominates (`label_us`); that full recomputation per tick is a
/// deliberate simplicity-over-efficiency choice, and these numbers are
/// how a caller watches its cost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent evolving the row, in microseconds.
    pub evolve_us: u64,
    /// Time spent labeling the visible buffer, in microseconds.
    pub label_us: u64,
    /// Time spent assigning colors, in microseconds.
    pub color_us: u64,
    /// Rows visible in the buffer after this tick.
    pub rows_visible: usize,
    /// Connected components found this tick.
    pub components: usize,
    /// Cumulative count of buffer resets caused by row-length
    /// mismatches or explicit resizes.
    pub reseed_events: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = TickMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.evolve_us, 0);
        assert_eq!(m.label_us, 0);
        assert_eq!(m.color_us, 0);
        assert_eq!(m.rows_visible, 0);
        assert_eq!(m.components, 0);
        assert_eq!(m.reseed_events, 0);
    }
}
