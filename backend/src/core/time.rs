//! Serial clock for the simulation
//!
//! The simulation advances in steps: one step per processed event. The clock
//! also lays processed events end to end on a serial timeline using their
//! durations, so reports can show when each event started and finished.
//!
//! The clock never gates eligibility. Event timestamps are comparator keys,
//! not release times.

use serde::{Deserialize, Serialize};

/// Tracks steps taken and accumulated processing time
///
/// # Example
/// ```
/// use event_scheduler_core::SimulationClock;
///
/// let mut clock = SimulationClock::new();
/// assert_eq!(clock.current_step(), 0);
///
/// let (start, finish) = clock.advance(3);
/// assert_eq!((start, finish), (0, 3));
/// assert_eq!(clock.current_step(), 1);
/// assert_eq!(clock.elapsed(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Events processed so far
    current_step: usize,
    /// Sum of durations of processed events
    elapsed: u64,
}

impl SimulationClock {
    /// Create a clock at step 0, time 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed event of the given duration
    ///
    /// Returns the `(started_at, finished_at)` span assigned to the event.
    /// Elapsed time saturates at `u64::MAX`.
    ///
    /// # Example
    /// ```
    /// use event_scheduler_core::SimulationClock;
    ///
    /// let mut clock = SimulationClock::new();
    /// clock.advance(3);
    /// assert_eq!(clock.advance(1), (3, 4));
    /// ```
    pub fn advance(&mut self, duration: u64) -> (u64, u64) {
        let started_at = self.elapsed;
        self.elapsed = self.elapsed.saturating_add(duration);
        self.current_step += 1;
        (started_at, self.elapsed)
    }

    /// Number of events processed so far
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Serial time consumed by processed events
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}
