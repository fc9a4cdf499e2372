//! Human-readable run status.

use std::fmt;

/// Where a run stands, as shown to the player.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunStatus {
    /// A move is in flight or the walker can still move.
    Walking,
    ArrivedAtDestination,
    /// Budget spent before every destination was reached.
    OutOfSteps,
    /// The last event hit a graph anomaly; the walker is parked.
    Stalled,
}

impl RunStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Walking              => "Walking towards destination..",
            RunStatus::ArrivedAtDestination => "Arrived at destination!",
            RunStatus::OutOfSteps           => "Out of steps..",
            RunStatus::Stalled              => "Walker stalled",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
