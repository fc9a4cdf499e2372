//! Frame counting for headless driving.
//!
//! The simulation advances only in response to discrete frames.  A `Frame`
//! is a monotonically increasing counter; `FrameClock` maps it to elapsed
//! milliseconds so tween durations (expressed in ms) can be converted to a
//! frame count.

use std::fmt;

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` frames after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// Tracks the current frame and how much wall time one frame represents.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// Milliseconds per frame.  Default: 1000 / 60.
    pub frame_ms: f32,
    /// The current frame, advanced by [`FrameClock::advance`].
    pub current_frame: Frame,
}

impl FrameClock {
    pub fn new(frame_ms: f32) -> Self {
        Self { frame_ms, current_frame: Frame::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_frame = self.current_frame.offset(1);
    }

    /// Elapsed milliseconds since frame 0.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.current_frame.0 as f64 * self.frame_ms as f64
    }

    /// How many frames span `ms` milliseconds (rounds up, never zero).
    pub fn frames_for_ms(&self, ms: f32) -> u64 {
        if self.frame_ms <= 0.0 {
            return 1;
        }
        ((ms / self.frame_ms).ceil() as u64).max(1)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new(1000.0 / 60.0)
    }
}
