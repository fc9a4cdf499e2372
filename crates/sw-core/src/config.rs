//! Run configuration shared by both graph variants.
//!
//! Typically embedded in a scenario file by the application crate and
//! handed to the simulation builder.

use crate::{SwError, SwResult};

/// Size of the area the graph is laid out in, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width:  f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 600.0, height: 600.0 }
    }
}

/// How a committed move is turned into motion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pace {
    /// Time-based tween: duration (ms) = euclidean distance × `scale`.
    Tween { scale: f32 },
    /// Fixed per-frame advance of `delta` pixels along the travel vector.
    Glide { delta: f32 },
}

impl Pace {
    /// Default tween scale for loaded graphs.
    pub const TWEEN_SCALE: f32 = 15.0;
    /// Default per-frame advance for lattices.
    pub const GLIDE_DELTA: f32 = 0.35;

    pub fn tween() -> Self {
        Pace::Tween { scale: Self::TWEEN_SCALE }
    }

    pub fn glide() -> Self {
        Pace::Glide { delta: Self::GLIDE_DELTA }
    }

    /// Expected duration of a move covering `distance` pixels.
    ///
    /// Milliseconds for `Tween`, frames for `Glide`.
    pub fn duration_for(self, distance: f32) -> f32 {
        match self {
            Pace::Tween { scale } => distance * scale,
            Pace::Glide { delta } => (distance / delta).ceil(),
        }
    }

    fn validate(self) -> SwResult<()> {
        let (name, v) = match self {
            Pace::Tween { scale } => ("tween scale", scale),
            Pace::Glide { delta } => ("glide delta", delta),
        };
        if !v.is_finite() || v <= 0.0 {
            return Err(SwError::Config(format!("{name} must be positive, got {v}")));
        }
        Ok(())
    }
}

/// Per-run walker configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkConfig {
    /// Step budget.  Every committed move costs one step.
    pub steps: u32,
    /// Master RNG seed.  The same seed always produces the same walk.
    pub seed: u64,
    /// Motion model for committed moves.
    pub pace: Pace,
}

impl WalkConfig {
    pub fn validate(&self) -> SwResult<()> {
        self.pace.validate()
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self { steps: 25, seed: 0, pace: Pace::glide() }
    }
}
