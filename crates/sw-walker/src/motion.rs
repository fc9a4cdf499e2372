//! Per-frame interpolation of a committed move.
//!
//! The rendering collaborator owns animation; `Motion` is the headless
//! stand-in used by drivers and tests.  Two models, matching [`Pace`]:
//!
//! - **Tween**: position = lerp(origin, target, elapsed / duration).
//! - **Glide**: position advances a fixed `delta` along the travel vector
//!   every frame.  Arrival is "reached or passed the target along the
//!   direction of travel", i.e. `(target − position) · travel ≤ 0`.

use sw_core::{Pace, Vec2};

use crate::MoveInstruction;

#[derive(Clone, Debug)]
pub struct Motion {
    origin:   Vec2,
    target:   Vec2,
    pace:     Pace,
    /// Unit travel vector (zero for a zero-length move).
    heading:  Vec2,
    duration: f32,
    elapsed:  f32,
    position: Vec2,
}

impl Motion {
    pub fn start<L>(instruction: &MoveInstruction<L>, pace: Pace) -> Self {
        Self {
            origin:   instruction.origin,
            target:   instruction.target,
            pace,
            heading:  (instruction.target - instruction.origin).normalized(),
            duration: instruction.expected_duration,
            elapsed:  0.0,
            position: instruction.origin,
        }
    }

    /// Advance by one frame lasting `frame_ms` and return the new position.
    ///
    /// `frame_ms` only matters for tweens; glides move `delta` per call.
    pub fn advance(&mut self, frame_ms: f32) -> Vec2 {
        match self.pace {
            Pace::Tween { .. } => {
                self.elapsed += frame_ms;
                let t = if self.duration > 0.0 { self.elapsed / self.duration } else { 1.0 };
                self.position = self.origin.lerp(self.target, t);
            }
            Pace::Glide { delta } => {
                if !self.has_arrived() {
                    self.position = self.position + self.heading * delta;
                }
            }
        }
        self.position
    }

    /// Has the walker fully reached the target?
    pub fn has_arrived(&self) -> bool {
        match self.pace {
            Pace::Tween { .. } => self.elapsed >= self.duration,
            Pace::Glide { .. } => (self.target - self.position).dot(self.heading) <= 0.0,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }
}
