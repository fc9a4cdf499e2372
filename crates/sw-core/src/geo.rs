//! Screen-space geometry.
//!
//! Coordinates follow the rendering convention: `x` grows to the right and
//! `y` grows **downwards**.  "Up" on screen is therefore a negative `dy`.

use std::ops::{Add, Mul, Sub};

/// A 2-D point or displacement in viewport pixels.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `ZERO` for a zero-length vector.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 { self * (1.0 / len) } else { Vec2::ZERO }
    }

    /// Linear interpolation; `t` is clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(self, to: Vec2, t: f32) -> Vec2 {
        self + (to - self) * t.clamp(0.0, 1.0)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Bearing of a screen displacement, in degrees.
///
/// The displacement is first flipped to y-up, then `θ = atan2(dy, dx)` is
/// remapped piecewise:
///
/// | θ range     | bearing        |
/// |-------------|----------------|
/// | `[0, 90]`   | `|90 − θ|`     |
/// | `(90, 270]` | `−(θ − 90)`    |
/// | otherwise   | `|θ − 360| + 90` |
///
/// "Up" maps to 0 and "right" to 90.  Sorting neighbours ascending by this
/// value yields the click-through order used for redirect exits.
pub fn bearing_deg(displacement: Vec2) -> f32 {
    // `0.0 - y` rather than `-y`: a -0.0 here would put due west at -180°.
    let up = 0.0 - displacement.y;
    let theta = up.atan2(displacement.x).to_degrees();
    if (0.0..=90.0).contains(&theta) {
        (90.0 - theta).abs()
    } else if theta > 90.0 && theta <= 270.0 {
        -(theta - 90.0)
    } else {
        (theta - 360.0).abs() + 90.0
    }
}
