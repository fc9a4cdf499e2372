//! `sw-core` — foundational types for the site-walker simulation.
//!
//! This crate is a dependency of every other `sw-*` crate.  It has no `sw-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `Cell`, `PointId`, `WalkerId`                         |
//! | [`geo`]         | `Vec2`, screen-space bearing                          |
//! | [`direction`]   | `Direction` (north/east/south/west)                   |
//! | [`time`]        | `Frame`, `FrameClock`                                 |
//! | [`rng`]         | `WalkerRng` (per-walker, seedable)                    |
//! | [`config`]      | `Viewport`, `Pace`, `WalkConfig`                      |
//! | [`error`]       | `SwError`, `SwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Pace, Viewport, WalkConfig};
pub use direction::Direction;
pub use error::{SwError, SwResult};
pub use geo::{Vec2, bearing_deg};
pub use ids::{Cell, PointId, WalkerId};
pub use rng::WalkerRng;
pub use time::{Frame, FrameClock};
