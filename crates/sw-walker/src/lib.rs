//! `sw-walker` — the walker state machine and site-behavior resolution.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`state`]       | `SteppingState`, `Leg`                                      |
//! | [`instruction`] | `MoveInstruction`, `MoveKind`, `Step`                       |
//! | [`resolver`]    | `resolve_arrival` — behavior tag + context → `Resolution`   |
//! | [`chooser`]     | `StepChooser` — injectable move picker                      |
//! | [`motion`]      | `Motion` — per-frame interpolation of a committed move      |
//! | [`walker`]      | `Walker<L>` — budget, history, and transitions              |
//! | [`error`]       | `WalkError`, `WalkResult<T>`                                |
//!
//! # Event model
//!
//! The walker never animates itself.  A collaborator drives it:
//!
//! 1. [`Walker::take_step`] commits a move and returns a [`MoveInstruction`]
//!    (target coordinates + expected duration).
//! 2. The collaborator interpolates the walker's position until it has fully
//!    reached the target, then calls [`Walker::on_arrived_at`].
//! 3. The walker asks [`resolve_arrival`] what the point's behavior implies
//!    and either issues the next instruction, stops, or does nothing.
//!
//! At most one move is in flight at a time; `take_step` is a no-op unless the
//! walker is [`SteppingState::NotStepping`].

pub mod chooser;
pub mod error;
pub mod instruction;
pub mod motion;
pub mod resolver;
pub mod state;
pub mod walker;


pub use chooser::StepChooser;
pub use error::{WalkError, WalkResult};
pub use instruction::{MoveInstruction, MoveKind, Step};
pub use motion::Motion;
pub use resolver::{ArrivalContext, Resolution, resolve_arrival};
pub use state::{Leg, SteppingState};
pub use walker::{HISTORY_LEN, Walker};
