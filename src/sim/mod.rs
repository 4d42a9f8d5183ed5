//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies
//! - Side effects are reported as `GameEvent`s for the host to act on

pub mod ball;
pub mod collision;
pub mod control;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, Contacts};
pub use collision::{Rect, Side, Wall, boundary_exit, wall_contact};
pub use control::Controller;
pub use paddle::{Paddle, PaddleCommand};
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick, tick_frame};

/// Clamp a host-supplied timestep to something the physics can use.
/// Negative and non-finite values become a zero-length frame.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}
