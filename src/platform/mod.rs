//! Platform abstraction layer
//!
//! Host-side plumbing that turns browser (or native) events into simulation
//! input:
//! - Key state tracking and binding lookup
//! - Frame timing

pub mod input;
pub mod time;

pub use input::KeyState;
pub use time::FrameClock;
