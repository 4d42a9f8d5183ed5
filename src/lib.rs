//! Pong 8 - two paddles, one ball, first to ten
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball, collisions, scoring, game phases)
//! - `renderer`: Canvas 2D drawing of the current state
//! - `platform`: Browser/native host plumbing (keys, frame clock)
//! - `audio`: Sound cues
//! - `settings`: Player preferences

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{KeyBindings, Settings};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (canvas pixels)
    pub const CANVAS_WIDTH: f32 = 1280.0;
    pub const CANVAS_HEIGHT: f32 = 720.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    /// Distance of each paddle from its side of the canvas
    pub const PADDLE_INSET: f32 = 30.0;
    /// Vertical paddle speed (pixels/s)
    pub const PADDLE_MAX_SPEED: f32 = 1000.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Per-axis speed range drawn on serve and on paddle bounce (pixels/s)
    pub const BALL_MIN_SPEED: f32 = 400.0;
    pub const BALL_MAX_SPEED: f32 = 800.0;
    /// Horizontal speed multiplier applied on every paddle hit
    pub const PADDLE_BOOST: f32 = 1.03;

    /// Points needed to win a match
    pub const VICTORY_SCORE: u32 = 10;

    /// Playback volume of every sound cue
    pub const SOUND_VOLUME: f32 = 0.2;

    /// Longest frame the host will feed into the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Longest single simulation step (seconds). A host frame is split into
    /// steps of at most this length so the ball cannot skip a paddle.
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Step count limit for one host frame
    pub const MAX_SUBSTEPS: u32 = 16;
}
