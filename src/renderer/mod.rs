//! Canvas 2D rendering
//!
//! `draw_frame` describes a frame in terms of a handful of drawing primitives
//! (`Surface`). The browser backend lives in `canvas`; tests record calls.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{Controller, GamePhase, GameState, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    /// CSS `textAlign` value
    pub align: &'static str,
    pub color: &'static str,
}

/// Images the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ball,
}

/// Drawing primitives a host must provide
pub trait Surface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    /// Returns false if the sprite is unavailable and nothing was drawn
    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) -> bool;
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}

/// Colors for game elements
pub mod colors {
    pub const PADDLE_HUMAN: &str = "red";
    pub const PADDLE_TRACKER: &str = "blue";
    pub const BALL: &str = "yellow";
    pub const TEXT: &str = "white";
}

pub const SCORE_STYLE: TextStyle = TextStyle {
    font: "60px Joystix",
    align: "center",
    color: colors::TEXT,
};

pub const PROMPT_STYLE: TextStyle = TextStyle {
    font: "24px Joystix",
    align: "center",
    color: colors::TEXT,
};

/// Baseline of the score digits
const SCORE_Y: f32 = 75.0;
/// Gap between the two prompt lines
const PROMPT_LINE_GAP: f32 = 40.0;

pub fn paddle_color(controller: Controller) -> &'static str {
    match controller {
        Controller::Human => colors::PADDLE_HUMAN,
        Controller::Tracker => colors::PADDLE_TRACKER,
    }
}

/// Headline and hint shown for the current phase (none during a rally)
pub fn prompt_lines(state: &GameState) -> Option<[String; 2]> {
    match state.phase {
        GamePhase::Start => Some([
            "Welcome to Pong!".to_string(),
            "Press Enter to begin!".to_string(),
        ]),
        GamePhase::Serve => Some([
            format!("Player {}'s serve...", state.serving_player),
            "Press Enter to serve!".to_string(),
        ]),
        GamePhase::Victory => Some([
            format!("Player {} wins!", state.winning_player),
            "Press Enter to restart!".to_string(),
        ]),
        GamePhase::Play => None,
    }
}

/// Draw a complete frame: scores, ball, paddles, then the phase prompt
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    surface.fill_text(
        &state.score(Player::One).to_string(),
        CANVAS_WIDTH * 0.25,
        SCORE_Y,
        &SCORE_STYLE,
    );
    surface.fill_text(
        &state.score(Player::Two).to_string(),
        CANVAS_WIDTH * 0.75,
        SCORE_Y,
        &SCORE_STYLE,
    );

    let ball = &state.ball;
    let (x, y, w, h) = (ball.pos.x, ball.pos.y, ball.size.x, ball.size.y);
    if !surface.draw_sprite(Sprite::Ball, x, y, w, h) {
        surface.fill_rect(x, y, w, h, colors::BALL);
    }

    for paddle in &state.paddles {
        surface.fill_rect(
            paddle.pos.x,
            paddle.pos.y,
            paddle.size.x,
            paddle.size.y,
            paddle_color(paddle.controller),
        );
    }

    if let Some([headline, hint]) = prompt_lines(state) {
        let x = CANVAS_WIDTH / 2.0;
        let y = CANVAS_HEIGHT / 4.0;
        surface.fill_text(&headline, x, y, &PROMPT_STYLE);
        surface.fill_text(&hint, x, y + PROMPT_LINE_GAP, &PROMPT_STYLE);
    }
}
