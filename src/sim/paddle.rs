//! Vertical paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::control::Controller;
use crate::consts::*;

/// Movement command issued to a paddle each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleCommand {
    Up,
    Down,
    Stop,
}

/// A paddle that slides up and down one side of the play area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/s, negative is up)
    pub dy: f32,
    pub max_speed: f32,
    /// Height of the area the paddle is kept inside
    pub bounds_height: f32,
    /// Who steers this paddle
    pub controller: Controller,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, bounds_height: f32, controller: Controller) -> Self {
        Self {
            pos,
            size,
            dy: 0.0,
            max_speed: PADDLE_MAX_SPEED,
            bounds_height,
            controller,
        }
    }

    /// Player one's paddle, near the left edge
    pub fn left(controller: Controller) -> Self {
        Self::new(
            Vec2::new(PADDLE_INSET, PADDLE_INSET),
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            CANVAS_HEIGHT,
            controller,
        )
    }

    /// Player two's paddle, near the right edge
    pub fn right(controller: Controller) -> Self {
        Self::new(
            Vec2::new(
                CANVAS_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
                CANVAS_HEIGHT - PADDLE_INSET - PADDLE_HEIGHT,
            ),
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            CANVAS_HEIGHT,
            controller,
        )
    }

    pub fn move_up(&mut self) {
        self.dy = -self.max_speed;
    }

    pub fn move_down(&mut self) {
        self.dy = self.max_speed;
    }

    pub fn stop(&mut self) {
        self.dy = 0.0;
    }

    pub fn apply(&mut self, command: PaddleCommand) {
        match command {
            PaddleCommand::Up => self.move_up(),
            PaddleCommand::Down => self.move_down(),
            PaddleCommand::Stop => self.stop(),
        }
    }

    /// Lowest allowed y for the top edge
    pub fn max_y(&self) -> f32 {
        (self.bounds_height - self.size.y).max(0.0)
    }

    /// Integrate position, clamping on the side the paddle is moving toward
    pub fn update(&mut self, dt: f32) {
        let dt = super::sanitize_dt(dt);
        let y = self.pos.y + self.dy * dt;
        self.pos.y = if self.dy < 0.0 {
            y.max(0.0)
        } else {
            y.min(self.max_y())
        };
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}
