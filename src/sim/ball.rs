//! The ball
//!
//! Bounces off paddles and the top/bottom walls. Leaving through the left or
//! right side is detected by the caller (see `tick`).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, Wall, wall_contact};
use super::paddle::Paddle;
use super::state::Player;
use crate::consts::*;

/// What the ball touched during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub paddle: bool,
    pub wall: Option<Wall>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Height of the area the ball bounces inside
    pub bounds_height: f32,
}

/// Random per-axis speed in the serve range
fn random_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(BALL_MIN_SPEED..=BALL_MAX_SPEED)
}

fn random_signed_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let speed = random_speed(rng);
    if rng.random_bool(0.5) { speed } else { -speed }
}

impl Ball {
    /// A motionless ball; call `reset` to serve it
    pub fn new(pos: Vec2, size: Vec2, bounds_height: f32) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            bounds_height,
        }
    }

    /// Place the ball at `pos` and draw a fresh velocity heading away from
    /// `serving` (rightward for player one, leftward for player two).
    pub fn reset<R: Rng + ?Sized>(&mut self, pos: Vec2, serving: Player, rng: &mut R) {
        self.pos = pos;
        self.vel.y = random_signed_speed(rng);
        self.vel.x = random_speed(rng) * serving.serve_direction();
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn collides_with(&self, paddle: &Paddle) -> bool {
        self.rect().overlaps(&paddle.rect())
    }

    /// Send the ball back the way it came, a little faster, with a new
    /// vertical speed in the same vertical direction.
    pub fn deflect<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.vel.x = -self.vel.x * PADDLE_BOOST;
        let speed = random_speed(rng);
        self.vel.y = if self.vel.y < 0.0 { -speed } else { speed };
    }

    /// Clamp the ball inside the top/bottom walls and reverse its vertical
    /// velocity if it touched one.
    pub fn bounce_walls(&mut self) -> Option<Wall> {
        let wall = wall_contact(&self.rect(), self.bounds_height)?;
        self.pos.y = match wall {
            Wall::Top => 0.0,
            Wall::Bottom => self.bounds_height - self.size.y,
        };
        self.vel.y = -self.vel.y;
        Some(wall)
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * super::sanitize_dt(dt);
    }

    /// Resolve paddle and wall contacts at the current position, then move.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        paddle_a: &Paddle,
        paddle_b: &Paddle,
        rng: &mut R,
    ) -> Contacts {
        let mut contacts = Contacts::default();

        if self.collides_with(paddle_a) || self.collides_with(paddle_b) {
            self.deflect(rng);
            contacts.paddle = true;
        }

        contacts.wall = self.bounce_walls();

        self.integrate(dt);
        contacts
    }
}
