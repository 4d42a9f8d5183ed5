//! Game state and core simulation types
//!
//! Everything that changes between frames lives in `GameState`. Paddles and
//! the ball know nothing about phases or scores.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::Wall;
use super::control::Controller;
use super::paddle::Paddle;
use crate::consts::*;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first confirm
    Start,
    /// Ball parked in the center, waiting for the server to confirm
    Serve,
    /// Rally in progress
    Play,
    /// Someone reached the victory score
    Victory,
}

/// One of the two players. Player one is on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Index into per-player arrays
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Sign of the horizontal velocity when this player serves
    pub fn serve_direction(self) -> f32 {
        match self {
            Player::One => 1.0,
            Player::Two => -1.0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Something that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    PaddleHit,
    WallHit(Wall),
    Scored { player: Player },
    Victory { winner: Player },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Player the next serve travels away from
    pub serving_player: Player,
    /// Winner of the last finished match
    pub winning_player: Player,
    /// Indexed by `Player::index`
    pub scores: [u32; 2],
    pub ball: Ball,
    /// Left paddle first
    pub paddles: [Paddle; 2],
    /// Simulation step counter
    pub frames: u64,
}

impl GameState {
    /// Standard match: keyboard on the left, tracker on the right
    pub fn new(seed: u64) -> Self {
        Self::with_controllers(seed, [Controller::Human, Controller::Tracker])
    }

    pub fn with_controllers(seed: u64, controllers: [Controller; 2]) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::splat(BALL_SIZE), CANVAS_HEIGHT);
        ball.reset(Self::serve_position(&ball), Player::One, &mut rng);

        Self {
            seed,
            rng,
            phase: GamePhase::Start,
            serving_player: Player::One,
            winning_player: Player::One,
            scores: [0, 0],
            ball,
            paddles: [
                Paddle::left(controllers[0]),
                Paddle::right(controllers[1]),
            ],
            frames: 0,
        }
    }

    /// Where the ball sits at the start of a point: centered on the canvas
    pub fn serve_position(ball: &Ball) -> Vec2 {
        Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT) / 2.0 - ball.size / 2.0
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Re-center the ball and serve it away from the current server
    pub fn reset_ball(&mut self) {
        let pos = Self::serve_position(&self.ball);
        self.ball.reset(pos, self.serving_player, &mut self.rng);
    }

    pub(crate) fn set_phase(&mut self, to: GamePhase, events: &mut Vec<GameEvent>) {
        let from = self.phase;
        if from != to {
            log::info!("Phase {:?} -> {:?}", from, to);
            self.phase = to;
            events.push(GameEvent::PhaseChanged { from, to });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.scores, [0, 0]);
        assert_eq!(state.serving_player, Player::One);
        assert_eq!(state.ball.pos, Vec2::new(630.0, 350.0));
        assert!(state.ball.vel.x > 0.0);
        assert_eq!(state.paddles[0].controller, Controller::Human);
        assert_eq!(state.paddles[1].controller, Controller::Tracker);
    }

    #[test]
    fn test_player_helpers() {
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::Two.to_string(), "2");
        assert_eq!(Player::Two.serve_direction(), -1.0);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        assert_eq!(a.ball.vel, b.ball.vel);
    }
}
