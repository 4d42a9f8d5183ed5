//! Paddle control sources
//!
//! A paddle is either steered by the keyboard or by a reactive tracker that
//! chases the ball's vertical position. The tracker does not predict where
//! the ball will go.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Paddle, PaddleCommand};
use super::state::GamePhase;
use super::tick::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Follows the up/down keys
    Human,
    /// Moves toward the ball's vertical center
    Tracker,
}

impl Controller {
    /// Whether this controller issues commands during `phase`.
    ///
    /// The keyboard is always live; the tracker only moves during a rally and
    /// otherwise leaves the paddle with its last velocity.
    pub fn is_active(&self, phase: GamePhase) -> bool {
        match self {
            Controller::Human => true,
            Controller::Tracker => phase == GamePhase::Play,
        }
    }

    pub fn command(&self, input: &TickInput, ball: &Ball, paddle: &Paddle) -> PaddleCommand {
        match self {
            Controller::Human => human_command(input),
            Controller::Tracker => track(ball, paddle),
        }
    }
}

fn human_command(input: &TickInput) -> PaddleCommand {
    if input.up {
        PaddleCommand::Up
    } else if input.down {
        PaddleCommand::Down
    } else {
        PaddleCommand::Stop
    }
}

fn track(ball: &Ball, paddle: &Paddle) -> PaddleCommand {
    let target = ball.center().y;
    let center = paddle.center_y();
    if target < center {
        PaddleCommand::Up
    } else if target > center {
        PaddleCommand::Down
    } else {
        PaddleCommand::Stop
    }
}
