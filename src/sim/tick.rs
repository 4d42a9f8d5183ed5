//! Per-frame simulation step
//!
//! Advances the game by a variable timestep. Motion is linear in `dt`, so
//! irregular frame times are fine. Hosts call `tick_frame`, which splits a
//! frame into steps short enough for paddle contact to be seen.

use super::collision::{Side, boundary_exit};
use super::state::{GameEvent, GamePhase, GameState, Player};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Human paddle up (takes priority over down)
    pub up: bool,
    /// Human paddle down
    pub down: bool,
    /// Confirm (start, serve, restart). Edge-triggered by the host.
    pub confirm: bool,
}

/// Advance the game state by `dt` seconds and report what happened.
///
/// Order within a frame: confirm, ball and scoring (rally only), paddle
/// integration, then paddle commands for the next frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let dt = super::sanitize_dt(dt);
    let mut events = Vec::new();
    state.frames += 1;

    if input.confirm {
        confirm(state, &mut events);
    }

    if state.phase == GamePhase::Play {
        advance_ball(state, dt, &mut events);
        check_score(state, &mut events);
    }

    for paddle in &mut state.paddles {
        paddle.update(dt);
    }

    steer_paddles(state, input);

    events
}

/// Advance by one host frame, split into equal steps of at most `SIM_DT`.
///
/// Confirm is applied on the first step only. Past `MAX_SUBSTEPS` steps the
/// steps get longer instead of more numerous.
pub fn tick_frame(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let dt = super::sanitize_dt(dt);
    let steps = ((dt / SIM_DT).ceil() as u32).clamp(1, MAX_SUBSTEPS);
    let step_dt = dt / steps as f32;

    let mut input = *input;
    let mut events = Vec::new();
    for _ in 0..steps {
        events.extend(tick(state, &input, step_dt));
        input.confirm = false;
    }
    events
}

fn confirm(state: &mut GameState, events: &mut Vec<GameEvent>) {
    match state.phase {
        GamePhase::Start => state.set_phase(GamePhase::Serve, events),
        GamePhase::Serve => state.set_phase(GamePhase::Play, events),
        GamePhase::Victory => {
            state.scores = [0, 0];
            state.serving_player = state.winning_player;
            state.reset_ball();
            log::info!("New match, player {} serves", state.serving_player);
            state.set_phase(GamePhase::Serve, events);
        }
        GamePhase::Play => {}
    }
}

fn advance_ball(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    let [left, right] = &state.paddles;
    let contacts = state.ball.update(dt, left, right, &mut state.rng);

    if contacts.paddle {
        log::debug!("Paddle hit, ball velocity {:?}", state.ball.vel);
        events.push(GameEvent::PaddleHit);
    }
    if let Some(wall) = contacts.wall {
        log::trace!("Wall hit: {:?}", wall);
        events.push(GameEvent::WallHit(wall));
    }
}

fn check_score(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let scorer = match boundary_exit(&state.ball.rect(), CANVAS_WIDTH) {
        Some(Side::Left) => Player::Two,
        Some(Side::Right) => Player::One,
        None => return,
    };
    award_point(state, scorer, events);
}

fn award_point(state: &mut GameState, scorer: Player, events: &mut Vec<GameEvent>) {
    state.serving_player = scorer;
    state.scores[scorer.index()] += 1;
    events.push(GameEvent::Scored { player: scorer });
    log::info!(
        "Player {} scores ({} - {})",
        scorer,
        state.score(Player::One),
        state.score(Player::Two)
    );

    if state.score(scorer) >= VICTORY_SCORE {
        state.winning_player = scorer;
        events.push(GameEvent::Victory { winner: scorer });
        state.set_phase(GamePhase::Victory, events);
    } else {
        state.reset_ball();
        state.set_phase(GamePhase::Serve, events);
    }
}

fn steer_paddles(state: &mut GameState, input: &TickInput) {
    let phase = state.phase;
    let ball = &state.ball;
    for paddle in &mut state.paddles {
        if paddle.controller.is_active(phase) {
            let command = paddle.controller.command(input, ball, paddle);
            paddle.apply(command);
        }
    }
}
