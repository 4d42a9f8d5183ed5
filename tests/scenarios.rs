use glam::Vec2;

use pong8::consts::*;
use pong8::platform::KeyState;
use pong8::sim::{GameEvent, GamePhase, GameState, Player, TickInput, tick, tick_frame};
use pong8::{KeyBindings, renderer};

const DT: f32 = 1.0 / 60.0;

fn idle() -> TickInput {
    TickInput::default()
}

fn confirm() -> TickInput {
    TickInput {
        confirm: true,
        ..Default::default()
    }
}

fn center() -> Vec2 {
    Vec2::new(CANVAS_WIDTH / 2.0 - BALL_SIZE / 2.0, CANVAS_HEIGHT / 2.0 - BALL_SIZE / 2.0)
}

#[test]
fn ball_past_left_edge_scores_for_player_two() {
    let mut state = GameState::new(2024);
    state.phase = GamePhase::Play;
    state.serving_player = Player::Two;
    state.ball.pos = Vec2::new(-1.0, 300.0);

    tick(&mut state, &idle(), 0.0);

    assert_eq!(state.score(Player::Two), 1);
    assert_eq!(state.score(Player::One), 0);
    assert_eq!(state.phase, GamePhase::Serve);
    assert_eq!(state.ball.pos, center());
}

#[test]
fn winning_point_enters_victory_without_reset() {
    let mut state = GameState::new(2024);
    state.phase = GamePhase::Play;
    state.scores = [3, 9];
    state.ball.pos = Vec2::new(-30.0, 300.0);
    state.ball.vel = Vec2::new(-600.0, 0.0);

    let events = tick(&mut state, &idle(), DT);

    assert_eq!(state.phase, GamePhase::Victory);
    assert_eq!(state.winning_player, Player::Two);
    assert_eq!(state.scores, [3, 10]);
    assert_eq!(
        events,
        vec![
            GameEvent::Scored { player: Player::Two },
            GameEvent::Victory { winner: Player::Two },
            GameEvent::PhaseChanged {
                from: GamePhase::Play,
                to: GamePhase::Victory
            },
        ]
    );

    for _ in 0..30 {
        tick(&mut state, &idle(), DT);
    }
    assert_eq!(state.scores, [3, 10]);
}

#[test]
fn confirm_after_victory_starts_new_match() {
    let mut state = GameState::new(77);
    state.phase = GamePhase::Victory;
    state.scores = [4, 10];
    state.winning_player = Player::Two;
    state.serving_player = Player::Two;

    tick(&mut state, &confirm(), DT);

    assert_eq!(state.phase, GamePhase::Serve);
    assert_eq!(state.scores, [0, 0]);
    assert_eq!(state.serving_player, Player::Two);
    assert_eq!(state.ball.pos, center());
    assert!(state.ball.vel.x < 0.0);
}

#[test]
fn held_enter_fires_confirm_once() {
    let bindings = KeyBindings::default();
    let mut keys = KeyState::new();
    let mut state = GameState::new(5);

    keys.key_down("Enter", false);
    tick_frame(&mut state, &keys.take_input(&bindings), DT);
    assert_eq!(state.phase, GamePhase::Serve);

    // Enter still held: the browser keeps sending repeat keydowns
    for _ in 0..5 {
        keys.key_down("Enter", true);
        tick_frame(&mut state, &keys.take_input(&bindings), DT);
    }
    assert_eq!(state.phase, GamePhase::Serve);

    keys.set("Enter", false);
    keys.key_down("Enter", false);
    tick_frame(&mut state, &keys.take_input(&bindings), DT);
    assert_eq!(state.phase, GamePhase::Play);
}

#[test]
fn stalled_frames_do_not_let_the_ball_through() {
    let mut state = GameState::new(2024);
    state.phase = GamePhase::Play;
    state.ball.pos = Vec2::new(60.0, 100.0);
    state.ball.vel = Vec2::new(-800.0, 0.0);

    let mut events = tick_frame(&mut state, &idle(), MAX_FRAME_DT);
    events.extend(tick_frame(&mut state, &idle(), MAX_FRAME_DT));

    assert!(events.contains(&GameEvent::PaddleHit));
    assert!(!events.iter().any(|e| matches!(e, GameEvent::Scored { .. })));
    assert_eq!(state.scores, [0, 0]);
}

#[test]
fn rally_produces_paddle_and_wall_events() {
    let mut state = GameState::new(11);
    state.phase = GamePhase::Play;
    // Heading into the left paddle (x 30..50, y 30..230)
    state.ball.pos = Vec2::new(45.0, 100.0);
    state.ball.vel = Vec2::new(-500.0, -500.0);

    let events = tick(&mut state, &idle(), DT);
    assert_eq!(events, vec![GameEvent::PaddleHit]);
    assert!(state.ball.vel.x > 0.0);

    state.ball.pos = Vec2::new(600.0, -2.0);
    state.ball.vel = Vec2::new(500.0, -500.0);
    let events = tick(&mut state, &idle(), DT);
    assert!(matches!(events.as_slice(), [GameEvent::WallHit(_)]));
    assert!(state.ball.vel.y > 0.0);
}

#[test]
fn irregular_frames_match_one_long_frame() {
    let mut a = GameState::new(3);
    let mut b = GameState::new(3);
    a.phase = GamePhase::Play;
    b.phase = GamePhase::Play;
    a.ball.vel = Vec2::new(400.0, 400.0);
    b.ball.vel = Vec2::new(400.0, 400.0);

    tick(&mut a, &idle(), 0.1);
    for dt in [0.03, 0.05, 0.0, 0.02] {
        tick(&mut b, &idle(), dt);
    }

    assert!((a.ball.pos - b.ball.pos).length() < 0.01);
}

#[test]
fn full_frame_renders_serve_prompt() {
    let mut state = GameState::new(9);
    tick(&mut state, &confirm(), DT);

    let lines = renderer::prompt_lines(&state).unwrap();
    assert_eq!(lines[0], "Player 1's serve...");
}
