//! Pong 8 entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, FontFace, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use pong8::Settings;
    use pong8::audio::AudioManager;
    use pong8::consts::*;
    use pong8::platform::{FrameClock, KeyState};
    use pong8::renderer::{CanvasSurface, draw_frame};
    use pong8::sim::{GameState, tick_frame};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        keys: KeyState,
        clock: FrameClock,
        settings: Settings,
        audio: AudioManager,
        surface: CanvasSurface,
    }

    impl Game {
        /// One animation frame: input, simulation, sound, drawing
        fn frame(&mut self, time: f64) {
            let dt = self.clock.delta(time);
            if self.keys.take_pressed(&self.settings.bindings.mute) {
                self.toggle_mute();
            }
            let input = self.keys.take_input(&self.settings.bindings);
            let events = tick_frame(&mut self.state, &input, dt);
            self.audio.react(&events);
            draw_frame(&self.state, &mut self.surface);
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_muted();
            self.audio.set_muted(muted);
            log::info!("Sound {}", if muted { "muted" } else { "on" });
            if let Err(e) = self.settings.save() {
                log::warn!("Could not save settings: {:?}", e);
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Pong 8 starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or_else(|| JsValue::from_str("no canvas element"))?
            .dyn_into()?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);
        // Focusable so it receives key events
        canvas.set_attribute("tabindex", "0")?;

        load_font(&document).await?;

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let surface = CanvasSurface::new(&canvas, ball_sprite(&document))?;
        let audio = AudioManager::new(&settings);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            keys: KeyState::new(),
            clock: FrameClock::default(),
            settings,
            audio,
            surface,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone())?;

        request_animation_frame(game);
        canvas.focus()?;

        log::info!("Pong 8 running!");
        Ok(())
    }

    /// Load the HUD font. Text would silently fall back to a system font
    /// otherwise, so a failure stops startup.
    async fn load_font(document: &Document) -> Result<(), JsValue> {
        let font = FontFace::new_with_str("Joystix", "url(./Joystix.ttf)")?;
        JsFuture::from(font.load()?).await?;
        document.fonts().add(&font)?;
        log::info!("Font loaded");
        Ok(())
    }

    /// Ball image from the page, if present
    fn ball_sprite(document: &Document) -> Option<HtmlImageElement> {
        let sprite = document
            .get_element_by_id("ball-sprite")
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
        if sprite.is_none() {
            log::warn!("No #ball-sprite image - drawing the ball as a rectangle");
        }
        sprite
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                // Keep arrow keys from scrolling the page
                if key.starts_with("Arrow") {
                    event.prevent_default();
                }
                game.borrow_mut().keys.key_down(&key, event.repeat());
            });
            canvas.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.set(&event.key(), false);
            });
            canvas.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Focus lost - key up events will not arrive, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.clear();
                log::info!("Canvas lost focus, keys released");
            });
            canvas.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod attract {
    use pong8::audio::AudioManager;
    use pong8::sim::{Controller, GameEvent, GamePhase, GameState, TickInput, tick_frame};

    /// Ten minutes at 60 Hz
    const MAX_FRAMES: usize = 60 * 60 * 10;

    /// Uneven frame times, like a real display would produce
    const FRAME_PATTERN: [f32; 5] = [1.0 / 60.0, 1.0 / 144.0, 1.0 / 30.0, 1.0 / 60.0, 0.0];

    /// Play a tracker-vs-tracker match without a window, pressing confirm
    /// whenever the game waits for it. Stops at the first victory.
    /// Returns the final state and the number of host frames played.
    pub fn run(seed: u64, audio: &AudioManager) -> (GameState, usize) {
        let mut state = GameState::with_controllers(seed, [Controller::Tracker; 2]);
        let mut frames = 0;

        while frames < MAX_FRAMES {
            let input = TickInput {
                confirm: matches!(state.phase, GamePhase::Start | GamePhase::Serve),
                ..Default::default()
            };
            let dt = FRAME_PATTERN[frames % FRAME_PATTERN.len()];
            frames += 1;

            let events = tick_frame(&mut state, &input, dt);
            audio.react(&events);

            if events
                .iter()
                .any(|e| matches!(e, GameEvent::Victory { .. }))
            {
                break;
            }
        }

        (state, frames)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pong8::Settings;
    use pong8::audio::AudioManager;
    use pong8::sim::{GamePhase, Player};

    env_logger::init();
    log::info!("Pong 8 (native) starting...");
    log::info!("Native mode runs a headless demo match - build for wasm32 to play");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Seed: {}", seed);

    let audio = AudioManager::new(&settings);
    let (state, frames) = attract::run(seed, &audio);

    println!(
        "\nAfter {} frames ({} steps): player 1 {} - {} player 2",
        frames,
        state.frames,
        state.score(Player::One),
        state.score(Player::Two)
    );
    if state.phase == GamePhase::Victory {
        println!("Player {} wins!", state.winning_player);
    } else {
        println!("No winner yet (frame limit reached)");
    }

    match serde_json::to_string(&state) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
