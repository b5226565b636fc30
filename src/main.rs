//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, MouseEvent};

    use brick_breaker::consts::TICK_DT;
    use brick_breaker::platform::canvas_relative_x;
    use brick_breaker::platform::web::{DomHud, notify_and_reload};
    use brick_breaker::renderer::CanvasSurface;
    use brick_breaker::{FrameOutcome, GameConfig, GameLoop};

    const CANVAS_ID: &str = "gameCanvas";

    /// Game plus the browser resources it draws to
    struct Shell {
        game: GameLoop,
        surface: CanvasSurface,
        hud: DomHud,
        last_time: f64,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Brick Breaker starting...");

        let surface = match CanvasSurface::from_document(CANVAS_ID) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Error: {}", e);
                return;
            }
        };

        let config = GameConfig::load().with_canvas_size(surface.width(), surface.height());
        if let Err(e) = config.validate() {
            log::error!("Error: {}", e);
            return;
        }
        config.save();

        let shell = Rc::new(RefCell::new(Shell {
            game: GameLoop::new(config),
            surface,
            hud: DomHud::from_document(),
            last_time: 0.0,
        }));

        setup_input_handlers(shell.clone());

        // Start game loop
        request_animation_frame(shell);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(shell: Rc<RefCell<Shell>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, input disabled");
            return;
        };

        // Keyboard press / release
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                shell.borrow_mut().game.key(&event.key(), pressed);
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - absolute position relative to the canvas
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut s = shell.borrow_mut();
                let x = canvas_relative_x(event.client_x() as f32, s.surface.offset_left());
                s.game.pointer_moved(x);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - launch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                shell.borrow_mut().game.pointer_down(event.button());
            });
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(shell: Rc<RefCell<Shell>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(shell, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(shell: Rc<RefCell<Shell>>, time: f64) {
        let outcome = {
            let mut guard = shell.borrow_mut();
            let s = &mut *guard;

            // Calculate delta time
            let dt = if s.last_time > 0.0 {
                ((time - s.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            s.last_time = time;

            let outcome = s.game.frame(dt, time);
            s.game.render(&mut s.surface, &mut s.hud);
            outcome
        };

        match outcome {
            FrameOutcome::Running => request_animation_frame(shell),
            FrameOutcome::Finished(phase) => {
                let message = phase.terminal_message().unwrap_or("GAME OVER");
                log::info!("{}", message);
                notify_and_reload(message);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode has no canvas - running a headless autoplay round");

    let config = brick_breaker::GameConfig::load();
    let outcome = autoplay(config, 60 * 60 * 10);
    println!("{}", outcome);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a round headlessly with a paddle that shadows the ball.
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(config: brick_breaker::GameConfig, max_ticks: u64) -> String {
    use brick_breaker::consts::TICK_DT;
    use brick_breaker::renderer::{Recorder, draw_frame};
    use brick_breaker::sim::{GameEvent, GamePhase};
    use brick_breaker::{FrameOutcome, GameLoop};

    let width = config.canvas_width;
    let mut game = GameLoop::new(config);
    let mut surface = Recorder::new();
    let mut hud = Recorder::new();

    while game.ticks() < max_ticks {
        let state = game.state();
        if state.phase == GamePhase::AwaitingLaunch {
            game.pointer_down(0);
        }

        // Track the ball with a drifting offset so rallies vary
        let time_factor = game.ticks() as f32 * 0.01;
        let offset = time_factor.sin() * 25.0 + (time_factor * 0.7).sin() * 8.0;
        let target = (game.state().ball.pos.x + offset).clamp(1.0, width - 1.0);
        game.pointer_moved(target);

        let outcome = game.frame(TICK_DT, game.ticks() as f64 * 1000.0 / 60.0);
        for event in game.events() {
            if let GameEvent::LifeLost { lives_left } = event {
                log::info!("Missed at tick {}, {} lives left", game.ticks(), lives_left);
            }
        }

        if let FrameOutcome::Finished(phase) = outcome {
            draw_frame(game.state(), &mut surface, &mut hud);
            return format!(
                "{} after {} ticks ({}, {})",
                phase.terminal_message().unwrap_or("GAME OVER"),
                game.ticks(),
                hud.score,
                hud.lives
            );
        }
    }

    draw_frame(game.state(), &mut surface, &mut hud);
    format!(
        "Stopped after {} ticks ({}, {}, {} bricks left)",
        game.ticks(),
        hud.score,
        hud.lives,
        game.state().bricks_remaining()
    )
}
