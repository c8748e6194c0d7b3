//! Pong Canvas entry point
//!
//! On the web this wires the page and runs one simulation tick per animation
//! frame. Natively it plays a headless attract-mode match and logs it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use pong_canvas::feedback::{FeedbackSink, dispatch};
    use pong_canvas::input::{InputAdapter, PointerSample, PointerTracker};
    use pong_canvas::platform::{DomFeedback, listen, surface_rect};
    use pong_canvas::renderer::{CanvasRenderer, Scene};
    use pong_canvas::settings::Settings;
    use pong_canvas::sim::{TickInput, World, tick};

    /// Game instance holding all state
    struct Game {
        world: World,
        rng: Pcg32,
        pointer: PointerTracker,
        renderer: CanvasRenderer,
        feedback: DomFeedback,
    }

    impl Game {
        /// Run one simulation tick, hand its events to feedback, draw
        fn frame(&mut self) {
            let input = TickInput {
                player_target_y: self.pointer.current_player_target_y(),
            };
            let events = tick(&mut self.world, &input, &mut self.rng);
            dispatch(&events, &self.world, &mut self.feedback);
            self.renderer.render(&Scene::from_world(&self.world));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let config = if settings.fit_canvas {
            settings
                .game
                .fit_to(canvas.width() as f32, canvas.height() as f32)
        } else {
            settings.game
        };
        if !settings.fit_canvas {
            canvas.set_width(config.field_width as u32);
            canvas.set_height(config.field_height as u32);
        }

        let Some(renderer) = CanvasRenderer::new(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = World::new(config, &mut rng);

        let mut feedback = DomFeedback::new(&document, &settings);
        feedback.show_scores(0, 0);

        let game = Rc::new(RefCell::new(Game {
            world,
            rng,
            pointer: PointerTracker::new(config.field_height),
            renderer,
            feedback,
        }));

        log::info!(
            "Game initialized with seed {} on a {}x{} field",
            seed,
            config.field_width,
            config.field_height
        );

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let sample = PointerSample::Mouse {
                    client_y: event.client_y() as f32,
                };
                game.borrow_mut()
                    .pointer
                    .on_sample(sample, surface_rect(&canvas_clone));
            });
            listen(canvas, "mousemove", true, closure);
        }

        // Touch move - first touch steers; suppress scrolling
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let sample = PointerSample::Touch {
                    client_y: event.touches().get(0).map(|t| t.client_y() as f32),
                };
                game.borrow_mut()
                    .pointer
                    .on_sample(sample, surface_rect(&canvas_clone));
            });
            listen(canvas, "touchmove", false, closure);
        }

        // Touch start/end only exist to stop scroll and zoom gestures
        for event_name in ["touchstart", "touchend"] {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
            });
            listen(canvas, event_name, false, closure);
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
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
    log::info!("Pong (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    headless::play_demo_match();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use pong_canvas::Settings;
    use pong_canvas::feedback::{Cue, FeedbackSink, dispatch};
    use pong_canvas::input::{DemoPilot, InputAdapter};
    use pong_canvas::renderer::Scene;
    use pong_canvas::sim::{TickInput, World, tick};

    /// Two minutes at 60 frames per second
    const DEMO_TICKS: u32 = 60 * 120;

    /// Counts cues and logs score changes
    #[derive(Default)]
    struct LogFeedback {
        hits: u32,
    }

    impl FeedbackSink for LogFeedback {
        fn play_cue(&mut self, cue: Cue) {
            match cue {
                Cue::Hit => self.hits += 1,
                Cue::Score => log::debug!("score cue"),
            }
        }

        fn show_scores(&mut self, player: u32, ai: u32) {
            log::info!("Score {player} - {ai}");
        }
    }

    pub fn play_demo_match() {
        let settings = Settings::load();
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut world = World::new(settings.game, &mut rng);
        let mut pilot = DemoPilot::new(&world);
        let mut feedback = LogFeedback::default();

        log::info!("Demo match with seed {seed}");

        for _ in 0..DEMO_TICKS {
            pilot.observe(&world);
            let input = TickInput {
                player_target_y: pilot.current_player_target_y(),
            };
            let events = tick(&mut world, &input, &mut rng);
            dispatch(&events, &world, &mut feedback);
        }

        let (player, ai) = world.scores();
        let scene = Scene::from_world(&world);
        log::info!(
            "Demo finished after {DEMO_TICKS} ticks: {player} - {ai}, {} hits, {} draw commands per frame",
            feedback.hits,
            scene.commands.len()
        );
        println!("Final score: player {player} - AI {ai}");
    }
}
