//! Granny Chase entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use granny_chase::Level;
    use granny_chase::consts::{MAX_SUBSTEPS, SIM_DT};
    use granny_chase::renderer::{self, CanvasSurface};
    use granny_chase::sim::{GameState, InputState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        surface: CanvasSurface,
        accumulator: f32,
        last_time: f64,
        was_over: bool,
    }

    impl Game {
        fn new(level: &Level, seed: u64, surface: CanvasSurface) -> Self {
            Self {
                state: GameState::new(level, seed),
                input: InputState::new(),
                surface,
                accumulator: 0.0,
                last_time: 0.0,
                was_over: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            if self.state.game_over && !self.was_over {
                self.was_over = true;
                log::info!("Player caught after {} ticks", self.state.granny.ticks);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            renderer::render(&self.state, &mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Granny Chase starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let level = load_level(&document);
        canvas.set_width(level.width as u32);
        canvas.set_height(level.height as u32);

        let seed = js_sys::Date::now() as u64;
        log::info!(
            "Level {}x{} with {} walls, seed {}",
            level.width,
            level.height,
            level.walls.len(),
            seed
        );

        let surface = CanvasSurface::new(&canvas);
        let game = Rc::new(RefCell::new(Game::new(&level, seed, surface)));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Granny Chase running!");
    }

    /// Reads an inline level override from the page, falling back to the
    /// built-in layout.
    fn load_level(document: &web_sys::Document) -> Level {
        let Some(node) = document.get_element_by_id("level") else {
            return Level::default();
        };
        let json = node.text_content().unwrap_or_default();
        match Level::from_json(&json) {
            Ok(level) => level,
            Err(e) => {
                log::warn!("Ignoring invalid level JSON: {e}");
                Level::default()
            }
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keydown
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.press(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.release(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur releases every held key
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.clear();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

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
    use std::time::{SystemTime, UNIX_EPOCH};

    use granny_chase::Level;
    use granny_chase::sim::{GameState, GrannyState, InputState, tick};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let level = Level::default();
    let mut state = GameState::new(&level, seed);
    let input = InputState::new();

    log::info!("Granny Chase (native) starting with seed {seed}");

    // Headless run: the player stands still while the granny wanders, until
    // she stumbles into them or a minute of sim time passes.
    let mut last = GrannyState::Patrol;
    for _ in 0..3600 {
        tick(&mut state, &input);
        if state.granny.state != last {
            log::info!(
                "granny -> {} at tick {}",
                state.granny.state.as_str(),
                state.granny.ticks
            );
            last = state.granny.state;
        }
        if state.game_over {
            break;
        }
    }

    if state.game_over {
        println!("Caught at tick {}. YOU GOT TEMU'D", state.granny.ticks);
    } else {
        println!(
            "Survived {} ticks; granny ended at ({:.0}, {:.0}) in {} state",
            state.granny.ticks,
            state.granny.pos.x,
            state.granny.pos.y,
            state.granny.state.as_str()
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
