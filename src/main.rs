//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use canvas_pong::Tuning;
    use canvas_pong::platform::SurfaceBounds;
    use canvas_pong::renderer::{RenderState, VertexCanvas, draw_frame};
    use canvas_pong::sim::{GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        canvas: VertexCanvas,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            Self {
                state,
                render_state: None,
                canvas: VertexCanvas::new(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one simulation step
        fn update(&mut self, time: f64) {
            tick(&mut self.state);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
            if self.state.time_ticks % 600 == 0 {
                log::debug!("{} fps", self.fps);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            draw_frame(&self.state, &mut self.canvas);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.canvas.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// Optional JSON tuning from the canvas `data-tuning` attribute
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        let Some(json) = canvas.get_attribute("data-tuning") else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from data-tuning");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring data-tuning: {e}");
                Tuning::default()
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No window/document, cannot start");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("pong")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"pong\"> found, cannot start");
            return;
        };

        // Surface size is whatever the page gave the canvas
        let width = canvas.width();
        let height = canvas.height();

        let seed = js_sys::Date::now() as u64;
        let tuning = load_tuning(&canvas);
        let state = match GameState::with_tuning(width as f32, height as f32, tuning, seed) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("{e}; falling back to default tuning");
                GameState::new(width as f32, height as f32, seed)
            }
        };
        let game = Rc::new(RefCell::new(Game::new(state)));

        log::info!("Game initialized with seed: {} ({}x{})", seed, width, height);

        // Initialize WebGPU (WebGL2 fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {e}");
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {e}");
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Renderer setup failed: {e}");
                return;
            }
        }

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - absolute position relative to the canvas box
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let bounds = SurfaceBounds::new(
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            );
            let mut g = game.borrow_mut();
            bounds.apply_pointer(&mut g.state, event.client_y() as f32);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_pong::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
    use canvas_pong::platform::SurfaceBounds;
    use canvas_pong::renderer::{VertexCanvas, draw_frame};
    use canvas_pong::sim::{GameState, tick};

    /// Fraction of the remaining gap the scripted pointer closes per frame
    const POINTER_FOLLOW: f32 = 0.12;

    /// Play `frames` frames with a scripted pointer trailing the ball
    pub fn run(frames: u64, seed: u64) -> GameState {
        let (w, h) = (DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT);
        let mut state = GameState::new(w, h, seed);
        let bounds = SurfaceBounds::new(0.0, 0.0, w, h);
        let mut canvas = VertexCanvas::new();
        let mut pointer_y = h / 2.0;
        let mut paddle_hits = 0u64;

        for _ in 0..frames {
            pointer_y += (state.ball.center_y() - pointer_y) * POINTER_FOLLOW;
            bounds.apply_pointer(&mut state, pointer_y);

            paddle_hits += u64::from(tick(&mut state).paddle_hits.count());
            draw_frame(&state, &mut canvas);
        }

        log::info!(
            "Headless run finished after {} frames: {} paddle hits, {} vertices in last frame",
            frames,
            paddle_hits,
            canvas.vertices().len()
        );
        match serde_json::to_string(&state.score) {
            Ok(json) => log::info!("Final score: {json}"),
            Err(e) => log::warn!("Could not encode score: {e}"),
        }

        state
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    // One minute of play at 60 Hz
    const HEADLESS_FRAMES: u64 = 60 * 60;

    let seed = std::env::var("PONG_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("Seed: {}", seed);

    headless::run(HEADLESS_FRAMES, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
