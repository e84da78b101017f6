//! Glidy Bird entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{EventTarget, HtmlCanvasElement, KeyboardEvent};

    use glidy_bird::GameLoop;
    use glidy_bird::consts::LIFT_KEY_CODE;
    use glidy_bird::renderer::{GpuRenderer, Overlay, RenderState};
    use glidy_bird::settings::Settings;
    use glidy_bird::sim::{Scheduler, Timestamp};

    /// Key that toggles the demo controller
    const AUTOPILOT_KEY_CODE: &str = "KeyI";

    thread_local! {
        static RUNNING: RefCell<Option<Bootstrap>> = const { RefCell::new(None) };
    }

    /// Game instance plus the overlay currently shown
    struct Game {
        game: GameLoop<GpuRenderer>,
        overlay: Overlay,
    }

    impl Game {
        fn frame(&mut self, now: Timestamp) {
            if self.game.on_tick(now) {
                self.update_overlay();
            }
        }

        /// Show the DOM text matching the last drawn frame
        fn update_overlay(&mut self) {
            let Some(overlay) = self.game.renderer().map(|r| r.overlay()) else {
                return;
            };
            if overlay == self.overlay {
                return;
            }
            self.overlay = overlay;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let show = |id: &str, visible: bool| {
                if let Some(el) = document.get_element_by_id(id) {
                    let class = if visible { "overlay" } else { "overlay hidden" };
                    let _ = el.set_attribute("class", class);
                }
            };
            let set_text = |id: &str, text: &str| {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text));
                }
            };

            show("title", overlay == Overlay::Title);
            show("hud", matches!(overlay, Overlay::Hud { .. }));
            show("game-over", matches!(overlay, Overlay::GameOver { .. }));
            match overlay {
                Overlay::Hud { score } => set_text("hud-score", &score.to_string()),
                Overlay::GameOver { score } => set_text("final-score", &score.to_string()),
                Overlay::Title | Overlay::Blank => {}
            }
        }
    }

    /// A registered DOM listener, removed again on drop
    struct Listener {
        target: EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl Listener {
        fn add(
            target: &EventTarget,
            kind: &'static str,
            handler: impl FnMut(web_sys::Event) + 'static,
        ) -> Result<Self, JsValue> {
            let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            Ok(Self {
                target: target.clone(),
                kind,
                closure,
            })
        }
    }

    impl Drop for Listener {
        fn drop(&mut self) {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
        }
    }

    /// Self-rescheduling animation-frame callback
    struct FrameLoop {
        handle: Rc<Cell<i32>>,
        callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    }

    impl FrameLoop {
        fn start(game: Rc<RefCell<Game>>) -> Result<Self, JsValue> {
            let handle = Rc::new(Cell::new(0));
            let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));

            let next = callback.clone();
            let next_handle = handle.clone();
            *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
                game.borrow_mut().frame(Timestamp::from_millis(time));
                if let Some(cb) = next.borrow().as_ref()
                    && let Ok(id) = request_animation_frame(cb)
                {
                    next_handle.set(id);
                }
            }));

            if let Some(cb) = callback.borrow().as_ref() {
                handle.set(request_animation_frame(cb)?);
            }
            Ok(Self { handle, callback })
        }
    }

    impl Drop for FrameLoop {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(self.handle.get());
            }
            // Break the closure's reference to itself
            self.callback.borrow_mut().take();
        }
    }

    /// Everything that must be torn down with the page
    struct Bootstrap {
        _frame_loop: FrameLoop,
        _listeners: Vec<Listener>,
    }

    fn request_animation_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
        web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .request_animation_frame(cb.as_ref().unchecked_ref())
    }

    /// Monotonic clock shared with animation-frame timestamps
    fn now() -> Timestamp {
        let millis = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Timestamp::from_millis(millis)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Glidy Bird starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::default();
        let logical_size = (settings.canvas_width, settings.canvas_height);

        // Backing store at device resolution, layout at logical size
        let dpr = window.device_pixel_ratio();
        let width = (settings.canvas_width as f64 * dpr) as u32;
        let height = (settings.canvas_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let mut game_loop = match GameLoop::new(settings, seed) {
            Ok(game_loop) => game_loop,
            Err(e) => {
                log::error!("Invalid settings: {}", e);
                return;
            }
        };
        // Frames are projected right away; they reach the screen once the
        // surface below is attached
        game_loop.attach_renderer(GpuRenderer::new());
        let game = Rc::new(RefCell::new(Game {
            game: game_loop,
            overlay: Overlay::Blank,
        }));

        let listeners = match setup_input_handlers(&window, game.clone()) {
            Ok(listeners) => listeners,
            Err(e) => {
                log::error!("Failed to register input handlers: {:?}", e);
                return;
            }
        };
        let frame_loop = match FrameLoop::start(game.clone()) {
            Ok(frame_loop) => frame_loop,
            Err(e) => {
                log::error!("Failed to start frame loop: {:?}", e);
                return;
            }
        };
        RUNNING.with(|running| {
            *running.borrow_mut() = Some(Bootstrap {
                _frame_loop: frame_loop,
                _listeners: listeners,
            });
        });
        setup_teardown(&window);

        init_gpu(canvas, game, width, height, logical_size).await;

        log::info!("Glidy Bird running!");
    }

    async fn init_gpu(
        canvas: HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
        width: u32,
        height: u32,
        logical_size: (f32, f32),
    ) {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas)) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
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
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, logical_size).await {
            Ok(render_state) => {
                if let Some(renderer) = game.borrow_mut().game.renderer_mut() {
                    renderer.attach(render_state);
                }
            }
            Err(e) => log::error!("Renderer setup failed: {}", e),
        }
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<Vec<Listener>, JsValue> {
        let target: EventTarget = window.clone().unchecked_into();
        let mut listeners = Vec::with_capacity(3);

        // Key down: lift / start, autopilot toggle
        {
            let game = game.clone();
            listeners.push(Listener::add(&target, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let code = event.code();
                let mut g = game.borrow_mut();
                if code == LIFT_KEY_CODE {
                    event.prevent_default();
                    g.game.key_down(&code, now());
                } else if code == AUTOPILOT_KEY_CODE && !event.repeat() {
                    let enabled = !g.game.autopilot_enabled();
                    g.game.set_autopilot(enabled, now());
                }
            })?);
        }

        // Key up: release lift
        {
            let game = game.clone();
            listeners.push(Listener::add(&target, "keyup", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    game.borrow_mut().game.key_up(&event.code(), now());
                }
            })?);
        }

        // Window blur: the key-up may never arrive
        listeners.push(Listener::add(&target, "blur", move |_event| {
            game.borrow_mut().game.blur(now());
        })?);

        Ok(listeners)
    }

    fn setup_teardown(window: &web_sys::Window) {
        let closure = Closure::once_into_js(move |_event: web_sys::Event| {
            RUNNING.with(|running| running.borrow_mut().take());
            log::info!("Glidy Bird stopped");
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.unchecked_ref());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Glidy Bird (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play one run on a synthetic 60 Hz clock
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use glidy_bird::consts::LIFT_KEY_CODE;
    use glidy_bird::renderer::SceneRenderer;
    use glidy_bird::sim::{GameMode, Scheduler, Timestamp};
    use glidy_bird::{GameLoop, Settings};

    /// Ten simulated minutes
    const MAX_DEMO_TICKS: u64 = 60 * 60 * 10;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game: GameLoop = match GameLoop::new(Settings::default(), seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            return;
        }
    };
    game.attach_renderer(SceneRenderer::new());
    game.set_autopilot(true, Timestamp::ZERO);
    game.key_down(LIFT_KEY_CODE, Timestamp::ZERO);
    game.key_up(LIFT_KEY_CODE, Timestamp::ZERO);

    let period = game.simulation().settings().tick_period();
    for frame in 0..MAX_DEMO_TICKS {
        let now = Timestamp::from_secs(frame as f64 * period);
        game.on_tick(now);

        if frame % 600 == 0 {
            log::debug!(
                "t={:.0}s score={} vertices={}",
                now.as_secs(),
                game.simulation().state().score,
                game.renderer().map(|r| r.vertices().len()).unwrap_or(0)
            );
        }
        if game.mode() == GameMode::Ended {
            break;
        }
    }

    let state = game.simulation().state();
    match state.mode {
        GameMode::Ended => log::info!("Demo run ended with score {}", state.score),
        _ => log::info!("Demo run survived with score {}", state.score),
    }
}
