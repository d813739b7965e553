//! Starfield Backdrop entry point
//!
//! On the web this mounts the backdrop on `#starfield` and runs the frame
//! loop. Natively it runs a headless simulation and prints a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement, PageTransitionEvent};

    use starfield_backdrop::greeting::{GreetingView, fetch_greeting};
    use starfield_backdrop::platform::LoopState;
    use starfield_backdrop::renderer::CanvasSurface;
    use starfield_backdrop::sim::{PlanetEvent, PlanetIntro};
    use starfield_backdrop::{Settings, StarField};

    /// Backdrop instance holding all page state
    struct Backdrop {
        field: StarField,
        surface: Option<CanvasSurface>,
        planet: Option<PlanetIntro>,
        frames: LoopState,
    }

    impl Backdrop {
        fn new(settings: &Settings, seed: u64, surface: Option<CanvasSurface>) -> Self {
            Self {
                field: StarField::new(settings.field_config(), seed),
                surface,
                planet: None,
                frames: LoopState::default(),
            }
        }

        /// Match the canvas to the window and reseed
        fn fit_to_window(&mut self) {
            let (width, height) = window_size();
            match self.surface.as_mut() {
                Some(surface) => self.field.resize(surface, width, height),
                None => self.field.seed(width, height, self.field.config().star_count),
            }
        }

        /// Advance the planet intro and mirror it onto `#planet`
        fn update_planet(&mut self) {
            let Some(planet) = self.planet.as_mut() else {
                return;
            };
            let event = planet.tick();
            let document = web_sys::window().and_then(|w| w.document());
            let Some(document) = document else {
                return;
            };

            if let Some(el) = document
                .get_element_by_id("planet")
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                let _ = el.style().set_property(
                    "transform",
                    &format!("scale({}) rotate({}rad)", planet.scale, planet.rotation),
                );
            }
            if let Some(el) = document
                .get_element_by_id("planet-clouds")
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                let _ = el.style().set_property(
                    "transform",
                    &format!(
                        "scale({}) rotate({}rad)",
                        planet.cloud_scale(),
                        planet.cloud_rotation
                    ),
                );
            }

            if event == Some(PlanetEvent::Loaded) {
                if let Some(title) = document.get_element_by_id("title") {
                    let _ = title.set_attribute("class", "hidden");
                }
            }
        }

        /// Stop the frame loop
        fn stop(&mut self) {
            if let (Some(handle), Some(window)) = (self.frames.stop(), web_sys::window()) {
                let _ = window.cancel_animation_frame(handle);
            }
            log::info!("Backdrop stopped after {} frames", self.field.frame());
        }

        /// Restart after `stop`; false if already running
        fn resume(&mut self) -> bool {
            let resumed = self.frames.resume();
            if resumed {
                log::info!("Backdrop resumed at frame {}", self.field.frame());
            }
            resumed
        }
    }

    fn window_size() -> (u32, u32) {
        let Some(window) = web_sys::window() else {
            return (0, 0);
        };
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Starfield backdrop starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document; backdrop disabled");
            return;
        };

        let surface = document
            .get_element_by_id("starfield")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .and_then(CanvasSurface::new);
        if surface.is_none() {
            log::warn!("No 2D canvas at #starfield; frames will be skipped");
        }

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(Backdrop::new(&settings, seed, surface)));
        app.borrow_mut().fit_to_window();

        log::info!("Backdrop initialized with seed: {}", seed);

        setup_resize(app.clone());
        setup_pagehide(app.clone());
        setup_pageshow(app.clone());
        setup_title_gesture(app.clone());
        load_greeting();

        request_animation_frame(app);
    }

    fn setup_resize(app: Rc<RefCell<Backdrop>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().fit_to_window();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_pagehide(app: Rc<RefCell<Backdrop>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().stop();
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Pages restored from the back/forward cache pick the loop back up
    fn setup_pageshow(app: Rc<RefCell<Backdrop>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
            if !event.persisted() {
                return;
            }
            let resumed = app.borrow_mut().resume();
            if resumed {
                request_animation_frame(app.clone());
            }
        });
        let _ =
            window.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Clicking the title grows it into the planet
    fn setup_title_gesture(app: Rc<RefCell<Backdrop>>) {
        let Some(title) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("title"))
        else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut app = app.borrow_mut();
            if app.planet.is_none() {
                app.planet = Some(PlanetIntro::new(0.0));
                log::info!("Planet intro started");
            }
        });
        let _ = title.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Fill `#greeting` from the backend
    fn load_greeting() {
        let Some(card) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("greeting"))
        else {
            return;
        };
        show_greeting(&card, &GreetingView::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            let view = GreetingView::from_result(fetch_greeting("").await);
            show_greeting(&card, &view);
        });
    }

    /// Replace the card body with one `<p>` per paragraph
    fn show_greeting(card: &Element, view: &GreetingView) {
        let Some(document) = card.owner_document() else {
            return;
        };
        card.set_text_content(None);
        for text in view.paragraphs() {
            match document.create_element("p") {
                Ok(p) => {
                    p.set_text_content(Some(&text));
                    if let Err(e) = card.append_child(&p) {
                        log::warn!("Failed to show greeting: {:?}", e);
                    }
                }
                Err(e) => log::warn!("Failed to create greeting paragraph: {:?}", e),
            }
        }
    }

    fn request_animation_frame(app: Rc<RefCell<Backdrop>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let next = app.clone();
        let closure = Closure::once(move |time: f64| {
            frame_loop(next, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => app.borrow_mut().frames.set_pending(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<Backdrop>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            if !a.frames.is_running() {
                return;
            }
            let Backdrop { field, surface, .. } = &mut *a;
            field.step(surface.as_mut(), time);
            a.update_planet();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Starfield backdrop (native) starting...");
    log::info!("Native mode renders headless - run with `trunk serve` for the web version");

    native_demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native_demo {
    use serde::Serialize;

    use starfield_backdrop::Settings;
    use starfield_backdrop::StarField;
    use starfield_backdrop::platform::{FixedClock, drive};
    use starfield_backdrop::renderer::RecordingSurface;
    use starfield_backdrop::sim::{PlanetEvent, PlanetIntro, StarKind};

    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;
    const SECONDS: u64 = 30;
    const FRAMES_PER_SECOND: u64 = 60;

    #[derive(Debug, Serialize)]
    struct Summary {
        seed: u64,
        frames: u64,
        stars: usize,
        glowing_stars: usize,
        shooting_star_spawns: u32,
        active_shooting_stars: usize,
        draw_calls_per_frame: usize,
        planet_loaded_frame: Option<u32>,
    }

    pub fn run() {
        let settings = Settings::load();
        let seed = std::env::var("STARFIELD_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0x5747_4152);

        let mut field = StarField::new(settings.field_config(), seed);
        let mut surface = RecordingSurface::new(WIDTH, HEIGHT);
        field.resize(&mut surface, WIDTH, HEIGHT);

        // One chunk per second; the cooldown allows at most one spawn per chunk
        let mut clock = FixedClock::new(0.0, 0);
        let mut spawns = 0;
        let mut draw_calls_per_frame = 0;
        for second in 0..SECONDS {
            clock = FixedClock::new(clock.now_ms(), FRAMES_PER_SECOND);
            let last_spawn = field.last_spawn_ms();
            surface.take_commands();
            drive(&mut field, &mut surface, &mut clock);
            draw_calls_per_frame = surface.commands().len() / FRAMES_PER_SECOND as usize;
            if field.last_spawn_ms() != last_spawn {
                spawns += 1;
            }
            log::debug!(
                "t={}s active shooting stars: {}",
                second + 1,
                field.shooting_stars().len()
            );
        }

        let mut planet = PlanetIntro::new(0.0);
        let mut planet_loaded_frame = None;
        let mut frame = 0;
        while planet.is_easing() {
            frame += 1;
            if planet.tick() == Some(PlanetEvent::Loaded) {
                planet_loaded_frame = Some(frame);
            }
        }
        log::info!("Planet settled after {} frames", frame);

        let summary = Summary {
            seed,
            frames: field.frame(),
            stars: field.stars().len(),
            glowing_stars: field
                .stars()
                .iter()
                .filter(|s| s.kind == StarKind::Glowing)
                .count(),
            shooting_star_spawns: spawns,
            active_shooting_stars: field.shooting_stars().len(),
            draw_calls_per_frame,
            planet_loaded_frame,
        };

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to encode summary: {}", e),
        }
    }
}
