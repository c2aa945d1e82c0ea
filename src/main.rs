//! Shadow Bounce entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use shadow_bounce::consts::DEFAULT_DT;
    use shadow_bounce::renderer::canvas::CanvasSurface;
    use shadow_bounce::renderer::render;
    use shadow_bounce::sim::{Rect, Scene};
    use shadow_bounce::{Settings, Viewport};

    /// App instance holding all state
    struct App {
        scene: Scene,
        viewport: Viewport,
        surface: CanvasSurface,
        last_time: f64,
        show_fps: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        /// Map a client coordinate onto the arena
        fn to_arena(&self, client_x: i32, client_y: i32) -> Vec2 {
            let canvas = self.surface.canvas();
            let rect = canvas.get_bounding_client_rect();
            let bounds = Rect::new(
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.right() as f32, rect.bottom() as f32),
            );
            let backing = Vec2::new(canvas.width() as f32, canvas.height() as f32);
            self.viewport
                .client_to_arena(Vec2::new(client_x as f32, client_y as f32), bounds, backing)
        }

        fn pointer_down(&mut self, client_x: i32, client_y: i32) {
            let pos = self.to_arena(client_x, client_y);
            self.viewport.pointer_down(pos, &self.scene.obstacles);
        }

        fn pointer_move(&mut self, client_x: i32, client_y: i32) {
            if !self.viewport.is_dragging() {
                return;
            }
            let pos = self.to_arena(client_x, client_y);
            self.viewport.pointer_move(pos, &mut self.scene.obstacles);
        }

        /// Refit the arena and canvas to the page width
        fn resize(&mut self) {
            let width = host_width();
            let backing = self.viewport.resize(width, Some(&mut self.scene.obstacles));
            self.surface.apply_backing_store(backing);
        }

        /// Advance one tick and draw it
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                DEFAULT_DT
            };
            self.last_time = time;

            render(&mut self.surface, &mut self.scene, dt);

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
        }

        /// Update the FPS readout if the page has one
        fn update_hud(&self) {
            if !self.show_fps {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("fps") {
                el.set_text_content(Some(&self.fps.to_string()));
            }
        }
    }

    /// Width of the page body in CSS pixels
    fn host_width() -> f32 {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.client_width() as f32)
            .unwrap_or(800.0)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Shadow Bounce starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("canvas #canvas not found"))?
            .dyn_into()?;

        let settings = Settings::load_or_default(canvas.get_attribute("data-settings").as_deref());
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let surface = CanvasSurface::new(canvas.clone())?;
        let mut viewport = Viewport::from_settings(&settings);
        let backing = viewport.resize(host_width(), None);
        surface.apply_backing_store(backing);

        let scene = Scene::new(viewport.arena(), &settings, seed);

        let app = Rc::new(RefCell::new(App {
            scene,
            viewport,
            surface,
            last_time: 0.0,
            show_fps: settings.show_fps,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }));

        setup_input_handlers(&canvas, app.clone())?;
        setup_resize_handler(app.clone())?;

        // Start frame loop
        request_animation_frame(app);

        log::info!("Shadow Bounce running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Mouse down - pick a drag target
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().pointer_down(event.client_x(), event.client_y());
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - only acts while dragging
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().pointer_move(event.client_x(), event.client_y());
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse up - listen on the window so releasing outside the canvas ends the drag
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().viewport.pointer_up();
            });
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut().pointer_down(touch.client_x(), touch.client_y());
                }
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut().pointer_move(touch.client_x(), touch.client_y());
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end / cancel
        for kind in ["touchend", "touchcancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().viewport.pointer_up();
            });
            canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.frame(time);
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Shadow Bounce (native) starting...");
    log::info!("Interactive mode needs the browser build - run with `trunk serve` for the web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => shadow_bounce::Settings::load_or_default(Some(&json)),
            Err(e) => {
                log::warn!("Cannot read {}: {}", path, e);
                shadow_bounce::Settings::default()
            }
        },
        None => shadow_bounce::Settings::default(),
    };

    println!("\nRunning headless simulation...");
    run_headless(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulate a few seconds with scripted drags and report what happened
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(settings: &shadow_bounce::Settings) {
    use glam::Vec2;
    use shadow_bounce::Viewport;
    use shadow_bounce::consts::DEFAULT_DT;
    use shadow_bounce::renderer::{RecordingSurface, render};
    use shadow_bounce::sim::Scene;

    const HOST_WIDTH: f32 = 960.0;
    const FRAMES: u32 = 600;

    let mut viewport = Viewport::from_settings(settings);
    let backing = viewport.resize(HOST_WIDTH, None);
    let mut scene = Scene::new(viewport.arena(), settings, settings.seed.unwrap_or(1));
    let mut surface = RecordingSurface::new();

    // Pan the light from an empty corner for the first second
    let start = Vec2::splat(1.0);
    viewport.pointer_down(start, &scene.obstacles);

    let initial_speed = scene.ball.speed();
    let mut draw_calls = 0;
    for frame in 0..FRAMES {
        if frame < 60 {
            let pos = start + Vec2::new(frame as f32 * 2.0, frame as f32);
            viewport.pointer_move(pos, &mut scene.obstacles);
        } else if frame == 60 {
            viewport.pointer_up();
        }
        render(&mut surface, &mut scene, DEFAULT_DT);
        draw_calls += surface.take().len();
    }

    let light = scene.obstacles.light();
    println!(
        "arena {}x{} (backing {}x{}), {} obstacles",
        viewport.arena().x,
        viewport.arena().y,
        backing.width,
        backing.height,
        scene.obstacles.len()
    );
    println!("light origin ({:.1}, {:.1})", light.x, light.y);
    println!(
        "ball at ({:.1}, {:.1}), speed {:.2} (initial {:.2})",
        scene.ball.pos.x,
        scene.ball.pos.y,
        scene.ball.vel.length(),
        initial_speed
    );
    println!("{} frames, {} draw calls", FRAMES, draw_calls);
}
