//! Double Pendulum entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement};

    use double_pendulum::renderer::{FrameBuilder, RenderState, TextLabel, draw_scene};
    use double_pendulum::sim::Simulation;
    use double_pendulum::{RenderError, Result, Settings};

    /// Readout text color (matches the rod color)
    const TEXT_STYLE: &str =
        "position:absolute;white-space:pre;font:14px 'Lucida Console',monospace;color:rgb(179,230,255)";

    /// Application instance holding all state
    struct App {
        sim: Simulation,
        render_state: RenderState,
        frame: FrameBuilder,
        canvas: HtmlCanvasElement,
        document: Document,
        hud: Element,
        running: bool,
    }

    impl App {
        /// Step the simulation if due, then draw
        fn update(&mut self, time: f64) {
            self.sim.on_tick(time);

            self.frame.clear();
            draw_scene(&self.sim, &mut self.frame);
            self.render();
            self.update_hud();
        }

        /// Render the current frame
        fn render(&mut self) {
            match self.render_state.render(&self.frame.vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    let viewport = self.render_state.viewport;
                    self.render_state.resize(w, h, viewport);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory, stopping");
                    self.running = false;
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Refresh readout text in the DOM labels over the canvas
        fn update_hud(&self) {
            for (i, label) in self.frame.labels.iter().enumerate() {
                let id = format!("readout-{i}");
                let el = match self.document.get_element_by_id(&id) {
                    Some(el) => el,
                    None => match self.create_label(&id, label) {
                        Some(el) => el,
                        None => continue,
                    },
                };
                if el.text_content().as_deref() != Some(label.text.as_str()) {
                    el.set_text_content(Some(label.text.as_str()));
                }
            }
        }

        /// Create a positioned label; the layout is fixed, so style is set only here
        fn create_label(&self, id: &str, label: &TextLabel) -> Option<Element> {
            let el = self.document.create_element("div").ok()?;
            el.set_id(id);
            el.set_attribute("style", &format!("{TEXT_STYLE};{}", label.position_style()))
                .ok()?;
            self.hud.append_child(&el).ok()?;
            Some(el)
        }

        /// Canvas was resized: resize the surface and re-anchor the pendulum
        fn resize(&mut self) {
            let (width, height, viewport) = canvas_size(&self.canvas);
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.render_state.resize(width, height, viewport);
            self.sim.on_resize(viewport.0 as f64, viewport.1 as f64);
            log::info!("Resized to {}x{} ({}x{} px)", viewport.0, viewport.1, width, height);
        }
    }

    /// Physical size and CSS-pixel viewport of the canvas
    fn canvas_size(canvas: &HtmlCanvasElement) -> (u32, u32, (f32, f32)) {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let client_w = canvas.client_width().max(1) as f64;
        let client_h = canvas.client_height().max(1) as f64;
        (
            (client_w * dpr) as u32,
            (client_h * dpr) as u32,
            (client_w as f32, client_h as f32),
        )
    }

    fn element_by_id(document: &Document, id: &str) -> Result<Element> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| RenderError::MissingElement(id.to_string()))
    }

    pub async fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)?;

        log::info!("Double Pendulum starting...");

        let window = web_sys::window().ok_or_else(|| RenderError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| RenderError::MissingElement("document".into()))?;

        let canvas: HtmlCanvasElement = element_by_id(&document, "canvas")?
            .dyn_into()
            .map_err(|_| RenderError::MissingElement("canvas is not a <canvas>".into()))?;
        let hud = element_by_id(&document, "hud")?;

        let (width, height, viewport) = canvas_size(&canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, viewport).await?;

        let sim = Simulation::new(
            &Settings::default(),
            viewport.0 as f64,
            viewport.1 as f64,
            0.0,
        );
        log::info!(
            "Pendulum anchored at ({:.0}, {:.0})",
            sim.primary.pivot.x,
            sim.primary.pivot.y
        );

        let app = Rc::new(RefCell::new(App {
            sim,
            render_state,
            frame: FrameBuilder::new(),
            canvas,
            document,
            hud,
            running: true,
        }));

        setup_resize_handler(&window, app.clone());

        request_animation_frame(app);

        log::info!("Double Pendulum running!");
        Ok(())
    }

    fn setup_resize_handler(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            animation_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animation_loop(app: Rc<RefCell<App>>, time: f64) {
        let running = {
            let mut a = app.borrow_mut();
            a.update(time);
            a.running
        };

        // Redraw unconditionally; the tick scheduler decides whether to step
        if running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_app::run().await {
        log::error!("Failed to start: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use double_pendulum::Settings;
    use double_pendulum::renderer::{FrameBuilder, draw_scene, hud};
    use double_pendulum::sim::Simulation;

    /// Client area the headless run lays the scene out in
    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 600.0;
    /// Synthetic 60 Hz frame clock
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Ten seconds of animation
    pub const FRAMES: u32 = 600;

    /// Run the animation loop against a synthetic clock, drawing into memory
    pub fn run(frames: u32) {
        let mut sim = Simulation::new(&Settings::default(), WIDTH, HEIGHT, 0.0);
        let mut frame = FrameBuilder::new();

        for i in 1..=frames {
            let stepped = sim.on_tick(i as f64 * FRAME_MS);
            frame.clear();
            draw_scene(&sim, &mut frame);

            if stepped && sim.steps % 60 == 0 {
                let [first, second] = hud::readouts(&sim);
                log::info!(
                    "step {:>5}: first θ={:>4} θ`={:>5} | second θ={:>4} θ`={:>5} | {} vertices",
                    sim.steps,
                    first.angle_deg,
                    first.speed_deg,
                    second.angle_deg,
                    second.speed_deg,
                    frame.vertices.len()
                );
            }
        }

        log::info!(
            "Ran {} steps over {} frames, trace has {} points",
            sim.steps,
            frames,
            sim.trace.len()
        );

        match serde_json::to_string_pretty(&hud::readouts(&sim)) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize readout: {e}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Double Pendulum (native) starting...");
    log::info!("Native mode has no window backend - run with `trunk serve` for the animation");

    headless::run(headless::FRAMES);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
