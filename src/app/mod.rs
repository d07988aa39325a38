//! Winit application shell.
//!
//! [`App`] owns the window, renderer, asset server, scene and input state,
//! and drives the render loop: once [`App::run`] starts the event loop there
//! is no stop or pause surface — every presented frame requests the next
//! redraw until the window closes.

pub mod input;
pub mod viewport;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::assets::AssetServer;
use crate::errors::Result;
use crate::renderer::Renderer;
use crate::renderer::settings::RenderSettings;
use crate::scene::Scene;
use crate::utils::time::Timer;
use input::Input;
use viewport::ViewportController;

/// Per-frame user callback: scene, assets, input, total elapsed seconds,
/// delta seconds.
pub type UpdateFn = Box<dyn FnMut(&mut Scene, &AssetServer, &Input, f32, f32)>;

pub struct App {
    window: Option<Arc<Window>>,
    pub title: String,
    pub renderer: Renderer,
    pub assets: AssetServer,
    pub scene: Scene,
    pub viewport: ViewportController,

    update_fn: Option<UpdateFn>,
    timer: Timer,
    input: Input,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: None,
            title: "ringbox".into(),
            renderer: Renderer::new(RenderSettings::default()),
            assets: AssetServer::new(),
            scene: Scene::new(),
            viewport: ViewportController::new(),
            update_fn: None,
            timer: Timer::new(),
            input: Input::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.renderer = Renderer::new(settings);
        self
    }

    /// Installs the per-frame update callback.
    pub fn set_update_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&mut Scene, &AssetServer, &Input, f32, f32) + 'static,
    {
        self.update_fn = Some(Box::new(f));
        self
    }

    /// Starts the event loop. Blocks until the window closes.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self).map_err(Into::into)
    }

    fn update(&mut self) {
        self.timer.tick();
        let total_time = self.timer.elapsed_seconds();
        let dt = self.timer.dt_seconds();

        if let Some(update_fn) = &mut self.update_fn {
            update_fn(&mut self.scene, &self.assets, &self.input, total_time, dt);
        }

        self.input.end_frame();
        self.scene.update();
    }

    fn render(&mut self) {
        if self.window.is_none() {
            return;
        }
        if let Some(camera) = self.scene.main_camera() {
            self.renderer.render(&self.scene, camera, &self.assets);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");
        let window = Arc::new(window);
        self.window = Some(window.clone());

        log::info!("Initializing renderer backend...");

        let size = window.inner_size();
        self.input.handle_resize(size.width, size.height);

        if let Err(e) =
            pollster::block_on(self.renderer.init(window, size.width, size.height))
        {
            log::error!("Fatal renderer error: {e}");
            event_loop.exit();
            return;
        }

        // Animations are timed from the first presented frame, not from
        // however long GPU initialization took
        self.timer = Timer::new();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                let scale_factor = self
                    .window
                    .as_ref()
                    .map_or(1.0, |w| w.scale_factor() as f32);

                self.renderer
                    .resize(physical_size.width, physical_size.height, scale_factor);
                self.input
                    .handle_resize(physical_size.width, physical_size.height);
                self.viewport.handle_resize(
                    &mut self.scene,
                    physical_size.width,
                    physical_size.height,
                    scale_factor,
                );
            }
            WindowEvent::RedrawRequested => {
                self.update();
                self.render();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.handle_cursor_move(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.handle_mouse_input(state, button);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.input.handle_mouse_wheel(delta);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
