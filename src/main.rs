//! rig3d - Rigged Humanoid Viewer
//!
//! Opens a window, builds the humanoid scene once the GPU is ready, and
//! drives animation and the orbit camera every frame.

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use rig3d::config::AppConfig;
use rig3d::input::{camera_controller, InputAction, InputMapper};
use rig3d::scene::{on_scene_ready, HumanoidRig, Stage};
use rig3d::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use rig3d_input::CameraController;
use rig3d_render::RenderableGeometry;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// World, camera and light
    stage: Stage,
    /// Set once the scene has been built
    rig: Option<HumanoidRig>,
    controller: CameraController,
    simulation: SimulationSystem,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    /// Cached GPU geometry (rebuilt when the world changes)
    geometry: RenderableGeometry,
    last_cursor: Option<PhysicalPosition<f64>>,
    paused: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let controller = camera_controller(&config.camera);
        Self {
            config,
            stage: Stage::new(),
            rig: None,
            controller,
            simulation: SimulationSystem::new(),
            window_system: None,
            render_system: None,
            geometry: RenderableGeometry::new(),
            last_cursor: None,
            paused: false,
        }
    }

    /// Rebuild and upload geometry from the world
    fn refresh_geometry(&mut self) {
        self.geometry.rebuild(&self.stage.world);
        if let Some(render) = &mut self.render_system {
            render.upload_geometry(&self.geometry);
        }
        self.stage.world.clear_all_dirty();
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetCamera => {
                if let Some(camera) = &mut self.stage.camera {
                    camera.restore_state();
                }
                self.controller.reset();
                log::info!("Camera reset to starting orbit");
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window_system {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ToggleInertia => {
                let enabled = self.controller.toggle_inertia();
                log::info!("Camera inertia: {}", if enabled { "ON" } else { "OFF" });
            }
            InputAction::TogglePause => {
                if let Some(rig) = &self.rig {
                    self.paused = !self.paused;
                    rig.set_paused(&mut self.stage.world, self.paused);
                    log::info!("Animation {}", if self.paused { "paused" } else { "resumed" });
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = self.simulation.update(&mut self.stage, &mut self.controller);
        if result.geometry_dirty {
            self.refresh_geometry();
        }

        let Some(camera) = &self.stage.camera else {
            return;
        };

        if let Some(window) = &self.window_system {
            window.update_title(camera.alpha(), camera.beta(), camera.radius(), self.paused);
        }

        if let Some(render) = &mut self.render_system {
            match render.render_frame(camera, self.stage.light.as_ref()) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window_system {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => self.render_system = Some(render),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }
        self.window_system = Some(window_system);

        // The scene is built exactly once, the first time the GPU is ready
        if self.rig.is_none() {
            match on_scene_ready(&mut self.stage, &self.config.scene()) {
                Ok(rig) => self.rig = Some(rig),
                Err(e) => {
                    log::error!("Failed to build scene: {}", e);
                    event_loop.exit();
                    return;
                }
            }
        }

        self.refresh_geometry();
        self.simulation.reset_clock();
        if let Some(window) = &self.window_system {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render_system {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
                if state == ElementState::Released && !self.controller.is_dragging() {
                    self.last_cursor = None;
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(last) = self.last_cursor {
                    self.controller
                        .process_mouse_motion(position.x - last.x, position.y - last.y);
                }
                self.last_cursor = Some(position);
            }

            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.controller.process_scroll(delta);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting rig3d");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
