//! Hyperview - 4D wireframe visualizer
//!
//! Renders a 4D scene (a wireframe hypercube by default) through a
//! movable, rotatable 4D camera onto a 2D window.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hyperview::config::AppConfig;
use hyperview::input::{InputAction, InputMapper};
use hyperview::scene;
use hyperview::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use hyperview_core::Scene;
use hyperview_input::CameraController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// The 4D scene, including the camera
    scene: Scene,
    controller: CameraController,
    simulation: SimulationSystem,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        // Build the startup scene; a bad rotation plane label is fatal
        let scene = scene::build_scene(&config.scene, &config.camera)
            .unwrap_or_else(|e| panic!("Invalid scene configuration: {}", e));

        // Configure controller from config
        let controller = CameraController::new()
            .with_move_speed(config.input.move_speed)
            .with_w_move_speed(config.input.w_move_speed)
            .with_rotate_speed(config.input.rotate_speed);

        Self {
            config,
            scene,
            controller,
            simulation: SimulationSystem::new(),
            window: None,
            render: None,
        }
    }

    fn reset_camera(&mut self) {
        *self.scene.camera_mut() = scene::build_camera(&self.config.camera);
        log::info!("camera reset to starting pose");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = WindowSystem::create(event_loop, &self.config.window)
            .unwrap_or_else(|e| panic!("Failed to create window: {}", e));
        let render = RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        );

        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => event_loop.exit(),
                        Some(InputAction::ResetCamera) => self.reset_camera(),
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        None => {
                            self.controller.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                // Update the camera from input, then project the scene
                let primitives = self.simulation.update(&mut self.scene, &self.controller);

                if let (Some(window), Some(render)) = (&self.window, &mut self.render) {
                    match render.render_frame(&primitives) {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            log::warn!("surface lost, reconfiguring");
                            render.recover_surface();
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("dropped a frame: {}", e),
                    }

                    let pos = self.scene.camera().position;
                    window.update_title([pos.x, pos.y, pos.z, pos.w]);
                }
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

fn main() {
    env_logger::init();
    log::info!("Starting Hyperview");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
