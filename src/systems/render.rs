//! GPU painting system
//!
//! Owns the render context and the wire pipeline, and turns one frame's
//! screen primitives into a presented surface texture.

use std::sync::Arc;
use winit::window::Window;

use hyperview_core::ScreenPrimitive;
use hyperview_render::{context::RenderContext, pipeline::WirePipeline};

use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU painting
pub struct RenderSystem {
    context: RenderContext,
    pipeline: WirePipeline,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, config: &RenderingConfig, vsync: bool) -> Self {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync));
        let pipeline = WirePipeline::new(&context.device, context.config.format);
        pipeline.set_viewport(&context.queue, context.size.width, context.size.height);

        let [r, g, b, a] = config.background_color;
        let clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };

        Self {
            context,
            pipeline,
            clear_color,
        }
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.set_viewport(&self.context.queue, width, height);
    }

    /// Paint a single frame of screen primitives
    ///
    /// A failed frame presents nothing; the caller decides whether to
    /// reconfigure (lost surface) or abort (out of memory).
    pub fn render_frame(&mut self, primitives: &[ScreenPrimitive]) -> Result<(), RenderError> {
        let frame = self
            .context
            .surface
            .get_current_texture()
            .map_err(|e| match e {
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                    RenderError::SurfaceLost
                }
                wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
                other => RenderError::Other(other.to_string()),
            })?;

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.pipeline
            .prepare(&self.context.device, &self.context.queue, primitives);

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });

        self.pipeline.render(&mut encoder, &view, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }
}
