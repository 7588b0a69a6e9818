//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Mesh pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use rig3d_render::{
    context::{ContextError, RenderContext},
    pipeline::{MeshPipeline, RenderUniforms},
    ArcRotateCamera, HemisphericLight, RenderableGeometry,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// The GPU could not be initialized
    Context(ContextError),
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
            RenderError::Context(e) => write!(f, "GPU initialization failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Uniforms for one frame seen through `camera` under `light`
///
/// Without a light the scene is lit flat white from above.
pub fn frame_uniforms(
    camera: &ArcRotateCamera,
    light: Option<&HemisphericLight>,
    aspect: f32,
) -> RenderUniforms {
    let mut uniforms = RenderUniforms {
        view_matrix: camera.view_matrix().to_cols_array_2d(),
        projection_matrix: camera.projection_matrix(aspect).to_cols_array_2d(),
        ..RenderUniforms::default()
    };
    if let Some(light) = light {
        uniforms.light_dir = light.direction().to_array();
        uniforms.light_intensity = light.intensity;
        uniforms.sky_color = light.diffuse;
        uniforms.ground_color = light.ground_color;
    }
    uniforms
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    mesh_pipeline: MeshPipeline,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut mesh_pipeline = MeshPipeline::new(&context.device, context.config.format);

        // Ensure depth texture exists
        mesh_pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        Ok(Self {
            context,
            mesh_pipeline,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.mesh_pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Upload geometry to GPU
    pub fn upload_geometry(&mut self, geometry: &RenderableGeometry) {
        self.mesh_pipeline
            .upload_geometry(&self.context.device, &self.context.queue, geometry);
        log::trace!(
            "Uploaded {} vertices and {} triangles",
            geometry.vertex_count(),
            geometry.triangle_count()
        );
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        camera: &ArcRotateCamera,
        light: Option<&HemisphericLight>,
    ) -> Result<(), RenderError> {
        let uniforms = frame_uniforms(camera, light, self.context.aspect_ratio());
        self.mesh_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.mesh_pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
