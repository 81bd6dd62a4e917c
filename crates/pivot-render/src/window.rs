use pivot_core::geometry::PhysicalSize;
use pivot_core::profiling::profile_function;
use pivot_winit::{
    WindowId,
    window::{Window, WindowBackend},
};

use crate::{
    context::GraphicsContext,
    frame::{FrameContext, FrameStats, Surface},
};

/// Descriptor for configuring a window's rendering context.
pub struct WindowContextDescriptor {
    /// The surface texture format. If None, uses the default format for the surface.
    pub format: Option<wgpu::TextureFormat>,
    /// Present mode for the surface.
    pub present_mode: Option<wgpu::PresentMode>,
}

impl Default for WindowContextDescriptor {
    fn default() -> Self {
        Self {
            format: None,
            present_mode: None,
        }
    }
}

struct PendingReconfigure {
    resize: Option<PhysicalSize<u32>>,
}

impl PendingReconfigure {
    const fn new() -> Self {
        Self { resize: None }
    }
}

/// A window with an attached swapchain surface.
///
/// Resize events are deferred into a pending reconfigure and applied at the
/// start of the next frame, so the surface is only ever reconfigured
/// between frames.
pub struct RenderableWindow {
    window: Window,
    context: &'static GraphicsContext,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    reconfigure: PendingReconfigure,
}

impl RenderableWindow {
    pub fn new(window: Window, context: &'static GraphicsContext) -> Self {
        Self::new_with_descriptor(window, context, WindowContextDescriptor::default())
    }

    pub fn new_with_descriptor(
        window: Window,
        context: &'static GraphicsContext,
        descriptor: WindowContextDescriptor,
    ) -> Self {
        let PhysicalSize { width, height } = window.physical_size();
        let surface = context
            .instance
            .create_surface(window.window.clone())
            .expect("Failed to create surface");

        let mut config = surface
            .get_default_config(&context.adapter, width, height)
            .expect("Failed to get default surface configuration");

        if let Some(format) = descriptor.format {
            config.format = format;
        }
        if let Some(present_mode) = descriptor.present_mode {
            config.present_mode = present_mode;
        }

        surface.configure(&context.device, &config);

        Self {
            window,
            context,
            surface,
            config,
            reconfigure: PendingReconfigure::new(),
        }
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn graphics_context(&self) -> &'static GraphicsContext {
        self.context
    }

    /// The surface texture format, needed when building pipelines that
    /// render into this window.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Handle a window resize event. The surface is reconfigured to the new
    /// size when the next frame begins.
    pub fn resized(&mut self, new_size: PhysicalSize<u32>) {
        self.reconfigure.resize = Some(new_size);
    }
}

impl WindowBackend for RenderableWindow {
    type FrameContext = FrameContext;

    fn begin_drawing(&mut self) -> Self::FrameContext {
        profile_function!();

        if let Some(new_size) = self.reconfigure.resize.take() {
            if new_size.width > 0 && new_size.height > 0 {
                self.config.width = new_size.width;
                self.config.height = new_size.height;
                self.surface.configure(&self.context.device, &self.config);
            }
        }

        let frame = self
            .surface
            .get_current_texture()
            .expect("Failed to acquire surface texture");
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        FrameContext {
            surface: Some(Surface {
                texture: frame,
                view,
            }),
            encoder: Some(encoder),
            context: self.context,
            stats: FrameStats::new(),
            window: self.window.window.clone(),
        }
    }
}
