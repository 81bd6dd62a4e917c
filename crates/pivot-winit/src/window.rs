use std::sync::Arc;

use pivot_core::geometry::{PhysicalSize, ScaleFactor};
pub use winit::window::Window as WinitWindow;
use winit::{error::OsError, event_loop::ActiveEventLoop};

pub struct WindowDescriptor {
    pub title: String,
    pub resizeable: bool,
    /// Inner size in physical pixels. `None` uses the platform default.
    pub size: Option<PhysicalSize<u32>>,
    pub visible: bool,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            title: "Pivot Window".to_string(),
            resizeable: true,
            size: None,
            visible: true,
        }
    }
}

pub struct Window {
    pub window: Arc<winit::window::Window>,
}

impl Window {
    pub fn id(&self) -> winit::window::WindowId {
        self.window.id()
    }

    /// Get the physical size of the window in pixels.
    pub fn physical_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size().into()
    }

    /// Get the scale factor for this window.
    pub fn scale_factor(&self) -> ScaleFactor {
        ScaleFactor(self.window.scale_factor())
    }

    /// Get the raw scale factor as f64.
    pub fn scale_factor_f64(&self) -> f64 {
        self.window.scale_factor()
    }

    pub(crate) fn new(
        event_loop: &ActiveEventLoop,
        descriptor: WindowDescriptor,
    ) -> Result<Self, OsError> {
        let mut attributes = WinitWindow::default_attributes()
            .with_title(descriptor.title)
            .with_resizable(descriptor.resizeable)
            .with_visible(descriptor.visible);

        if let Some(size) = descriptor.size {
            attributes = attributes.with_inner_size(winit::dpi::PhysicalSize::from(size));
        }

        let window = Arc::new(event_loop.create_window(attributes)?);

        Ok(Window { window })
    }
}

/// A backend that can start drawing a frame into a window.
pub trait WindowBackend {
    type FrameContext;

    fn begin_drawing(&mut self) -> Self::FrameContext;
}
