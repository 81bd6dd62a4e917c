//! Pivot - minimal 2D transform rendering demos
//!
//! Pivot is a small teaching codebase: it opens a window, draws a single
//! square, and spins it with a world matrix composed from position,
//! rotation, and scale. The workspace is split the usual way:
//!
//! - **pivot-core**: logging/profiling setup and the [`Transform2D`] math
//! - **pivot-winit**: window creation and the [`App`] event loop
//! - **pivot-render**: the wgpu surface, shapes, and shaders
//!
//! # Quick Start
//!
//! ```ignore
//! use pivot::prelude::*;
//!
//! struct Demo {
//!     window: RenderableWindow,
//! }
//!
//! impl App for Demo {
//!     fn render(&mut self, ctx: &mut AppCtx, window_id: WindowId, events: &mut EventBatch) {
//!         let mut frame = self.window.begin_drawing();
//!         RenderPassBuilder::new()
//!             .clear_color(Color::BLACK)
//!             .build(&mut frame)
//!             .finish();
//!     }
//! }
//!
//! fn main() {
//!     pivot::core::logging::init();
//!     run_app(|ctx| {
//!         let window = ctx.create_window(WindowDescriptor::default()).unwrap();
//!         let graphics = GraphicsContext::new_sync();
//!         Box::new(Demo {
//!             window: RenderableWindow::new(window, graphics),
//!         })
//!     });
//! }
//! ```
//!
//! The runnable demos live in this crate's `examples/` directory:
//! `world_matrix` (default white shader) and `shader_square` (custom
//! Y-flip/red shader with compile diagnostics).

// Re-export sub-crates
pub use pivot_core as core;
pub use pivot_core::math;
pub use pivot_render as render;
pub use pivot_winit as winit;

pub use pivot_core::Transform2D;

pub mod prelude {
    pub use pivot_core::Transform2D;
    pub use pivot_core::math::{Mat3, Mat4, Vec2};

    pub use pivot_winit::{
        FrameTime, WindowId,
        app::{App, AppCtx, AppFactory, run_app},
        event::{Event, EventBatch, HandleStatus},
        window::{Window, WindowBackend, WindowDescriptor},
    };

    pub use pivot_render::{
        Color, FLIP_Y_RED_SHADER, GraphicsContext, RenderPassBuilder, RenderableWindow, Shape,
        ShapeRenderer, WHITE_SHADER,
    };
}
