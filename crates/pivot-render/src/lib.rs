//! GPU rendering layer for the pivot demos.
//!
//! Wraps `wgpu` with the small surface the demos need: a shared
//! [`GraphicsContext`], a [`RenderableWindow`] that owns a swapchain
//! surface, per-frame [`FrameContext`]/[`RenderPassBuilder`] plumbing, and
//! the [`Shape`]/[`ShapeRenderer`] pair that draws indexed 2D geometry
//! under a world transform.

pub mod color;
pub mod context;
pub mod frame;
pub mod shader;
pub mod shape;
pub mod window;

pub use color::Color;
pub use context::GraphicsContext;
pub use frame::{ClearOp, FrameContext, FrameStats, RenderPass, RenderPassBuilder, Surface};
pub use shader::{FLIP_Y_RED_SHADER, ShaderError, WHITE_SHADER, compile_shader};
pub use shape::{Shape, ShapeError, ShapeRenderer};
pub use window::{RenderableWindow, WindowContextDescriptor};
