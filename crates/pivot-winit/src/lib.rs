//! Pivot Winit
//!
//! Window and event loop layer for the pivot demo crates: the [`App`](app::App)
//! trait and its runner, window creation, and a prioritized event queue.

pub mod app;
pub mod event;
pub mod time;
pub mod window;

pub use time::FrameTime;
pub use winit::window::WindowId;
