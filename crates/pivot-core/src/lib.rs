//! Pivot Core
//!
//! Shared utilities for the pivot demo crates: logging and profiling
//! setup, DPI-aware geometry types, and 2D transform math.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
pub mod transform;

pub use transform::Transform2D;
