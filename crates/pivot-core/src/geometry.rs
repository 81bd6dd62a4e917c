//! DPI-aware size and position types shared by the windowing and render
//! layers.
//!
//! Physical coordinates are device pixels; logical coordinates are physical
//! divided by the window's scale factor.

/// A size in physical (device) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicalSize<T> {
    pub width: T,
    pub height: T,
}

impl<T> PhysicalSize<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

/// A size in logical (scale-factor independent) units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalSize<T> {
    pub width: T,
    pub height: T,
}

impl<T> LogicalSize<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

/// A position in physical (device) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicalPosition<T> {
    pub x: T,
    pub y: T,
}

impl<T> PhysicalPosition<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// A position in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalPosition<T> {
    pub x: T,
    pub y: T,
}

impl<T> LogicalPosition<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// A window's scale factor (physical pixels per logical unit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(pub f64);

#[cfg(feature = "winit")]
mod winit_conversions {
    use super::*;

    impl<T> From<winit::dpi::PhysicalSize<T>> for PhysicalSize<T> {
        fn from(size: winit::dpi::PhysicalSize<T>) -> Self {
            Self {
                width: size.width,
                height: size.height,
            }
        }
    }

    impl<T> From<PhysicalSize<T>> for winit::dpi::PhysicalSize<T> {
        fn from(size: PhysicalSize<T>) -> Self {
            Self {
                width: size.width,
                height: size.height,
            }
        }
    }

    impl<T> From<winit::dpi::PhysicalPosition<T>> for PhysicalPosition<T> {
        fn from(pos: winit::dpi::PhysicalPosition<T>) -> Self {
            Self { x: pos.x, y: pos.y }
        }
    }
}
