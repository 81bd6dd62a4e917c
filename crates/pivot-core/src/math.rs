//! Re-exports of the SIMD-accelerated `glam` math types used across the
//! workspace.
//!
//! The demos only touch a handful of these ([`Vec2`], [`Mat3`], [`Mat4`]),
//! but the full crate is re-exported so downstream code has one import path
//! for math.

pub use glam::*;
