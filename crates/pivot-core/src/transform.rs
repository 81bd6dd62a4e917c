//! 2D world transforms.
//!
//! A [`Transform2D`] stores a position, rotation, and scale, and composes
//! the world matrix for you.

use glam::{Mat3, Mat4, Vec2, Vec4};

/// A 2D transform described by position, rotation, and scale.
///
/// The world matrix is recomputed from the three fields on every
/// [`matrix`](Self::matrix) call; there is no cached state to go stale.
/// Composition order is the standard local-to-world one: scale first, then
/// rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    position: Vec2,
    rotation: f32,
    scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform2D {
    /// Identity transform: origin position, zero rotation, unit scale.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Rotation angle in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Add `delta` radians to the current rotation.
    ///
    /// The angle is not normalized; trigonometric periodicity makes wrapping
    /// implicit.
    pub fn rotate(&mut self, delta: f32) {
        self.rotation += delta;
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Set a uniform scale.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = Vec2::splat(scale);
    }

    /// Set a non-uniform scale.
    pub fn set_scale_xy(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Compose the world matrix `T(position) * R(rotation) * S(scale)`.
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_translation(self.position)
            * Mat3::from_angle(self.rotation)
            * Mat3::from_scale(self.scale)
    }

    /// The world matrix widened to a `Mat4` for GPU upload.
    ///
    /// The 2D affine matrix lands in the XY plane: translation moves to the
    /// fourth column and Z stays untouched.
    pub fn matrix4(&self) -> Mat4 {
        let m = self.matrix();
        Mat4::from_cols(
            Vec4::new(m.x_axis.x, m.x_axis.y, 0.0, 0.0),
            Vec4::new(m.y_axis.x, m.y_axis.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(m.z_axis.x, m.z_axis.y, 0.0, 1.0),
        )
    }

    /// Transform a local-space point into world space.
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.matrix().transform_point2(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx_eq(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_default_is_identity() {
        let t = Transform2D::new();
        assert_eq!(t.matrix(), Mat3::IDENTITY);
        assert_eq!(t.matrix4(), Mat4::IDENTITY);
    }

    #[test]
    fn test_scale_applies_before_rotation() {
        let mut t = Transform2D::new();
        t.set_scale(2.0);
        approx_eq(t.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(2.0, 0.0));

        // With a quarter turn the scaled vector ends up on the Y axis.
        t.set_rotation(FRAC_PI_2);
        approx_eq(t.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut incremental = Transform2D::new();
        let mut total = 0.0f32;
        for _ in 0..1000 {
            incremental.rotate(0.0002);
            total += 0.0002;
        }

        let mut direct = Transform2D::new();
        direct.set_rotation(total);

        let a = incremental.matrix();
        let b = direct.matrix();
        assert!(a.abs_diff_eq(b, 1e-5));
    }

    #[test]
    fn test_rotation_wraps_trigonometrically() {
        let mut t = Transform2D::new();
        t.set_rotation(2.0 * PI);
        approx_eq(t.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 0.0));
        // The stored angle itself is not normalized.
        assert_eq!(t.rotation(), 2.0 * PI);
    }

    #[test]
    fn test_translation_applies_last() {
        let mut t = Transform2D::new();
        t.set_position(Vec2::new(3.0, -1.0));
        t.set_rotation(PI);
        approx_eq(t.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_non_uniform_scale() {
        let mut t = Transform2D::new();
        t.set_scale_xy(Vec2::new(2.0, 3.0));
        approx_eq(t.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_square_corners_scaled_and_translated() {
        // The demo scenario: quarter-size square moved up-right.
        let corners = [
            Vec2::new(-1.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
        ];

        let mut t = Transform2D::new();
        t.set_scale(0.25);
        t.set_position(Vec2::new(0.25, 0.25));

        for corner in corners {
            approx_eq(
                t.transform_point(corner),
                corner * 0.25 + Vec2::new(0.25, 0.25),
            );
        }
    }

    #[test]
    fn test_matrix4_embeds_affine_matrix() {
        let mut t = Transform2D::new();
        t.set_position(Vec2::new(5.0, 7.0));
        t.set_rotation(0.3);
        t.set_scale(2.0);

        let m3 = t.matrix();
        let m4 = t.matrix4();

        let p = Vec2::new(1.5, -2.0);
        let via3 = m3.transform_point2(p);
        let via4 = m4 * Vec4::new(p.x, p.y, 0.0, 1.0);
        approx_eq(via3, Vec2::new(via4.x, via4.y));
        assert_eq!(via4.z, 0.0);
        assert_eq!(via4.w, 1.0);
    }
}
