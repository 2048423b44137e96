//! 4x4 double-precision transform composition

use nalgebra::{Matrix4, Vector3};

/// Affine transform, column-vector convention
pub type Transform4x4 = Matrix4<f64>;

/// Accumulates transforms by right-multiplication.
///
/// Only a single level is kept: [`MatrixStack::push_matrix`] restarts the
/// accumulation from identity rather than saving the previous matrix.
/// Matrices multiplied first are applied to a point first.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStack {
    current: Transform4x4,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            current: Transform4x4::identity(),
        }
    }

    /// Reset the current matrix to identity
    pub fn push_matrix(&mut self) {
        self.current = Transform4x4::identity();
    }

    /// current = current * m
    pub fn mult_matrix(&mut self, m: &Transform4x4) {
        self.current *= m;
    }

    pub fn get_matrix(&self) -> Transform4x4 {
        self.current
    }

    /// Pure translation matrix
    pub fn translate(v: &Vector3<f64>) -> Transform4x4 {
        Transform4x4::new_translation(v)
    }

    /// Apply `m` to a point (w = 1)
    pub fn mult_point(m: &Transform4x4, p: &Vector3<f64>) -> Vector3<f64> {
        let rotated = m.fixed_view::<3, 3>(0, 0) * p;
        rotated + m.fixed_view::<3, 1>(0, 3)
    }

    /// Inverse of a transform whose upper-left 3x3 block is orthonormal.
    ///
    /// Transposes the rotation and rotates the negated translation. Scale or
    /// shear in `m` gives a wrong result; use `try_inverse` for those.
    pub fn rigid_inverse(m: &Transform4x4) -> Transform4x4 {
        let rotation_t = m.fixed_view::<3, 3>(0, 0).transpose();
        let translation = -(rotation_t * m.fixed_view::<3, 1>(0, 3));

        let mut inverse = Transform4x4::identity();
        inverse.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation_t);
        inverse.fixed_view_mut::<3, 1>(0, 3).copy_from(&translation);
        inverse
    }
}
