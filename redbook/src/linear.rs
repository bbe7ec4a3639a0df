//! Linear algebra helpers.
//!
//! Matrices are handed to the GPU as column-major `[[f32; 4]; 4]` arrays: `m[c][r]` is the
//! element at column `c`, row `r`. They are built with [cgmath](https://crates.io/crates/cgmath).

use cgmath::{Matrix4, Vector3};

/// 4×4 column-major matrix.
pub type M44 = [[f32; 4]; 4];

/// Perspective projection matrix for the given frustum planes, as `glFrustum` would build it.
///
/// Degenerate planes are not rejected: they yield infinite or NaN elements.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> M44 {
  let width = right - left;
  let height = top - bottom;
  let depth = far - near;

  #[rustfmt::skip]
  let m = Matrix4::new(
    2. * near / width, 0., 0., 0.,
    0., 2. * near / height, 0., 0.,
    (right + left) / width, (top + bottom) / height, -(far + near) / depth, -1.,
    0., 0., -2. * far * near / depth, 0.,
  );

  m.into()
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> M44 {
  Matrix4::from_translation(Vector3::new(x, y, z)).into()
}

/// Identity matrix.
pub fn identity() -> M44 {
  [
    [1., 0., 0., 0.],
    [0., 1., 0., 0.],
    [0., 0., 1., 0.],
    [0., 0., 0., 1.],
  ]
}
