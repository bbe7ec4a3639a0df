//! Immediate mode.
//!
//! The oldest way of sending geometry to the GPU: vertices are emitted one by one between a
//! _begin_ and an _end_ call, without any buffer. It requires a compatibility context.
//!
//! See [`GraphicsContext::immediate`] to open an emission scope.
//!
//! [`GraphicsContext::immediate`]: crate::context::GraphicsContext::immediate

use crate::backend::immediate::Immediate as ImmediateBackend;

/// Vertex emitter, alive for the duration of a single primitive.
#[derive(Debug)]
pub struct Immediate<'a, B>
where
  B: ?Sized,
{
  backend: &'a mut B,
}

impl<'a, B> Immediate<'a, B>
where
  B: ?Sized + ImmediateBackend,
{
  pub(crate) fn new(backend: &'a mut B) -> Self {
    Immediate { backend }
  }

  /// Emit a 2D vertex.
  pub fn vertex2(&mut self, x: f32, y: f32) -> &mut Self {
    unsafe { self.backend.vertex2(x, y) };
    self
  }

  /// Emit a list of 2D vertices, in order.
  pub fn vertices2(&mut self, vertices: &[[f32; 2]]) -> &mut Self {
    for &[x, y] in vertices {
      self.vertex2(x, y);
    }

    self
  }
}
