//! Immediate mode backend interface.
//!
//! Only available on compatibility contexts.

use crate::render::Mode;

/// Legacy `begin` / `vertex` / `end` primitive emission.
pub unsafe trait Immediate {
  /// Start emitting a primitive.
  unsafe fn begin(&mut self, mode: Mode);

  /// Emit a 2D vertex (`z = 0`, `w = 1`).
  unsafe fn vertex2(&mut self, x: f32, y: f32);

  /// Stop emitting the current primitive.
  unsafe fn end(&mut self);
}
