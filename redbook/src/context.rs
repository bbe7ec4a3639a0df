//! Graphics context.
//!
//! A graphics context is an object that abstracts all the low-level operations that happen on a
//! graphics device (it can be a GPU or a software implementation, for instance).
//!
//! This crate doesn’t provide you with creating such contexts. Instead, you must do it yourself
//! or rely on crates doing it for you (`redbook-glfw`, for instance).
//!
//! # On context and threads
//!
//! - An object which type implements [`GraphicsContext`] must be `!Send` and `!Sync`. This
//!   enforces that it cannot be moved nor shared between threads.
//! - You can only create a single context per thread.

use crate::backend::immediate::Immediate as ImmediateBackend;
use crate::backend::state::State as StateBackend;
use crate::immediate::Immediate;
use crate::render::Mode;
use crate::state::{Capability, Viewport};

/// Class of graphics context.
///
/// Such a context must not be Send nor Sync, which means that you cannot share it between
/// threads in any way (move / borrow).
pub unsafe trait GraphicsContext: Sized {
  /// Internal type used by the backend to cache, optimize and store data. This roughly represents
  /// the GPU data / context a backend implementation needs to work correctly.
  type Backend: ?Sized;

  /// Access the underlying backend.
  fn backend(&mut self) -> &mut Self::Backend;

  /// Enable a capability.
  fn enable(&mut self, capability: Capability)
  where
    Self::Backend: StateBackend,
  {
    unsafe { self.backend().set_capability(capability, true) }
  }

  /// Disable a capability.
  fn disable(&mut self, capability: Capability)
  where
    Self::Backend: StateBackend,
  {
    unsafe { self.backend().set_capability(capability, false) }
  }

  /// Set the viewport.
  fn set_viewport(&mut self, viewport: Viewport)
  where
    Self::Backend: StateBackend,
  {
    unsafe { self.backend().set_viewport(viewport) }
  }

  /// Clear the color buffer with the current clear color.
  fn clear_color(&mut self)
  where
    Self::Backend: StateBackend,
  {
    unsafe { self.backend().clear_color_buffer() }
  }

  /// Clear the color buffer attached at `draw_buffer` to `color`.
  fn clear_color_to(&mut self, draw_buffer: u32, color: [f32; 4])
  where
    Self::Backend: StateBackend,
  {
    unsafe { self.backend().clear_color_buffer_to(draw_buffer, color) }
  }

  /// Flush the command stream.
  fn flush(&mut self)
  where
    Self::Backend: StateBackend,
  {
    unsafe { self.backend().flush() }
  }

  /// Emit a primitive in immediate mode.
  ///
  /// The closure receives an [`Immediate`] emitter; the primitive is closed when the closure
  /// returns.
  fn immediate<F>(&mut self, mode: Mode, f: F)
  where
    Self::Backend: ImmediateBackend,
    F: FnOnce(&mut Immediate<'_, Self::Backend>),
  {
    let backend = self.backend();

    unsafe { backend.begin(mode) };
    f(&mut Immediate::new(&mut *backend));
    unsafe { backend.end() };
  }
}
