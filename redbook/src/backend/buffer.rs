//! Buffer backend interface.

use crate::buffer::{BufferError, BufferTarget, Usage};

/// Buffer allocation, upload and binding.
pub unsafe trait Buffer {
  /// Backend representation of a buffer.
  type BufferRepr;

  /// Allocate a buffer of `bytes` bytes bound to `target`, without initializing it.
  unsafe fn new_buffer(
    &mut self,
    target: BufferTarget,
    bytes: usize,
    usage: Usage,
  ) -> Result<Self::BufferRepr, BufferError>;

  /// Overwrite the `[offset, offset + data.len())` byte range of a buffer.
  ///
  /// Implementations must reject ranges going past the allocated size.
  unsafe fn write_buffer(
    &mut self,
    buffer: &mut Self::BufferRepr,
    offset: usize,
    data: &[u8],
  ) -> Result<(), BufferError>;

  /// Bind a buffer to the target it was created with.
  unsafe fn bind_buffer(&mut self, buffer: &Self::BufferRepr);

  /// Release a buffer.
  unsafe fn destroy_buffer(&mut self, buffer: &mut Self::BufferRepr);
}
