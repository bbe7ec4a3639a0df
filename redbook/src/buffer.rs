//! GPU buffers.
//!
//! A [`Buffer`] is a GPU-owned block of bytes. It is allocated once with a given size and can
//! then be filled by sub-range writes, typically one per kind of vertex data.

use std::{error, fmt};

use bytemuck::Pod;

use crate::backend::buffer::Buffer as BufferBackend;
use crate::context::GraphicsContext;

/// What a buffer is bound to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BufferTarget {
  /// Vertex attribute data.
  Array,
  /// Vertex indices.
  ElementArray,
}

impl fmt::Display for BufferTarget {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      BufferTarget::Array => f.write_str("array buffer"),
      BufferTarget::ElementArray => f.write_str("element array buffer"),
    }
  }
}

/// Usage hint given to the driver at allocation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Usage {
  /// Written once, drawn many times.
  StaticDraw,
  /// Written often, drawn many times.
  DynamicDraw,
  /// Written once, drawn a few times.
  StreamDraw,
}

/// Buffer errors.
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq)]
pub enum BufferError {
  /// The buffer could not be created.
  CannotCreate,
  /// A write went past the end of the allocation.
  Overflow {
    /// Offset of the write, in bytes.
    offset: usize,
    /// Length of the write, in bytes.
    len: usize,
    /// Size of the buffer, in bytes.
    capacity: usize,
  },
}

impl BufferError {
  /// The buffer could not be created.
  pub fn cannot_create() -> Self {
    BufferError::CannotCreate
  }

  /// A write went past the end of the allocation.
  pub fn overflow(offset: usize, len: usize, capacity: usize) -> Self {
    BufferError::Overflow {
      offset,
      len,
      capacity,
    }
  }
}

impl fmt::Display for BufferError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      BufferError::CannotCreate => f.write_str("cannot create buffer"),
      BufferError::Overflow {
        offset,
        len,
        capacity,
      } => write!(
        f,
        "buffer overflow: writing {} bytes at offset {} in a {}-byte buffer",
        len, offset, capacity
      ),
    }
  }
}

impl error::Error for BufferError {}

/// A GPU buffer.
#[derive(Debug)]
pub struct Buffer<B>
where
  B: ?Sized + BufferBackend,
{
  pub(crate) repr: B::BufferRepr,
  target: BufferTarget,
  bytes: usize,
}

impl<B> Buffer<B>
where
  B: ?Sized + BufferBackend,
{
  /// Allocate an uninitialized buffer of `bytes` bytes.
  pub fn new<C>(
    ctx: &mut C,
    target: BufferTarget,
    bytes: usize,
    usage: Usage,
  ) -> Result<Self, BufferError>
  where
    C: GraphicsContext<Backend = B>,
  {
    let repr = unsafe { ctx.backend().new_buffer(target, bytes, usage)? };

    Ok(Buffer {
      repr,
      target,
      bytes,
    })
  }

  /// Allocate a buffer and fill it with `data`.
  pub fn from_slice<C, T>(
    ctx: &mut C,
    target: BufferTarget,
    data: &[T],
    usage: Usage,
  ) -> Result<Self, BufferError>
  where
    C: GraphicsContext<Backend = B>,
    T: Pod,
  {
    let bytes: &[u8] = bytemuck::cast_slice(data);
    let mut buffer = Self::new(ctx, target, bytes.len(), usage)?;
    buffer.write(ctx, 0, data)?;

    Ok(buffer)
  }

  /// Overwrite part of the buffer, starting at `offset` bytes.
  pub fn write<C, T>(&mut self, ctx: &mut C, offset: usize, data: &[T]) -> Result<(), BufferError>
  where
    C: GraphicsContext<Backend = B>,
    T: Pod,
  {
    let bytes: &[u8] = bytemuck::cast_slice(data);
    check_range(offset, bytes.len(), self.bytes)?;

    unsafe { ctx.backend().write_buffer(&mut self.repr, offset, bytes) }
  }

  /// Bind the buffer to its target.
  pub fn bind<C>(&self, ctx: &mut C)
  where
    C: GraphicsContext<Backend = B>,
  {
    unsafe { ctx.backend().bind_buffer(&self.repr) }
  }

  /// Release the buffer.
  pub fn destroy<C>(mut self, ctx: &mut C)
  where
    C: GraphicsContext<Backend = B>,
  {
    unsafe { ctx.backend().destroy_buffer(&mut self.repr) }
  }

  /// Target of the buffer.
  pub fn target(&self) -> BufferTarget {
    self.target
  }

  /// Size of the buffer, in bytes.
  pub fn bytes(&self) -> usize {
    self.bytes
  }

  /// Backend representation of the buffer.
  pub fn repr(&self) -> &B::BufferRepr {
    &self.repr
  }
}

/// Check that `len` bytes written at `offset` fit in a `capacity`-byte buffer.
pub fn check_range(offset: usize, len: usize, capacity: usize) -> Result<(), BufferError> {
  match offset.checked_add(len) {
    Some(end) if end <= capacity => Ok(()),
    _ => Err(BufferError::overflow(offset, len, capacity)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn range_within_capacity() {
    assert_eq!(check_range(0, 64, 128), Ok(()));
    assert_eq!(check_range(64, 64, 128), Ok(()));
    assert_eq!(check_range(128, 0, 128), Ok(()));
  }

  #[test]
  fn range_past_capacity() {
    assert_eq!(check_range(65, 64, 128), Err(BufferError::overflow(65, 64, 128)));
  }

  #[test]
  fn range_with_overflowing_end() {
    assert_eq!(
      check_range(usize::MAX, 2, 16),
      Err(BufferError::overflow(usize::MAX, 2, 16))
    );
  }

  #[test]
  fn overflow_display() {
    let e = BufferError::overflow(64, 128, 128);
    assert_eq!(
      e.to_string(),
      "buffer overflow: writing 128 bytes at offset 64 in a 128-byte buffer"
    );
  }
}
