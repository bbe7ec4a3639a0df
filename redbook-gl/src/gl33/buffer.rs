//! OpenGL buffer implementation.

use std::{os::raw::c_void, ptr};

use crate::gl;
use crate::gl::types::*;
use crate::gl33::{state::Bind, GL33};
use redbook::backend::buffer::Buffer as BufferBackend;
use redbook::buffer::{check_range, BufferError, BufferTarget, Usage};

/// OpenGL buffer.
#[derive(Debug)]
pub struct Buffer {
  handle: GLuint,
  target: BufferTarget,
  bytes: usize,
}

impl Buffer {
  /// OpenGL handle.
  pub fn handle(&self) -> GLuint {
    self.handle
  }
}

impl GL33 {
  unsafe fn bind_target(&mut self, target: BufferTarget, handle: GLuint, bind: Bind) {
    match target {
      BufferTarget::Array => self.state.bind_array_buffer(handle, bind),
      BufferTarget::ElementArray => self.state.bind_element_array_buffer(handle, bind),
    }
  }
}

unsafe impl BufferBackend for GL33 {
  type BufferRepr = Buffer;

  unsafe fn new_buffer(
    &mut self,
    target: BufferTarget,
    bytes: usize,
    usage: Usage,
  ) -> Result<Self::BufferRepr, BufferError> {
    let mut handle: GLuint = 0;

    gl::GenBuffers(1, &mut handle);

    if handle == 0 {
      return Err(BufferError::cannot_create());
    }

    self.bind_target(target, handle, Bind::Forced);
    gl::BufferData(
      target_to_glenum(target),
      bytes as GLsizeiptr,
      ptr::null(),
      usage_to_glenum(usage),
    );

    log::trace!("created {} {} ({} bytes)", target, handle, bytes);

    Ok(Buffer {
      handle,
      target,
      bytes,
    })
  }

  unsafe fn write_buffer(
    &mut self,
    buffer: &mut Self::BufferRepr,
    offset: usize,
    data: &[u8],
  ) -> Result<(), BufferError> {
    check_range(offset, data.len(), buffer.bytes)?;

    self.bind_target(buffer.target, buffer.handle, Bind::Cached);
    gl::BufferSubData(
      target_to_glenum(buffer.target),
      offset as GLintptr,
      data.len() as GLsizeiptr,
      data.as_ptr() as *const c_void,
    );

    Ok(())
  }

  unsafe fn bind_buffer(&mut self, buffer: &Self::BufferRepr) {
    self.bind_target(buffer.target, buffer.handle, Bind::Cached);
  }

  unsafe fn destroy_buffer(&mut self, buffer: &mut Self::BufferRepr) {
    self.state.unbind_buffer(buffer.handle);
    gl::DeleteBuffers(1, &buffer.handle);
  }
}

fn target_to_glenum(target: BufferTarget) -> GLenum {
  match target {
    BufferTarget::Array => gl::ARRAY_BUFFER,
    BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
  }
}

fn usage_to_glenum(usage: Usage) -> GLenum {
  match usage {
    Usage::StaticDraw => gl::STATIC_DRAW,
    Usage::DynamicDraw => gl::DYNAMIC_DRAW,
    Usage::StreamDraw => gl::STREAM_DRAW,
  }
}
