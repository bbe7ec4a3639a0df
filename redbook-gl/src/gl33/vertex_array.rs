//! OpenGL vertex array objects.

use std::os::raw::c_void;

use crate::gl;
use crate::gl::types::*;
use crate::gl33::{state::Bind, GL33};
use redbook::backend::vertex_array::VertexArray as VertexArrayBackend;
use redbook::vertex::{VertexAttribFormat, VertexAttribType};

/// OpenGL vertex array object.
#[derive(Debug)]
pub struct VertexArray {
  handle: GLuint,
}

impl VertexArray {
  /// OpenGL handle.
  pub fn handle(&self) -> GLuint {
    self.handle
  }
}

unsafe impl VertexArrayBackend for GL33 {
  type VertexArrayRepr = VertexArray;

  unsafe fn new_vertex_array(&mut self) -> Self::VertexArrayRepr {
    let mut handle: GLuint = 0;

    gl::GenVertexArrays(1, &mut handle);
    self.state.bind_vertex_array(handle, Bind::Forced);

    VertexArray { handle }
  }

  unsafe fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArrayRepr>) {
    self
      .state
      .bind_vertex_array(vertex_array.map_or(0, |vao| vao.handle), Bind::Cached);
  }

  unsafe fn set_vertex_attrib(
    &mut self,
    vertex_array: &Self::VertexArrayRepr,
    format: &VertexAttribFormat,
  ) {
    self.state.bind_vertex_array(vertex_array.handle, Bind::Cached);

    let ty = attrib_type_to_glenum(format.ty);
    let offset = format.offset as *const c_void;

    // integral attributes must not go through float conversion
    if format.ty.is_integral() {
      gl::VertexAttribIPointer(
        format.index,
        format.dim as GLint,
        ty,
        format.stride as GLsizei,
        offset,
      );
    } else {
      let normalized = if format.normalized {
        gl::TRUE
      } else {
        gl::FALSE
      };

      gl::VertexAttribPointer(
        format.index,
        format.dim as GLint,
        ty,
        normalized,
        format.stride as GLsizei,
        offset,
      );
    }
    gl::EnableVertexAttribArray(format.index);
  }

  unsafe fn destroy_vertex_array(&mut self, vertex_array: &mut Self::VertexArrayRepr) {
    self.state.unbind_vertex_array(vertex_array.handle);
    gl::DeleteVertexArrays(1, &vertex_array.handle);
  }
}

fn attrib_type_to_glenum(ty: VertexAttribType) -> GLenum {
  match ty {
    VertexAttribType::Float => gl::FLOAT,
    VertexAttribType::Int => gl::INT,
    VertexAttribType::UInt => gl::UNSIGNED_INT,
    VertexAttribType::UByte => gl::UNSIGNED_BYTE,
  }
}
