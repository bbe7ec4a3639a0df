use std::os::raw::c_void;

use crate::gl;
use crate::gl::types::*;
use crate::gl33::GL33;
use redbook::backend::draw::Draw;
use redbook::render::{DrawCommand, IndexType, Mode};

unsafe impl Draw for GL33 {
  unsafe fn draw(&mut self, mode: Mode, command: DrawCommand) {
    let mode = opengl_mode(mode);

    match command {
      DrawCommand::Arrays { first, count } => {
        gl::DrawArrays(mode, first as GLint, count as GLsizei);
      }

      DrawCommand::Elements {
        count,
        index_type,
        offset,
      } => {
        gl::DrawElements(
          mode,
          count as GLsizei,
          index_type_to_glenum(index_type),
          offset as *const c_void,
        );
      }

      DrawCommand::ElementsBaseVertex {
        count,
        index_type,
        offset,
        base_vertex,
      } => {
        gl::DrawElementsBaseVertex(
          mode,
          count as GLsizei,
          index_type_to_glenum(index_type),
          offset as *const c_void,
          base_vertex,
        );
      }

      DrawCommand::ArraysInstanced {
        first,
        count,
        instances,
      } => {
        gl::DrawArraysInstanced(mode, first as GLint, count as GLsizei, instances as GLsizei);
      }
    }
  }
}

pub(crate) fn opengl_mode(mode: Mode) -> GLenum {
  match mode {
    Mode::Point => gl::POINTS,
    Mode::Line => gl::LINES,
    Mode::LineStrip => gl::LINE_STRIP,
    Mode::Triangle => gl::TRIANGLES,
    Mode::TriangleStrip => gl::TRIANGLE_STRIP,
    Mode::TriangleFan => gl::TRIANGLE_FAN,
    Mode::Polygon => gl::POLYGON,
  }
}

fn index_type_to_glenum(ty: IndexType) -> GLenum {
  match ty {
    IndexType::U8 => gl::UNSIGNED_BYTE,
    IndexType::U16 => gl::UNSIGNED_SHORT,
    IndexType::U32 => gl::UNSIGNED_INT,
  }
}
