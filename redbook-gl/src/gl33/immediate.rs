use crate::gl;
use crate::gl33::{draw::opengl_mode, GL33};
use redbook::backend::immediate::Immediate;
use redbook::render::Mode;

unsafe impl Immediate for GL33 {
  unsafe fn begin(&mut self, mode: Mode) {
    gl::Begin(opengl_mode(mode));
  }

  unsafe fn vertex2(&mut self, x: f32, y: f32) {
    gl::Vertex2f(x, y);
  }

  unsafe fn end(&mut self) {
    gl::End();
  }
}
