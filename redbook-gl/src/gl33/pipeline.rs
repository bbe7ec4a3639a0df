use crate::gl;
use crate::gl33::GL33;
use redbook::backend::state::State;
use redbook::state::{Capability, Viewport};

unsafe impl State for GL33 {
  unsafe fn set_capability(&mut self, capability: Capability, enabled: bool) {
    match capability {
      Capability::FaceCulling => self.state.set_face_culling(enabled),
      Capability::DepthTest => self.state.set_depth_test(enabled),
    }
  }

  unsafe fn set_viewport(&mut self, viewport: Viewport) {
    self.state.set_viewport([
      viewport.x,
      viewport.y,
      viewport.width as _,
      viewport.height as _,
    ]);
  }

  unsafe fn clear_color_buffer(&mut self) {
    gl::Clear(gl::COLOR_BUFFER_BIT);
  }

  unsafe fn clear_color_buffer_to(&mut self, draw_buffer: u32, color: [f32; 4]) {
    gl::ClearBufferfv(gl::COLOR, draw_buffer as _, color.as_ptr());
  }

  unsafe fn flush(&mut self) {
    gl::Flush();
  }
}
