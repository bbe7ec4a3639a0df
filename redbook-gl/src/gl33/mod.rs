//! OpenGL 3.3 backend.
//!
//! This module implements an OpenGL 3.3 backend for redbook. The backend type is [`GL33`].

mod buffer;
mod draw;
mod immediate;
mod pipeline;
mod shader;
mod state;
mod vertex_array;

pub use self::buffer::Buffer;
pub use self::shader::{Program, Stage};
pub use self::state::StateQueryError;
use self::state::GLState;
pub use self::vertex_array::VertexArray;

/// An OpenGL 3.3 backend.
///
/// This type is to be used as a redbook backend type. It implements the whole backend API.
#[derive(Debug)]
pub struct GL33 {
  pub(crate) state: GLState,
}

impl GL33 {
  /// Create a new OpenGL 3.3 backend.
  ///
  /// The OpenGL function pointers must already be loaded and a context must be current on the
  /// calling thread.
  pub fn new() -> Result<Self, StateQueryError> {
    GLState::new().map(|state| GL33 { state })
  }
}
