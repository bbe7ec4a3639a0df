//! Graphics state.

use std::cell::RefCell;
use std::error;
use std::fmt;
use std::marker::PhantomData;

use crate::gl;
use crate::gl::types::*;

// TLS synchronization barrier for `GLState`.
thread_local!(static TLS_ACQUIRE_GFX_STATE: RefCell<Option<()>> = RefCell::new(Some(())));

/// Cached value.
///
/// A cached value is used to prevent issuing costy GPU commands if we know the target value is
/// already set to what the command tries to set. For instance, if you ask to enable face culling
/// once, that value will be set on the GPU and cached on our side. Later, if no other culling
/// setting has occurred, if you ask to enable it again, because the value is cached, we know the
/// GPU is already using it, so we don’t have to perform anything GPU-wise.
#[derive(Debug)]
pub(crate) struct Cached<T>(Option<T>)
where
  T: PartialEq;

impl<T> Cached<T>
where
  T: PartialEq,
{
  /// Cache a value.
  pub(crate) fn new(initial: T) -> Self {
    Cached(Some(initial))
  }

  pub(crate) fn set(&mut self, value: T) {
    self.0 = Some(value);
  }

  /// Check if the cached value is invalid regarding a value.
  ///
  /// A non-cached value (i.e. empty) is always invalid whatever compared value. If a value is
  /// already cached, then it’s invalid if it’s not equal ([`PartialEq`]) to the input value.
  pub(crate) fn is_invalid(&self, new_val: &T) -> bool {
    match &self.0 {
      Some(ref t) => t != new_val,
      _ => true,
    }
  }
}

/// The graphics state.
///
/// This type represents the current state of a given graphics context. It acts
/// as a forward-gate to all the exposed features from the low-level API but
/// adds a small cache layer over it to prevent from issuing the same API call (with
/// the same parameters).
#[derive(Debug)]
pub struct GLState {
  _a: PhantomData<*const ()>, // !Send and !Sync

  // viewport
  viewport: Cached<[GLint; 4]>,

  // depth test
  depth_test: Cached<bool>,

  // face culling
  face_culling: Cached<bool>,

  // array buffer
  bound_array_buffer: GLuint,

  // element buffer
  bound_element_array_buffer: GLuint,

  // vertex array
  bound_vertex_array: GLuint,

  // shader program
  current_program: GLuint,
}

impl GLState {
  /// Create a new `GLState`.
  ///
  /// > Note: keep in mind you can create only one per thread.
  pub(crate) fn new() -> Result<Self, StateQueryError> {
    TLS_ACQUIRE_GFX_STATE.with(|rc| {
      let mut inner = rc.borrow_mut();

      match *inner {
        Some(_) => {
          inner.take();
          Self::get_from_context()
        }

        None => Err(StateQueryError::UnavailableGLState),
      }
    })
  }

  /// Get a `GLState` from the current OpenGL context.
  fn get_from_context() -> Result<Self, StateQueryError> {
    unsafe {
      let viewport = Cached::new(get_ctx_viewport()?);
      let depth_test = Cached::new(get_ctx_depth_test()?);
      let face_culling = Cached::new(get_ctx_face_culling()?);
      let bound_array_buffer = get_ctx_binding(gl::ARRAY_BUFFER_BINDING)?;
      let bound_element_array_buffer = get_ctx_binding(gl::ELEMENT_ARRAY_BUFFER_BINDING)?;
      let bound_vertex_array = get_ctx_binding(gl::VERTEX_ARRAY_BINDING)?;
      let current_program = get_ctx_binding(gl::CURRENT_PROGRAM)?;

      log::debug!(
        "acquired graphics state: viewport = {:?}, vertex array = {}, program = {}",
        viewport.0,
        bound_vertex_array,
        current_program
      );

      Ok(GLState {
        _a: PhantomData,
        viewport,
        depth_test,
        face_culling,
        bound_array_buffer,
        bound_element_array_buffer,
        bound_vertex_array,
        current_program,
      })
    }
  }

  /// Currently in-use shader program; `0` if none.
  pub fn current_program(&self) -> GLuint {
    self.current_program
  }

  pub(crate) unsafe fn set_viewport(&mut self, viewport: [GLint; 4]) {
    if self.viewport.is_invalid(&viewport) {
      gl::Viewport(viewport[0], viewport[1], viewport[2], viewport[3]);
      self.viewport.set(viewport);
    }
  }

  pub(crate) unsafe fn set_depth_test(&mut self, enabled: bool) {
    if self.depth_test.is_invalid(&enabled) {
      set_capability(gl::DEPTH_TEST, enabled);
      self.depth_test.set(enabled);
    }
  }

  pub(crate) unsafe fn set_face_culling(&mut self, enabled: bool) {
    if self.face_culling.is_invalid(&enabled) {
      set_capability(gl::CULL_FACE, enabled);
      self.face_culling.set(enabled);
    }
  }

  pub(crate) unsafe fn bind_array_buffer(&mut self, handle: GLuint, bind: Bind) {
    if bind == Bind::Forced || self.bound_array_buffer != handle {
      gl::BindBuffer(gl::ARRAY_BUFFER, handle);
      self.bound_array_buffer = handle;
    }
  }

  pub(crate) unsafe fn bind_element_array_buffer(&mut self, handle: GLuint, bind: Bind) {
    if bind == Bind::Forced || self.bound_element_array_buffer != handle {
      gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, handle);
      self.bound_element_array_buffer = handle;
    }
  }

  pub(crate) unsafe fn unbind_buffer(&mut self, handle: GLuint) {
    if self.bound_array_buffer == handle {
      self.bind_array_buffer(0, Bind::Cached);
    } else if self.bound_element_array_buffer == handle {
      self.bind_element_array_buffer(0, Bind::Cached);
    }
  }

  pub(crate) unsafe fn bind_vertex_array(&mut self, handle: GLuint, bind: Bind) {
    if bind == Bind::Forced || self.bound_vertex_array != handle {
      gl::BindVertexArray(handle);
      self.bound_vertex_array = handle;

      // the element array binding is part of the vertex array state
      self.bound_element_array_buffer =
        binding_or_unbound(get_ctx_binding(gl::ELEMENT_ARRAY_BUFFER_BINDING), handle);
    }
  }

  pub(crate) unsafe fn unbind_vertex_array(&mut self, handle: GLuint) {
    if self.bound_vertex_array == handle {
      self.bind_vertex_array(0, Bind::Cached)
    }
  }

  pub(crate) unsafe fn use_program(&mut self, handle: GLuint) {
    if self.current_program != handle {
      gl::UseProgram(handle);
      self.current_program = handle;
    }
  }
}

/// Should the binding be cached or forced to the provided value?
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Bind {
  Forced,
  Cached,
}

/// An error that might happen when the context is queried.
#[non_exhaustive]
#[derive(Debug)]
pub enum StateQueryError {
  /// The [`GLState`] object is unavailable.
  ///
  /// That might occur if the current thread doesn’t support allocating a new graphics state. It
  /// might happen if you try to have more than one state on the same thread, for instance.
  UnavailableGLState,
  /// Corrupted depth test state.
  UnknownDepthTestState(GLboolean),
  /// Corrupted face culling state.
  UnknownFaceCullingState(GLboolean),
  /// A binding query returned a negative handle.
  InvalidBinding(GLenum, GLint),
}

impl fmt::Display for StateQueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StateQueryError::UnavailableGLState => write!(f, "unavailable graphics state"),
      StateQueryError::UnknownDepthTestState(ref s) => write!(f, "unknown depth test state: {}", s),
      StateQueryError::UnknownFaceCullingState(ref s) => {
        write!(f, "unknown face culling state: {}", s)
      }
      StateQueryError::InvalidBinding(ref what, ref handle) => {
        write!(f, "invalid binding for 0x{:x}: {}", what, handle)
      }
    }
  }
}

impl error::Error for StateQueryError {}

#[inline]
unsafe fn set_capability(capability: GLenum, enabled: bool) {
  if enabled {
    gl::Enable(capability);
  } else {
    gl::Disable(capability);
  }
}

unsafe fn get_ctx_viewport() -> Result<[GLint; 4], StateQueryError> {
  let mut data = [0; 4];
  gl::GetIntegerv(gl::VIEWPORT, data.as_mut_ptr());
  Ok(data)
}

unsafe fn get_ctx_depth_test() -> Result<bool, StateQueryError> {
  let state = gl::IsEnabled(gl::DEPTH_TEST);

  match state {
    gl::TRUE => Ok(true),
    gl::FALSE => Ok(false),
    _ => Err(StateQueryError::UnknownDepthTestState(state)),
  }
}

unsafe fn get_ctx_face_culling() -> Result<bool, StateQueryError> {
  let state = gl::IsEnabled(gl::CULL_FACE);

  match state {
    gl::TRUE => Ok(true),
    gl::FALSE => Ok(false),
    _ => Err(StateQueryError::UnknownFaceCullingState(state)),
  }
}

// element array binding of a freshly bound vertex array
fn binding_or_unbound(binding: Result<GLuint, StateQueryError>, vertex_array: GLuint) -> GLuint {
  binding.unwrap_or_else(|e| {
    log::warn!(
      "cannot query element array binding of vertex array {}: {}",
      vertex_array,
      e
    );
    0
  })
}

unsafe fn get_ctx_binding(what: GLenum) -> Result<GLuint, StateQueryError> {
  let mut handle = 0;
  gl::GetIntegerv(what, &mut handle);

  if handle < 0 {
    Err(StateQueryError::InvalidBinding(what, handle))
  } else {
    Ok(handle as GLuint)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_cache_is_valid_for_initial_value() {
    let cached = Cached::new(true);

    assert!(!cached.is_invalid(&true));
    assert!(cached.is_invalid(&false));
  }

  #[test]
  fn set_updates_cache() {
    let mut cached = Cached::new([0, 0, 800, 600]);
    cached.set([0, 0, 1024, 768]);

    assert!(cached.is_invalid(&[0, 0, 800, 600]));
    assert!(!cached.is_invalid(&[0, 0, 1024, 768]));
  }

  #[test]
  fn failed_binding_query_reads_as_unbound() {
    let e = StateQueryError::InvalidBinding(gl::ELEMENT_ARRAY_BUFFER_BINDING, -1);

    assert_eq!(binding_or_unbound(Ok(3), 1), 3);
    assert_eq!(binding_or_unbound(Err(e), 1), 0);
  }
}
