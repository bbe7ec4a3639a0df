//! OpenGL backends.
//!
//! This crate exports [OpenGL](https://www.khronos.org/opengl/) backends for
//! [redbook](../redbook/index.html). The only backend for now is [`GL33`], targeting OpenGL 3.3
//! with a compatibility profile so that immediate mode is available alongside the 3.x draw
//! commands.
//!
//! The raw bindings are generated at build time and exposed in the [`gl`] module. Before using
//! any backend, function pointers must be loaded with [`gl::load_with`], which is usually done by
//! the surface crate creating the OpenGL context.

pub mod gl33;

pub use gl33::GL33;

/// Raw OpenGL bindings.
#[allow(
  clippy::all,
  missing_docs,
  non_camel_case_types,
  non_snake_case,
  non_upper_case_globals,
  unused
)]
pub mod gl {
  include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}
