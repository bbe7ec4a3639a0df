//! Redbook demos.
//!
//! This project provides a set of small OpenGL demos, each showcasing a handful of graphics API
//! calls. The demos are platform-agnostic on purpose: they do not depend on any windowing or
//! event concept, so running them on a given platform is done once for the whole set.
//!
//! # Demo architecture
//!
//! Demos are modules exposed from this crate. Each one implements the [`Demo`] trait, which
//! mirrors the lifecycle an event loop drives:
//!
//! 1. [`Demo::initialize`] is called once, before anything else. It allocates every GPU resource
//!    the demo needs.
//! 2. [`Demo::display`] and [`Demo::resize`] are then called in response to window events.
//! 3. [`Demo::finalize`] is called once, before teardown. It consumes the demo and releases its
//!    resources.
//!
//! Whatever a demo needs from the platform (shader sources, mostly) is declared by
//! [`Demo::features`] and obtained through [`PlatformServices`].
//!
//! # Error handling
//!
//! Demos showcase the happy path. Initialization errors are reported as [`DemoError`] and are
//! meant to be fatal: the runner is expected to stop instead of rendering.

use std::{error, fmt};

use redbook::backend::{
  buffer::Buffer, draw::Draw, immediate::Immediate, shader::Shader, state::State,
  vertex_array::VertexArray,
};
use redbook::buffer::BufferError;
use redbook::context::GraphicsContext;
use redbook::shader::ProgramError;

pub mod draw_commands;
pub mod legacy_shape;

/// Every backend trait a demo might rely on.
pub trait Backend: Buffer + Draw + Immediate + Shader + State + VertexArray {}

impl<B> Backend for B where B: ?Sized + Buffer + Draw + Immediate + Shader + State + VertexArray {}

/// Demo interface.
pub trait Demo<B>: Sized
where
  B: ?Sized + Backend,
{
  /// Default window title.
  const TITLE: &'static str;

  /// Platform features required by the demo.
  fn features() -> Features;

  /// Allocate the demo resources.
  fn initialize(
    title: &str,
    platform: &mut impl PlatformServices,
    context: &mut impl GraphicsContext<Backend = B>,
  ) -> Result<Self, DemoError>;

  /// Render a frame.
  fn display(&mut self, auto_redraw: bool, context: &mut impl GraphicsContext<Backend = B>);

  /// React to a framebuffer size change.
  fn resize(&mut self, width: u32, height: u32, context: &mut impl GraphicsContext<Backend = B>);

  /// Release the demo resources.
  fn finalize(self, context: &mut impl GraphicsContext<Backend = B>);
}

/// Features a demo requires from the platform.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Features {
  shaders: Vec<String>,
  legacy: bool,
}

impl Features {
  /// Require a shader source, by path relative to the platform shader root.
  pub fn with_shader(mut self, path: impl Into<String>) -> Self {
    self.shaders.push(path.into());
    self
  }

  /// Require a context with deprecated functionality (immediate mode).
  pub fn with_legacy_context(self) -> Self {
    Features {
      legacy: true,
      ..self
    }
  }

  /// Required shader sources.
  pub fn shaders(&self) -> &[String] {
    &self.shaders
  }

  /// Whether a context with deprecated functionality is required.
  pub fn requires_legacy_context(&self) -> bool {
    self.legacy
  }
}

/// Services offered by the platform running the demos.
pub trait PlatformServices {
  /// Error that might occur while fetching a resource.
  type FetchError: error::Error;

  /// Fetch a shader source previously declared in [`Features`].
  fn fetch_shader(&mut self, path: &str) -> Result<&str, Self::FetchError>;
}

/// Errors that can happen while initializing a demo.
#[non_exhaustive]
#[derive(Debug)]
pub enum DemoError {
  /// A shader source could not be fetched.
  ShaderFetch {
    /// Path of the shader source.
    path: String,
    /// Reason of the failure.
    reason: String,
  },
  /// The shader program could not be built.
  Program(ProgramError),
  /// A buffer could not be created or filled.
  Buffer(BufferError),
}

impl DemoError {
  /// A shader source could not be fetched.
  pub fn shader_fetch(path: impl Into<String>, reason: impl fmt::Display) -> Self {
    DemoError::ShaderFetch {
      path: path.into(),
      reason: reason.to_string(),
    }
  }
}

impl fmt::Display for DemoError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      DemoError::ShaderFetch {
        ref path,
        ref reason,
      } => write!(f, "cannot fetch shader {}: {}", path, reason),
      DemoError::Program(ref e) => write!(f, "cannot build shader program: {}", e),
      DemoError::Buffer(ref e) => write!(f, "cannot set up buffer: {}", e),
    }
  }
}

impl error::Error for DemoError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      DemoError::ShaderFetch { .. } => None,
      DemoError::Program(e) => Some(e),
      DemoError::Buffer(e) => Some(e),
    }
  }
}

impl From<ProgramError> for DemoError {
  fn from(e: ProgramError) -> Self {
    DemoError::Program(e)
  }
}

impl From<BufferError> for DemoError {
  fn from(e: BufferError) -> Self {
    DemoError::Buffer(e)
  }
}
