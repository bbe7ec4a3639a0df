//! Shader stages, programs and uniforms.
//!
//! A [`Program`] is built from a vertex and a fragment stage source. Once linked, the stages are
//! released; only the program lives on. Uniforms are looked up by name and yield a [`Uniform`],
//! which might be inactive: setting an inactive uniform is a no-op on the GPU side.

use std::{error, fmt};

use crate::backend::shader::Shader;
use crate::context::GraphicsContext;
use crate::linear::M44;

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  VertexShader,
  /// Fragment shader.
  FragmentShader,
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::VertexShader => f.write_str("vertex shader"),
      StageType::FragmentShader => f.write_str("fragment shader"),
    }
  }
}

/// Errors that shader stages can emit.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageError {
  /// Occurs when a shader fails to compile.
  CompilationFailed(StageType, String),
}

impl StageError {
  /// Occurs when a shader fails to compile.
  pub fn compilation_failed(ty: StageType, reason: impl Into<String>) -> Self {
    StageError::CompilationFailed(ty, reason.into())
  }
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CompilationFailed(ref ty, ref r) => write!(f, "{} compilation error: {}", ty, r),
    }
  }
}

impl error::Error for StageError {}

/// Errors that a [`Program`] can generate.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProgramError {
  /// A shader stage failed to compile or validate its state.
  StageError(StageError),
  /// Program link failed. You can inspect the reason by looking at the contained `String`.
  LinkFailed(String),
}

impl ProgramError {
  /// Program link failed.
  pub fn link_failed(reason: impl Into<String>) -> Self {
    ProgramError::LinkFailed(reason.into())
  }
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::StageError(ref e) => write!(f, "shader program has stage error: {}", e),
      ProgramError::LinkFailed(ref s) => write!(f, "shader program failed to link: {}", s),
    }
  }
}

impl error::Error for ProgramError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ProgramError::StageError(e) => Some(e),
      ProgramError::LinkFailed(_) => None,
    }
  }
}

impl From<StageError> for ProgramError {
  fn from(e: StageError) -> Self {
    ProgramError::StageError(e)
  }
}

/// A uniform location.
///
/// Obtained from [`Program::uniform`]. A location of `-1` means the program has no active
/// uniform with the requested name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Uniform {
  location: i32,
}

impl Uniform {
  /// Wrap a raw location.
  pub fn new(location: i32) -> Self {
    Uniform { location }
  }

  /// Raw location.
  pub fn location(&self) -> i32 {
    self.location
  }

  /// Whether the uniform was found in the program.
  pub fn is_active(&self) -> bool {
    self.location >= 0
  }
}

/// A linked shader program.
#[derive(Debug)]
pub struct Program<B>
where
  B: ?Sized + Shader,
{
  repr: B::ProgramRepr,
}

impl<B> Program<B>
where
  B: ?Sized + Shader,
{
  /// Compile a vertex and a fragment stage and link them into a program.
  pub fn from_strings<C>(ctx: &mut C, vertex: &str, fragment: &str) -> Result<Self, ProgramError>
  where
    C: GraphicsContext<Backend = B>,
  {
    let backend = ctx.backend();

    unsafe {
      let mut vs = backend.new_stage(StageType::VertexShader, vertex)?;

      let mut fs = match backend.new_stage(StageType::FragmentShader, fragment) {
        Ok(fs) => fs,
        Err(e) => {
          backend.destroy_stage(&mut vs);
          return Err(e.into());
        }
      };

      let program = backend.new_program(&vs, &fs);

      backend.destroy_stage(&mut vs);
      backend.destroy_stage(&mut fs);

      program.map(|repr| Program { repr })
    }
  }

  /// Look up a uniform by name.
  pub fn uniform<C>(&self, ctx: &mut C, name: &str) -> Uniform
  where
    C: GraphicsContext<Backend = B>,
  {
    let location = unsafe { ctx.backend().uniform_location(&self.repr, name) };
    Uniform::new(location)
  }

  /// Make this program the current one.
  pub fn activate<C>(&self, ctx: &mut C)
  where
    C: GraphicsContext<Backend = B>,
  {
    unsafe { ctx.backend().use_program(Some(&self.repr)) }
  }

  /// Make no program current.
  pub fn deactivate<C>(ctx: &mut C)
  where
    C: GraphicsContext<Backend = B>,
  {
    unsafe { ctx.backend().use_program(None) }
  }

  /// Upload a matrix to a uniform of the current program.
  pub fn set_m44<C>(&self, ctx: &mut C, uniform: Uniform, value: &M44)
  where
    C: GraphicsContext<Backend = B>,
  {
    unsafe { ctx.backend().set_uniform_m44(uniform.location, value) }
  }

  /// Release the program.
  pub fn destroy<C>(mut self, ctx: &mut C)
  where
    C: GraphicsContext<Backend = B>,
  {
    unsafe { ctx.backend().destroy_program(&mut self.repr) }
  }

  /// Backend representation of the program.
  pub fn repr(&self) -> &B::ProgramRepr {
    &self.repr
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inactive_uniform() {
    assert!(!Uniform::new(-1).is_active());
    assert!(Uniform::new(0).is_active());
  }

  #[test]
  fn stage_error_display() {
    let e = ProgramError::from(StageError::compilation_failed(
      StageType::FragmentShader,
      "syntax error",
    ));

    assert_eq!(
      e.to_string(),
      "shader program has stage error: fragment shader compilation error: syntax error"
    );
  }
}
