//! Shader backend interface.

use crate::linear::M44;
use crate::shader::{ProgramError, StageError, StageType};

/// Shader stages, programs and uniforms.
pub unsafe trait Shader {
  /// Backend representation of a shader stage.
  type StageRepr;

  /// Backend representation of a linked shader program.
  type ProgramRepr;

  /// Compile a shader stage from its source.
  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError>;

  /// Release a shader stage.
  unsafe fn destroy_stage(&mut self, stage: &mut Self::StageRepr);

  /// Link a vertex and a fragment stage into a program.
  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError>;

  /// Resolve the location of a uniform; `-1` if the program has no such active uniform.
  unsafe fn uniform_location(&mut self, program: &Self::ProgramRepr, name: &str) -> i32;

  /// Make a program current, or none.
  unsafe fn use_program(&mut self, program: Option<&Self::ProgramRepr>);

  /// Upload a 4×4 column-major matrix to the uniform at `location` of the current program.
  ///
  /// A `-1` location is silently ignored.
  unsafe fn set_uniform_m44(&mut self, location: i32, value: &M44);

  /// Release a program.
  unsafe fn destroy_program(&mut self, program: &mut Self::ProgramRepr);
}
