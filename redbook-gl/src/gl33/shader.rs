use std::{
  ffi::CString,
  ptr::{null, null_mut},
};

use crate::gl;
use crate::gl::types::*;
use crate::gl33::GL33;
use redbook::backend::shader::Shader;
use redbook::linear::M44;
use redbook::shader::{ProgramError, StageError, StageType};

/// OpenGL shader stage.
#[derive(Debug)]
pub struct Stage {
  handle: GLuint,
}

/// OpenGL shader program.
#[derive(Debug)]
pub struct Program {
  handle: GLuint,
}

impl Program {
  /// OpenGL handle.
  pub fn handle(&self) -> GLuint {
    self.handle
  }

  fn link(&self) -> Result<(), ProgramError> {
    let handle = self.handle;

    unsafe {
      gl::LinkProgram(handle);

      let mut linked: GLint = gl::FALSE.into();
      gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

      if linked == gl::TRUE.into() {
        Ok(())
      } else {
        let mut log_len: GLint = 0;
        gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

        let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
        gl::GetProgramInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

        Err(ProgramError::link_failed(info_log_to_string(log)))
      }
    }
  }
}

unsafe impl Shader for GL33 {
  type StageRepr = Stage;

  type ProgramRepr = Program;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    let handle = gl::CreateShader(opengl_shader_type(ty));

    if handle == 0 {
      return Err(StageError::compilation_failed(
        ty,
        "unable to create shader stage",
      ));
    }

    let c_src = CString::new(src.as_bytes())
      .map_err(|_| StageError::compilation_failed(ty, "source contains a NUL byte"))?;
    gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), null());
    gl::CompileShader(handle);

    let mut compiled: GLint = gl::FALSE.into();
    gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

    if compiled == gl::TRUE.into() {
      Ok(Stage { handle })
    } else {
      let mut log_len: GLint = 0;
      gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

      let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
      gl::GetShaderInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

      gl::DeleteShader(handle);

      Err(StageError::compilation_failed(ty, info_log_to_string(log)))
    }
  }

  unsafe fn destroy_stage(&mut self, stage: &mut Self::StageRepr) {
    gl::DeleteShader(stage.handle);
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    let handle = gl::CreateProgram();

    gl::AttachShader(handle, vertex.handle);
    gl::AttachShader(handle, fragment.handle);

    let program = Program { handle };

    match program.link() {
      Ok(()) => {
        gl::DetachShader(handle, vertex.handle);
        gl::DetachShader(handle, fragment.handle);
        Ok(program)
      }

      Err(e) => {
        gl::DeleteProgram(handle);
        Err(e)
      }
    }
  }

  unsafe fn uniform_location(&mut self, program: &Self::ProgramRepr, name: &str) -> i32 {
    // a name with an interior NUL cannot name an active uniform
    match CString::new(name.as_bytes()) {
      Ok(c_name) => gl::GetUniformLocation(program.handle, c_name.as_ptr() as *const GLchar),
      Err(_) => -1,
    }
  }

  unsafe fn use_program(&mut self, program: Option<&Self::ProgramRepr>) {
    self.state.use_program(program.map_or(0, |p| p.handle));
  }

  unsafe fn set_uniform_m44(&mut self, location: i32, value: &M44) {
    gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ptr() as *const GLfloat);
  }

  unsafe fn destroy_program(&mut self, program: &mut Self::ProgramRepr) {
    if self.state.current_program() == program.handle {
      self.state.use_program(0);
    }

    gl::DeleteProgram(program.handle);
  }
}

fn opengl_shader_type(t: StageType) -> GLenum {
  match t {
    StageType::VertexShader => gl::VERTEX_SHADER,
    StageType::FragmentShader => gl::FRAGMENT_SHADER,
  }
}

// info logs are NUL-terminated
fn info_log_to_string(mut log: Vec<u8>) -> String {
  if let Some(nul) = log.iter().position(|&b| b == 0) {
    log.truncate(nul);
  }

  String::from_utf8_lossy(&log).into_owned()
}
