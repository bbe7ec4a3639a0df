//! A backend recording every call it receives, along with the GPU objects it would have created.
//!
//! Not every test uses every helper.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::{error, fmt};

use redbook::backend::{
  buffer::Buffer, draw::Draw, immediate::Immediate, shader::Shader, state::State,
  vertex_array::VertexArray,
};
use redbook::buffer::{check_range, BufferError, BufferTarget, Usage};
use redbook::context::GraphicsContext;
use redbook::linear::M44;
use redbook::render::{DrawCommand, IndexType, Mode};
use redbook::shader::{ProgramError, StageError, StageType};
use redbook::state::{Capability, Viewport};
use redbook::vertex::VertexAttribFormat;
use redbook_demos::PlatformServices;

/// GPU object handle.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
  NewStage(StageType),
  DestroyStage(u32),
  NewProgram(u32),
  UniformLocation(String, i32),
  UseProgram(Option<u32>),
  SetUniformM44(i32, M44),
  DestroyProgram(u32),
  NewBuffer(u32, BufferTarget, usize),
  WriteBuffer(u32, usize, usize),
  BindBuffer(u32, BufferTarget),
  DestroyBuffer(u32),
  NewVertexArray(u32),
  BindVertexArray(Option<u32>),
  SetVertexAttrib(u32, VertexAttribFormat),
  DestroyVertexArray(u32),
  Draw(Mode, DrawCommand),
  SetCapability(Capability, bool),
  SetViewport(Viewport),
  Clear,
  ClearTo(u32, [f32; 4]),
  Flush,
  Begin(Mode),
  Vertex2(f32, f32),
  End,
}

#[derive(Debug, Default)]
pub struct Trace {
  pub calls: Vec<Call>,
  next_handle: u32,
  uniforms: Vec<String>,
  pub fail_compile: Option<StageType>,
  pub fail_link: bool,

  pub buffers: HashMap<u32, (BufferTarget, Vec<u8>)>,
  pub vertex_arrays: HashMap<u32, Vec<VertexAttribFormat>>,
  pub programs: HashSet<u32>,
  pub stages: HashSet<u32>,
  pub current_program: Option<u32>,
  pub bound_vertex_array: Option<u32>,
  pub bound_array_buffer: Option<u32>,
  pub bound_element_buffer: Option<u32>,
  pub capabilities: HashMap<Capability, bool>,
  /// Vertices fetched by each draw, in order.
  pub fetches: Vec<Vec<i64>>,
}

impl Trace {
  /// A backend whose programs expose the given uniforms, in location order.
  pub fn with_uniforms(names: &[&str]) -> Self {
    Trace {
      uniforms: names.iter().map(|n| n.to_string()).collect(),
      ..Trace::default()
    }
  }

  fn handle(&mut self) -> u32 {
    self.next_handle += 1;
    self.next_handle
  }

  pub fn clear_calls(&mut self) {
    self.calls.clear();
  }

  pub fn draws(&self) -> Vec<(Mode, DrawCommand)> {
    self
      .calls
      .iter()
      .filter_map(|call| match *call {
        Call::Draw(mode, cmd) => Some((mode, cmd)),
        _ => None,
      })
      .collect()
  }

  /// Matrices uploaded to a given location, in order.
  pub fn uploads(&self, location: i32) -> Vec<M44> {
    self
      .calls
      .iter()
      .filter_map(|call| match *call {
        Call::SetUniformM44(loc, m) if loc == location => Some(m),
        _ => None,
      })
      .collect()
  }

  /// Live buffers of a given target.
  pub fn buffers_of(&self, target: BufferTarget) -> Vec<&[u8]> {
    let mut handles: Vec<_> = self
      .buffers
      .iter()
      .filter(|(_, (t, _))| *t == target)
      .map(|(h, _)| *h)
      .collect();
    handles.sort_unstable();

    handles
      .into_iter()
      .map(|h| self.buffers[&h].1.as_slice())
      .collect()
  }
}

unsafe impl Buffer for Trace {
  type BufferRepr = Handle;

  unsafe fn new_buffer(
    &mut self,
    target: BufferTarget,
    bytes: usize,
    _: Usage,
  ) -> Result<Self::BufferRepr, BufferError> {
    let h = self.handle();
    self.buffers.insert(h, (target, vec![0; bytes]));
    self.calls.push(Call::NewBuffer(h, target, bytes));

    match target {
      BufferTarget::Array => self.bound_array_buffer = Some(h),
      BufferTarget::ElementArray => self.bound_element_buffer = Some(h),
    }

    Ok(Handle(h))
  }

  unsafe fn write_buffer(
    &mut self,
    buffer: &mut Self::BufferRepr,
    offset: usize,
    data: &[u8],
  ) -> Result<(), BufferError> {
    let storage = &mut self.buffers.get_mut(&buffer.0).expect("live buffer").1;
    check_range(offset, data.len(), storage.len())?;

    storage[offset..offset + data.len()].copy_from_slice(data);
    self.calls.push(Call::WriteBuffer(buffer.0, offset, data.len()));

    Ok(())
  }

  unsafe fn bind_buffer(&mut self, buffer: &Self::BufferRepr) {
    let target = self.buffers.get(&buffer.0).expect("live buffer").0;

    match target {
      BufferTarget::Array => self.bound_array_buffer = Some(buffer.0),
      BufferTarget::ElementArray => self.bound_element_buffer = Some(buffer.0),
    }

    self.calls.push(Call::BindBuffer(buffer.0, target));
  }

  unsafe fn destroy_buffer(&mut self, buffer: &mut Self::BufferRepr) {
    self.buffers.remove(&buffer.0).expect("live buffer");

    if self.bound_array_buffer == Some(buffer.0) {
      self.bound_array_buffer = None;
    } else if self.bound_element_buffer == Some(buffer.0) {
      self.bound_element_buffer = None;
    }

    self.calls.push(Call::DestroyBuffer(buffer.0));
  }
}

unsafe impl Shader for Trace {
  type StageRepr = Handle;

  type ProgramRepr = Handle;

  unsafe fn new_stage(&mut self, ty: StageType, _: &str) -> Result<Self::StageRepr, StageError> {
    self.calls.push(Call::NewStage(ty));

    if self.fail_compile == Some(ty) {
      return Err(StageError::compilation_failed(ty, "rejected"));
    }

    let h = self.handle();
    self.stages.insert(h);
    Ok(Handle(h))
  }

  unsafe fn destroy_stage(&mut self, stage: &mut Self::StageRepr) {
    self.stages.remove(&stage.0);
    self.calls.push(Call::DestroyStage(stage.0));
  }

  unsafe fn new_program(
    &mut self,
    _: &Self::StageRepr,
    _: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    if self.fail_link {
      return Err(ProgramError::link_failed("rejected"));
    }

    let h = self.handle();
    self.programs.insert(h);
    self.calls.push(Call::NewProgram(h));
    Ok(Handle(h))
  }

  unsafe fn uniform_location(&mut self, _: &Self::ProgramRepr, name: &str) -> i32 {
    let location = self
      .uniforms
      .iter()
      .position(|n| n == name)
      .map_or(-1, |i| i as i32);

    self.calls.push(Call::UniformLocation(name.to_owned(), location));
    location
  }

  unsafe fn use_program(&mut self, program: Option<&Self::ProgramRepr>) {
    self.current_program = program.map(|p| p.0);
    self.calls.push(Call::UseProgram(self.current_program));
  }

  unsafe fn set_uniform_m44(&mut self, location: i32, value: &M44) {
    self.calls.push(Call::SetUniformM44(location, *value));
  }

  unsafe fn destroy_program(&mut self, program: &mut Self::ProgramRepr) {
    self.programs.remove(&program.0);
    self.calls.push(Call::DestroyProgram(program.0));
  }
}

unsafe impl VertexArray for Trace {
  type VertexArrayRepr = Handle;

  unsafe fn new_vertex_array(&mut self) -> Self::VertexArrayRepr {
    let h = self.handle();
    self.vertex_arrays.insert(h, Vec::new());
    self.calls.push(Call::NewVertexArray(h));
    Handle(h)
  }

  unsafe fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArrayRepr>) {
    self.bound_vertex_array = vertex_array.map(|v| v.0);
    self.calls.push(Call::BindVertexArray(self.bound_vertex_array));
  }

  unsafe fn set_vertex_attrib(
    &mut self,
    vertex_array: &Self::VertexArrayRepr,
    format: &VertexAttribFormat,
  ) {
    assert!(
      self.bound_array_buffer.is_some(),
      "attribute recorded without array buffer"
    );

    let attribs = self
      .vertex_arrays
      .get_mut(&vertex_array.0)
      .expect("live vertex array");
    attribs.retain(|a| a.index != format.index);
    attribs.push(*format);

    self.calls.push(Call::SetVertexAttrib(vertex_array.0, *format));
  }

  unsafe fn destroy_vertex_array(&mut self, vertex_array: &mut Self::VertexArrayRepr) {
    self.vertex_arrays.remove(&vertex_array.0).expect("live vertex array");
    self.calls.push(Call::DestroyVertexArray(vertex_array.0));
  }
}

unsafe impl Draw for Trace {
  unsafe fn draw(&mut self, mode: Mode, command: DrawCommand) {
    let vao = self.bound_vertex_array.expect("draw without vertex array");
    assert!(self.vertex_arrays.contains_key(&vao), "draw with a dead vertex array");

    if let Some(program) = self.current_program {
      assert!(self.programs.contains(&program), "draw with a dead program");
    }

    let fetch = self.fetched_vertices(command);
    self.fetches.push(fetch);
    self.calls.push(Call::Draw(mode, command));
  }
}

impl Trace {
  /// Vertices a draw command fetches, resolving indices through the bound element buffer.
  fn fetched_vertices(&self, command: DrawCommand) -> Vec<i64> {
    let (count, index_type, offset, base_vertex) = match command {
      DrawCommand::Arrays { first, count } | DrawCommand::ArraysInstanced { first, count, .. } => {
        return (first..first + count).map(|v| v as i64).collect();
      }

      DrawCommand::Elements {
        count,
        index_type,
        offset,
      } => (count, index_type, offset, 0),

      DrawCommand::ElementsBaseVertex {
        count,
        index_type,
        offset,
        base_vertex,
      } => (count, index_type, offset, base_vertex),
    };

    let ebo = self.bound_element_buffer.expect("indexed draw without element buffer");
    let bytes = &self.buffers[&ebo].1;
    let size = index_type.bytes();

    bytes[offset..offset + count * size]
      .chunks(size)
      .map(|index| {
        let index = match index_type {
          IndexType::U8 => index[0] as i64,
          IndexType::U16 => u16::from_ne_bytes([index[0], index[1]]) as i64,
          IndexType::U32 => u32::from_ne_bytes([index[0], index[1], index[2], index[3]]) as i64,
        };

        index + base_vertex as i64
      })
      .collect()
  }
}

unsafe impl State for Trace {
  unsafe fn set_capability(&mut self, capability: Capability, enabled: bool) {
    self.capabilities.insert(capability, enabled);
    self.calls.push(Call::SetCapability(capability, enabled));
  }

  unsafe fn set_viewport(&mut self, viewport: Viewport) {
    self.calls.push(Call::SetViewport(viewport));
  }

  unsafe fn clear_color_buffer(&mut self) {
    self.calls.push(Call::Clear);
  }

  unsafe fn clear_color_buffer_to(&mut self, draw_buffer: u32, color: [f32; 4]) {
    self.calls.push(Call::ClearTo(draw_buffer, color));
  }

  unsafe fn flush(&mut self) {
    self.calls.push(Call::Flush);
  }
}

unsafe impl Immediate for Trace {
  unsafe fn begin(&mut self, mode: Mode) {
    self.calls.push(Call::Begin(mode));
  }

  unsafe fn vertex2(&mut self, x: f32, y: f32) {
    self.calls.push(Call::Vertex2(x, y));
  }

  unsafe fn end(&mut self) {
    self.calls.push(Call::End);
  }
}

#[derive(Debug)]
pub struct TraceContext {
  pub trace: Trace,
}

impl TraceContext {
  pub fn new(trace: Trace) -> Self {
    TraceContext { trace }
  }
}

unsafe impl GraphicsContext for TraceContext {
  type Backend = Trace;

  fn backend(&mut self) -> &mut Self::Backend {
    &mut self.trace
  }
}

#[derive(Debug)]
pub struct UnknownShader(pub String);

impl fmt::Display for UnknownShader {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "unknown shader {}", self.0)
  }
}

impl error::Error for UnknownShader {}

/// In-memory shader sources.
#[derive(Debug, Default)]
pub struct TracePlatform {
  shaders: HashMap<String, String>,
}

impl TracePlatform {
  pub fn with_shaders(paths: &[&str]) -> Self {
    let shaders = paths
      .iter()
      .map(|p| (p.to_string(), format!("// {}", p)))
      .collect();

    TracePlatform { shaders }
  }
}

impl PlatformServices for TracePlatform {
  type FetchError = UnknownShader;

  fn fetch_shader(&mut self, path: &str) -> Result<&str, Self::FetchError> {
    self
      .shaders
      .get(path)
      .map(String::as_str)
      .ok_or_else(|| UnknownShader(path.to_owned()))
  }
}
