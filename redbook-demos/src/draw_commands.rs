//! This program shows the four classic ways of issuing a draw call, side by side:
//!
//! 1. a plain array draw;
//! 2. an indexed draw;
//! 3. an indexed draw with a base vertex, which shifts every index before the vertex fetch;
//! 4. an instanced array draw.
//!
//! All of them render the same triangle, each one translated along the X axis, so that four
//! copies end up next to each other.
//!
//! The vertex data is not interleaved: a single buffer holds all the positions, followed by all
//! the colors. It is allocated once and filled with two sub-range writes.

use std::mem;

use crate::{Backend, Demo, DemoError, Features, PlatformServices};
use redbook::buffer::{Buffer, BufferTarget, Usage};
use redbook::context::GraphicsContext;
use redbook::linear::{frustum, translate, M44};
use redbook::render::{DrawCommand, IndexType, Mode};
use redbook::shader::{Program, Uniform};
use redbook::state::{Capability, Viewport};
use redbook::vertex::{VertexArray, VertexAttribFormat};

/// Vertex shader path, relative to the shader root.
pub const VS_PATH: &str = "primitive_restart/primitive_restart.vs.glsl";
/// Fragment shader path, relative to the shader root.
pub const FS_PATH: &str = "primitive_restart/primitive_restart.fs.glsl";

/// Attribute slot of the positions.
pub const POSITION_ATTRIB: u32 = 0;
/// Attribute slot of the colors.
pub const COLOR_ATTRIB: u32 = 1;

// A single triangle; the fourth vertex is only reachable through the base vertex draw.
#[rustfmt::skip]
pub const VERTEX_POSITIONS: [[f32; 4]; 4] = [
  [-1., -1., 0., 1.],
  [ 1., -1., 0., 1.],
  [-1.,  1., 0., 1.],
  [-1., -1., 0., 1.],
];

// Color for each vertex.
#[rustfmt::skip]
pub const VERTEX_COLORS: [[f32; 4]; 4] = [
  [1., 1., 1., 1.],
  [1., 1., 0., 1.],
  [1., 0., 1., 1.],
  [0., 1., 1., 1.],
];

/// Indices of the triangle.
pub const VERTEX_INDICES: [u16; 3] = [0, 1, 2];

/// Model-space X offset of each draw, in the order they are issued.
pub const DRAW_OFFSETS: [f32; 4] = [-3., -1., 1., 3.];

const BLACK: [f32; 4] = [0., 0., 0., 0.];
const Z_NEAR: f32 = 1.;
const Z_FAR: f32 = 500.;
const MODEL_DEPTH: f32 = -5.;

/// The four draw commands, in the order they are issued.
pub fn draw_commands() -> [DrawCommand; 4] {
  let count = VERTEX_INDICES.len();

  [
    DrawCommand::arrays(0, count),
    DrawCommand::elements(count, IndexType::U16),
    DrawCommand::elements_base_vertex(count, IndexType::U16, 1),
    DrawCommand::arrays_instanced(0, count, 1),
  ]
}

/// Projection used for a given aspect ratio (height over width).
pub fn projection(aspect: f32) -> M44 {
  frustum(-1., 1., -aspect, aspect, Z_NEAR, Z_FAR)
}

/// Draw-command demo.
pub struct DrawCommands<B>
where
  B: ?Sized + Backend,
{
  program: Program<B>,
  vertex_array: VertexArray<B>,
  vertex_buffer: Buffer<B>,
  index_buffer: Buffer<B>,
  model_matrix: Uniform,
  projection_matrix: Uniform,
  aspect: f32,
}

impl<B> DrawCommands<B>
where
  B: ?Sized + Backend,
{
  /// Current aspect ratio (height over width).
  pub fn aspect(&self) -> f32 {
    self.aspect
  }

  /// Vertex array holding the attribute bindings.
  pub fn vertex_array(&self) -> &VertexArray<B> {
    &self.vertex_array
  }

  /// Uniform receiving the model matrix.
  pub fn model_matrix(&self) -> Uniform {
    self.model_matrix
  }

  /// Uniform receiving the projection matrix.
  pub fn projection_matrix(&self) -> Uniform {
    self.projection_matrix
  }
}

impl<B> Demo<B> for DrawCommands<B>
where
  B: ?Sized + Backend,
{
  const TITLE: &'static str = "Drawing Commands Example";

  fn features() -> Features {
    Features::default().with_shader(VS_PATH).with_shader(FS_PATH)
  }

  fn initialize(
    title: &str,
    platform: &mut impl PlatformServices,
    context: &mut impl GraphicsContext<Backend = B>,
  ) -> Result<Self, DemoError> {
    let vs = platform
      .fetch_shader(VS_PATH)
      .map_err(|e| DemoError::shader_fetch(VS_PATH, e))?
      .to_owned();
    let fs = platform
      .fetch_shader(FS_PATH)
      .map_err(|e| DemoError::shader_fetch(FS_PATH, e))?;

    let program = Program::from_strings(context, &vs, fs)?;
    program.activate(context);

    let mut vertex_array = VertexArray::new(context);
    vertex_array.bind(context);

    let positions_bytes = mem::size_of_val(&VERTEX_POSITIONS);
    let colors_bytes = mem::size_of_val(&VERTEX_COLORS);

    let mut vertex_buffer = Buffer::new(
      context,
      BufferTarget::Array,
      positions_bytes + colors_bytes,
      Usage::StaticDraw,
    )?;
    vertex_buffer.write(context, 0, &VERTEX_POSITIONS)?;
    vertex_buffer.write(context, positions_bytes, &VERTEX_COLORS)?;

    vertex_array.set_attrib(
      context,
      &vertex_buffer,
      VertexAttribFormat::floats(POSITION_ATTRIB, 4, 0),
    );
    vertex_array.set_attrib(
      context,
      &vertex_buffer,
      VertexAttribFormat::floats(COLOR_ATTRIB, 4, positions_bytes),
    );

    let model_matrix = program.uniform(context, "model_matrix");
    let projection_matrix = program.uniform(context, "projection_matrix");

    log::info!(
      "{}: model_matrix = {}, projection_matrix = {}",
      title,
      model_matrix.location(),
      projection_matrix.location()
    );

    for (name, uniform) in [
      ("model_matrix", model_matrix),
      ("projection_matrix", projection_matrix),
    ] {
      if !uniform.is_active() {
        log::warn!("{}: inactive uniform {}", title, name);
      }
    }

    let index_buffer = Buffer::from_slice(
      context,
      BufferTarget::ElementArray,
      &VERTEX_INDICES,
      Usage::StaticDraw,
    )?;

    log::info!(
      "{}: vertex buffer = {} bytes, index buffer = {} bytes",
      title,
      vertex_buffer.bytes(),
      index_buffer.bytes()
    );

    Ok(DrawCommands {
      program,
      vertex_array,
      vertex_buffer,
      index_buffer,
      model_matrix,
      projection_matrix,
      aspect: 1.,
    })
  }

  fn display(&mut self, _: bool, context: &mut impl GraphicsContext<Backend = B>) {
    context.enable(Capability::FaceCulling);
    context.disable(Capability::DepthTest);
    context.clear_color_to(0, BLACK);

    self.program.activate(context);
    self
      .program
      .set_m44(context, self.projection_matrix, &projection(self.aspect));

    self.vertex_array.bind(context);
    self.index_buffer.bind(context);

    for (&x, command) in DRAW_OFFSETS.iter().zip(draw_commands()) {
      self
        .program
        .set_m44(context, self.model_matrix, &translate(x, 0., MODEL_DEPTH));
      self.vertex_array.render(context, Mode::Triangle, command);
    }
  }

  fn resize(&mut self, width: u32, height: u32, context: &mut impl GraphicsContext<Backend = B>) {
    context.set_viewport(Viewport::whole(width, height));

    self.aspect = height as f32 / width as f32;
    log::debug!("aspect = {}", self.aspect);
  }

  fn finalize(self, context: &mut impl GraphicsContext<Backend = B>) {
    Program::deactivate(context);
    self.program.destroy(context);
    self.vertex_array.destroy(context);
    self.vertex_buffer.destroy(context);
    self.index_buffer.destroy(context);
  }
}
