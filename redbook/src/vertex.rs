//! Vertex attributes and vertex array objects.
//!
//! A [`VertexArray`] records how byte ranges of array buffers map to the numbered vertex
//! attributes a vertex shader reads. Each mapping is described by a [`VertexAttribFormat`].

use crate::backend::buffer::Buffer as BufferBackend;
use crate::backend::draw::Draw;
use crate::backend::vertex_array::VertexArray as VertexArrayBackend;
use crate::buffer::{Buffer, BufferTarget};
use crate::context::GraphicsContext;
use crate::render::{DrawCommand, Mode};

/// Scalar type of a vertex attribute component.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VertexAttribType {
  /// 32-bit floating point.
  Float,
  /// 32-bit signed integer.
  Int,
  /// 32-bit unsigned integer.
  UInt,
  /// 8-bit unsigned integer.
  UByte,
}

impl VertexAttribType {
  /// Size of a single component, in bytes.
  pub fn bytes(self) -> usize {
    match self {
      VertexAttribType::Float | VertexAttribType::Int | VertexAttribType::UInt => 4,
      VertexAttribType::UByte => 1,
    }
  }

  /// Whether the shader reads the components as integers rather than floats.
  pub fn is_integral(self) -> bool {
    matches!(self, VertexAttribType::Int | VertexAttribType::UInt)
  }
}

/// How a vertex attribute is sourced from the bound array buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VertexAttribFormat {
  /// Attribute slot.
  pub index: u32,
  /// Number of components (1 to 4).
  pub dim: usize,
  /// Component type.
  pub ty: VertexAttribType,
  /// Whether integer components are normalized to `[0, 1]` / `[-1, 1]`.
  pub normalized: bool,
  /// Bytes between two consecutive attributes; `0` means tightly packed.
  pub stride: usize,
  /// Offset of the first attribute in the buffer, in bytes.
  pub offset: usize,
}

impl VertexAttribFormat {
  /// Tightly packed, non-normalized float attribute starting at `offset`.
  pub fn floats(index: u32, dim: usize, offset: usize) -> Self {
    VertexAttribFormat {
      index,
      dim,
      ty: VertexAttribType::Float,
      normalized: false,
      stride: 0,
      offset,
    }
  }

  /// Effective distance between two consecutive attributes, in bytes.
  pub fn effective_stride(&self) -> usize {
    if self.stride == 0 {
      self.dim * self.ty.bytes()
    } else {
      self.stride
    }
  }
}

/// A vertex array object.
#[derive(Debug)]
pub struct VertexArray<B>
where
  B: ?Sized + VertexArrayBackend,
{
  repr: B::VertexArrayRepr,
  attribs: Vec<VertexAttribFormat>,
}

impl<B> VertexArray<B>
where
  B: ?Sized + VertexArrayBackend,
{
  /// Create a new, empty vertex array.
  pub fn new<C>(ctx: &mut C) -> Self
  where
    C: GraphicsContext<Backend = B>,
  {
    let repr = unsafe { ctx.backend().new_vertex_array() };

    VertexArray {
      repr,
      attribs: Vec::new(),
    }
  }

  /// Bind the vertex array.
  pub fn bind<C>(&self, ctx: &mut C)
  where
    C: GraphicsContext<Backend = B>,
  {
    unsafe { ctx.backend().bind_vertex_array(Some(&self.repr)) }
  }

  /// Map a range of `buffer` to an attribute slot and enable it.
  ///
  /// The vertex array and `buffer` are bound as a side effect.
  pub fn set_attrib<C>(&mut self, ctx: &mut C, buffer: &Buffer<B>, format: VertexAttribFormat)
  where
    C: GraphicsContext<Backend = B>,
    B: BufferBackend,
  {
    debug_assert_eq!(buffer.target(), BufferTarget::Array);

    self.bind(ctx);
    buffer.bind(ctx);
    unsafe { ctx.backend().set_vertex_attrib(&self.repr, &format) };

    self.attribs.retain(|a| a.index != format.index);
    self.attribs.push(format);
  }

  /// Attributes recorded so far.
  pub fn attribs(&self) -> &[VertexAttribFormat] {
    &self.attribs
  }

  /// Bind the vertex array and issue a draw command.
  pub fn render<C>(&self, ctx: &mut C, mode: Mode, command: DrawCommand)
  where
    C: GraphicsContext<Backend = B>,
    B: Draw,
  {
    self.bind(ctx);
    unsafe { ctx.backend().draw(mode, command) }
  }

  /// Release the vertex array.
  pub fn destroy<C>(mut self, ctx: &mut C)
  where
    C: GraphicsContext<Backend = B>,
  {
    unsafe { ctx.backend().destroy_vertex_array(&mut self.repr) }
  }

  /// Backend representation of the vertex array.
  pub fn repr(&self) -> &B::VertexArrayRepr {
    &self.repr
  }
}
