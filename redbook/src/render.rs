//! Draw commands.
//!
//! A [`DrawCommand`] describes one of the classic draw-call variants. Commands are issued against
//! a [`VertexArray`], which must be bound along with the element buffer for indexed commands.
//!
//! [`VertexArray`]: crate::vertex::VertexArray

/// Primitive mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
  /// A single point per vertex.
  Point,
  /// A line per pair of vertices.
  Line,
  /// A connected line strip.
  LineStrip,
  /// A triangle per triple of vertices.
  Triangle,
  /// A connected triangle strip.
  TriangleStrip,
  /// A triangle fan around the first vertex.
  TriangleFan,
  /// A single convex filled polygon. Immediate mode only.
  Polygon,
}

/// Type of the indices read from an element buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IndexType {
  /// 8-bit unsigned integers.
  U8,
  /// 16-bit unsigned integers.
  U16,
  /// 32-bit unsigned integers.
  U32,
}

impl IndexType {
  /// Size of a single index, in bytes.
  pub fn bytes(self) -> usize {
    match self {
      IndexType::U8 => 1,
      IndexType::U16 => 2,
      IndexType::U32 => 4,
    }
  }
}

/// A draw call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DrawCommand {
  /// Draw `count` vertices starting at vertex `first`.
  Arrays {
    /// First vertex.
    first: usize,
    /// Number of vertices.
    count: usize,
  },

  /// Draw `count` indices of type `index_type` read at byte `offset` in the element buffer.
  Elements {
    /// Number of indices.
    count: usize,
    /// Type of the indices.
    index_type: IndexType,
    /// Offset in the element buffer, in bytes.
    offset: usize,
  },

  /// Same as [`DrawCommand::Elements`], but `base_vertex` is added to every index before the
  /// vertex fetch.
  ElementsBaseVertex {
    /// Number of indices.
    count: usize,
    /// Type of the indices.
    index_type: IndexType,
    /// Offset in the element buffer, in bytes.
    offset: usize,
    /// Constant added to every index.
    base_vertex: i32,
  },

  /// Same as [`DrawCommand::Arrays`], repeated `instances` times.
  ArraysInstanced {
    /// First vertex.
    first: usize,
    /// Number of vertices.
    count: usize,
    /// Number of instances.
    instances: usize,
  },
}

impl DrawCommand {
  /// Draw `count` vertices starting at `first`.
  pub fn arrays(first: usize, count: usize) -> Self {
    DrawCommand::Arrays { first, count }
  }

  /// Draw `count` indices from the start of the element buffer.
  pub fn elements(count: usize, index_type: IndexType) -> Self {
    DrawCommand::Elements {
      count,
      index_type,
      offset: 0,
    }
  }

  /// Draw `count` indices from the start of the element buffer, shifted by `base_vertex`.
  pub fn elements_base_vertex(count: usize, index_type: IndexType, base_vertex: i32) -> Self {
    DrawCommand::ElementsBaseVertex {
      count,
      index_type,
      offset: 0,
      base_vertex,
    }
  }

  /// Draw `count` vertices starting at `first`, `instances` times.
  pub fn arrays_instanced(first: usize, count: usize, instances: usize) -> Self {
    DrawCommand::ArraysInstanced {
      first,
      count,
      instances,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn index_sizes() {
    assert_eq!(IndexType::U8.bytes(), 1);
    assert_eq!(IndexType::U16.bytes(), 2);
    assert_eq!(IndexType::U32.bytes(), 4);
  }

  #[test]
  fn indexed_commands_start_at_buffer_start() {
    assert_eq!(
      DrawCommand::elements_base_vertex(3, IndexType::U16, 1),
      DrawCommand::ElementsBaseVertex {
        count: 3,
        index_type: IndexType::U16,
        offset: 0,
        base_vertex: 1,
      }
    );
  }
}
