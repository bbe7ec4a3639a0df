//! Vertex array backend interface.

use crate::vertex::VertexAttribFormat;

/// Vertex array objects.
pub unsafe trait VertexArray {
  /// Backend representation of a vertex array object.
  type VertexArrayRepr;

  /// Create a new vertex array object.
  unsafe fn new_vertex_array(&mut self) -> Self::VertexArrayRepr;

  /// Bind a vertex array, or none.
  unsafe fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArrayRepr>);

  /// Record an attribute binding into `vertex_array`, sourcing from the currently bound array
  /// buffer, and enable it.
  unsafe fn set_vertex_attrib(
    &mut self,
    vertex_array: &Self::VertexArrayRepr,
    format: &VertexAttribFormat,
  );

  /// Release a vertex array object.
  unsafe fn destroy_vertex_array(&mut self, vertex_array: &mut Self::VertexArrayRepr);
}
