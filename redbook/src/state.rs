//! Global render state.

/// A pipeline capability that can be switched on and off.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Capability {
  /// Discard back-facing triangles.
  FaceCulling,
  /// Depth testing.
  DepthTest,
}

/// Viewport, in pixels.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Viewport {
  /// Lower-left corner, x.
  pub x: i32,
  /// Lower-left corner, y.
  pub y: i32,
  /// Width.
  pub width: u32,
  /// Height.
  pub height: u32,
}

impl Viewport {
  /// Viewport covering a whole `width × height` surface.
  pub fn whole(width: u32, height: u32) -> Self {
    Viewport {
      x: 0,
      y: 0,
      width,
      height,
    }
  }
}
