//! Render state backend interface.

use crate::state::{Capability, Viewport};

/// Global pipeline state: capabilities, viewport, clearing and flushing.
pub unsafe trait State {
  /// Enable or disable a capability.
  unsafe fn set_capability(&mut self, capability: Capability, enabled: bool);

  /// Set the viewport.
  unsafe fn set_viewport(&mut self, viewport: Viewport);

  /// Clear the color buffer with the current clear color.
  unsafe fn clear_color_buffer(&mut self);

  /// Clear the color buffer attached at `draw_buffer` to the given color.
  unsafe fn clear_color_buffer_to(&mut self, draw_buffer: u32, color: [f32; 4]);

  /// Flush the command stream.
  unsafe fn flush(&mut self);
}
