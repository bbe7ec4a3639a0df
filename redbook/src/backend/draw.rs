//! Draw command backend interface.

use crate::render::{DrawCommand, Mode};

/// Issue draw commands against the currently bound vertex array (and element buffer, for indexed
/// commands).
pub unsafe trait Draw {
  /// Run a single draw command.
  unsafe fn draw(&mut self, mode: Mode, command: DrawCommand);
}
