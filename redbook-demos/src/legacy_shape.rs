//! The oldest way of drawing something: clear the screen, emit a filled polygon vertex by vertex in
//! immediate mode, flush. No buffer, no shader, no state.
//!
//! Requires a compatibility context.

use crate::{Backend, Demo, DemoError, Features, PlatformServices};
use redbook::context::GraphicsContext;
use redbook::render::Mode;

/// The polygon, in normalized device coordinates.
pub const POLYGON: [[f32; 2]; 5] = [[-0.5, 0.], [0., -0.5], [-0.5, 0.5], [0.5, 0.5], [0.5, -0.5]];

/// Immediate-mode polygon demo.
#[derive(Debug)]
pub struct LegacyShape;

impl<B> Demo<B> for LegacyShape
where
  B: ?Sized + Backend,
{
  const TITLE: &'static str = "test";

  fn features() -> Features {
    Features::default().with_legacy_context()
  }

  fn initialize(
    title: &str,
    _: &mut impl PlatformServices,
    _: &mut impl GraphicsContext<Backend = B>,
  ) -> Result<Self, DemoError> {
    log::info!("{}: nothing to initialize", title);
    Ok(LegacyShape)
  }

  fn display(&mut self, _: bool, context: &mut impl GraphicsContext<Backend = B>) {
    context.clear_color();
    context.immediate(Mode::Polygon, |emit| {
      emit.vertices2(&POLYGON);
    });
    context.flush();
  }

  fn resize(&mut self, _: u32, _: u32, _: &mut impl GraphicsContext<Backend = B>) {}

  fn finalize(self, _: &mut impl GraphicsContext<Backend = B>) {}
}
