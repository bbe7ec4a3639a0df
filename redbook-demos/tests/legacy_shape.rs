mod common;

use common::{Call, Trace, TraceContext, TracePlatform};
use redbook::render::Mode;
use redbook_demos::legacy_shape::{LegacyShape, POLYGON};
use redbook_demos::Demo;

fn init() -> (TraceContext, LegacyShape) {
  let mut ctx = TraceContext::new(Trace::default());
  let mut platform = TracePlatform::default();
  let demo = <LegacyShape as Demo<Trace>>::initialize("test", &mut platform, &mut ctx)
    .expect("demo initialization");

  (ctx, demo)
}

#[test]
fn title_and_features() {
  assert_eq!(<LegacyShape as Demo<Trace>>::TITLE, "test");

  let features = <LegacyShape as Demo<Trace>>::features();
  assert!(features.requires_legacy_context());
  assert!(features.shaders().is_empty());
}

#[test]
fn initialize_touches_nothing() {
  let (ctx, _) = init();
  assert!(ctx.trace.calls.is_empty());
}

#[test]
fn display_emits_polygon() {
  let (mut ctx, mut demo) = init();

  <LegacyShape as Demo<Trace>>::display(&mut demo, true, &mut ctx);

  let mut expected = vec![Call::Clear, Call::Begin(Mode::Polygon)];
  expected.extend(POLYGON.iter().map(|&[x, y]| Call::Vertex2(x, y)));
  expected.extend([Call::End, Call::Flush]);

  assert_eq!(ctx.trace.calls, expected);
}

#[test]
fn polygon_vertices() {
  assert_eq!(
    POLYGON,
    [[-0.5, 0.], [0., -0.5], [-0.5, 0.5], [0.5, 0.5], [0.5, -0.5]]
  );
}

#[test]
fn display_is_repeatable() {
  let (mut ctx, mut demo) = init();

  <LegacyShape as Demo<Trace>>::display(&mut demo, true, &mut ctx);
  let first = ctx.trace.calls.clone();
  ctx.trace.clear_calls();
  <LegacyShape as Demo<Trace>>::display(&mut demo, false, &mut ctx);

  assert_eq!(ctx.trace.calls, first);
}

#[test]
fn resize_and_finalize_touch_nothing() {
  let (mut ctx, mut demo) = init();

  <LegacyShape as Demo<Trace>>::resize(&mut demo, 800, 600, &mut ctx);
  <LegacyShape as Demo<Trace>>::finalize(demo, &mut ctx);

  assert!(ctx.trace.calls.is_empty());
}
