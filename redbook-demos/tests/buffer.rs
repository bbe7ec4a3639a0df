mod common;

use common::{Call, Trace, TraceContext};
use redbook::buffer::{Buffer, BufferError, BufferTarget, Usage};

fn buffer(ctx: &mut TraceContext, bytes: usize) -> Buffer<Trace> {
  Buffer::new(ctx, BufferTarget::Array, bytes, Usage::StaticDraw).expect("buffer creation")
}

#[test]
fn write_in_range() {
  let mut ctx = TraceContext::new(Trace::default());
  let mut buf = buffer(&mut ctx, 16);

  buf.write(&mut ctx, 8, &[1u32, 2]).expect("write");

  let bytes = ctx.trace.buffers_of(BufferTarget::Array)[0];
  assert_eq!(&bytes[8..], bytemuck::cast_slice::<_, u8>(&[1u32, 2]));
}

#[test]
fn write_past_end_fails() {
  let mut ctx = TraceContext::new(Trace::default());
  let mut buf = buffer(&mut ctx, 16);
  ctx.trace.clear_calls();

  assert_eq!(
    buf.write(&mut ctx, 12, &[0f32, 0.]),
    Err(BufferError::overflow(12, 8, 16))
  );
  assert!(ctx.trace.calls.is_empty());
}

#[test]
fn write_at_huge_offset_fails() {
  let mut ctx = TraceContext::new(Trace::default());
  let mut buf = buffer(&mut ctx, 16);
  ctx.trace.clear_calls();

  assert_eq!(
    buf.write(&mut ctx, usize::MAX, &[1u8, 2]),
    Err(BufferError::overflow(usize::MAX, 2, 16))
  );
  assert!(!ctx.trace.calls.iter().any(|c| matches!(c, Call::WriteBuffer(..))));
}

#[test]
fn from_slice_sizes_buffer() {
  let mut ctx = TraceContext::new(Trace::default());
  let buf = Buffer::from_slice(
    &mut ctx,
    BufferTarget::ElementArray,
    &[0u16, 1, 2],
    Usage::StaticDraw,
  )
  .expect("buffer creation");

  assert_eq!(buf.bytes(), 6);
  assert_eq!(buf.target(), BufferTarget::ElementArray);
}
