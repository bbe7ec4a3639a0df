//! # redbook
//!
//! A thin, backend-agnostic layer over the handful of graphics API calls the redbook demos
//! showcase: buffer allocation and sub-range uploads, vertex array objects, shader programs and
//! their uniforms, the four classic draw-call variants and, for the oldest demos, immediate
//! mode.
//!
//! # Architecture
//!
//! The crate is split in two layers:
//!
//! - The [`backend`] traits. They are `unsafe` to implement and to call, and map almost one to one
//!   to the underlying graphics API. A backend type (such as `redbook_gl::GL33`) implements them.
//! - The high-level API: [`Buffer`], [`VertexArray`], [`Program`] and the default methods of
//!   [`GraphicsContext`]. Those types own backend representations and only release them when
//!   explicitly destroyed, which consumes them: a resource cannot be used once destroyed.
//!
//! A [`GraphicsContext`] is the object handed to code that wants to talk to the GPU. It is not
//! created by this crate; surface crates (`redbook-glfw`, for instance) create one along with a
//! window.
//!
//! [`Buffer`]: crate::buffer::Buffer
//! [`VertexArray`]: crate::vertex::VertexArray
//! [`Program`]: crate::shader::Program
//! [`GraphicsContext`]: crate::context::GraphicsContext

#![deny(missing_docs)]

pub mod backend;
pub mod buffer;
pub mod context;
pub mod immediate;
pub mod linear;
pub mod render;
pub mod shader;
pub mod state;
pub mod vertex;
