//! Backend interfacing.
//!
//! Almost everything declared in this module and its submodules is `unsafe`. An end-user is not
//! supposed to implement any of this. Library authors might use some traits from here, required
//! by generic code, but no one but backend authors should implement any symbols from here.
//!
//! # Conventions
//!
//! Each concern gets its own trait. Traits owning GPU objects expose an associated _repr_ type
//! (`BufferRepr`, `ProgramRepr`, …), which is the backend-side representation of the object. The
//! high-level API in this crate wraps those representations and decides when they are created,
//! used and destroyed.

pub mod buffer;
pub mod draw;
pub mod immediate;
pub mod shader;
pub mod state;
pub mod vertex_array;
