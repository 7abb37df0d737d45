//! Thin convenience wrapper over the raw `gl` bindings.
//!
//! A GL context must be current and loaded with `gl::load_with` before any of
//! these types are constructed.

pub mod geometry;
pub mod program;
pub mod renderer;
pub mod texture;
