//! Route geometry: decoding encoded route strings and resolving drawable
//! paths for segments with partial or missing geometry.

pub mod polyline;
mod resolve;

pub use resolve::{GeometryError, ResolvedPath, resolve};
