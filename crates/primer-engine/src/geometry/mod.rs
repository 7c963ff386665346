//! Static geometry: CPU-side description, vertex layout, and one-time upload.
//!
//! A shape is a compile-time vertex list with an optional index list. It is
//! uploaded once and never written again.

mod buffer;
mod mesh;
mod upload;
mod vertex;

pub use buffer::GpuBuffer;
pub use mesh::{DrawCall, Geometry};
pub use upload::GpuGeometry;
pub use vertex::{AttributeDesc, Vertex, VertexLayout};
