//! Coordinate types shared by the runtime and the frame loop.
//!
//! The viewport is kept in physical pixels: it is what the surface is
//! configured with and what the render pass rasterizes into.

mod viewport;

pub use viewport::Viewport;
