//! Primer engine crate.
//!
//! Opens a window with a GPU context, builds one shader program, uploads one
//! static shape, and redraws it every frame until asked to close.

pub mod coords;
pub mod core;
pub mod device;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod paint;
pub mod shader;
pub mod shape;
pub mod window;
