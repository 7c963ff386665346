//! The static-shape application.
//!
//! One component parametrized by a geometry description and a shading
//! configuration: build the program, upload the shape, draw it every frame.

mod app;
mod config;

pub use app::ShapeApp;
pub use config::SceneConfig;
