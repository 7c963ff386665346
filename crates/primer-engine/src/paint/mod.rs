//! Color model used for clear colors.

pub mod color;

pub use color::Color;
