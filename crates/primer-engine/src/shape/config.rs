use crate::geometry::Geometry;
use crate::input::Key;
use crate::paint::Color;
use crate::shader::ShadingConfig;

/// What the shape application renders.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub geometry: Geometry,
    pub shading: ShadingConfig,
    pub clear_color: Color,
    pub exit_key: Key,
}

impl SceneConfig {
    pub fn new(geometry: Geometry, shading: ShadingConfig) -> Self {
        Self {
            geometry,
            shading,
            clear_color: Color::BLACK,
            exit_key: Key::Escape,
        }
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_exit_key(mut self, key: Key) -> Self {
        self.exit_key = key;
        self
    }
}
