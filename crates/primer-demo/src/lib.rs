//! The two demo programs: a plain triangle and an indexed quad.
//!
//! Both share window, shaders and colors; only the geometry differs.

use anyhow::Result;
use winit::dpi::LogicalSize;

use primer_engine::device::GpuInit;
use primer_engine::geometry::{Geometry, Vertex};
use primer_engine::logging::{init_logging, LoggingConfig};
use primer_engine::paint::Color;
use primer_engine::shader::{ShaderSources, ShadingConfig};
use primer_engine::shape::{SceneConfig, ShapeApp};
use primer_engine::window::{Runtime, RuntimeConfig};

pub const WINDOW_TITLE: &str = "Test Window >:D";
pub const WINDOW_WIDTH: f64 = 500.0;
pub const WINDOW_HEIGHT: f64 = 200.0;

pub const CLEAR_COLOR: Color = Color::rgba(0.0, 0.9, 0.2, 1.0);

pub const VERTEX_SHADER: &str = "
@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 1.0);
}
";

pub const FRAGMENT_SHADER: &str = "
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(0.1, 0.3, 0.9, 1.0);
}
";

pub static TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new(-0.5, -0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(0.0, 0.5, 0.05),
];

pub static QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new(0.5, 0.5, 0.0),   // top right
    Vertex::new(0.5, -0.5, 0.0),  // bottom right
    Vertex::new(-0.5, -0.5, 0.0), // bottom left
    Vertex::new(-0.5, 0.5, 0.0),  // top left
];

pub static QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

/// Which shape the program draws.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Variant {
    Triangle,
    Quad,
}

impl Variant {
    pub fn geometry(self) -> Geometry {
        match self {
            Variant::Triangle => Geometry::new("triangle", &TRIANGLE_VERTICES),
            Variant::Quad => Geometry::new("quad", &QUAD_VERTICES).with_indices(&QUAD_INDICES),
        }
    }

    pub fn scene_config(self) -> SceneConfig {
        let shading = ShadingConfig::new(ShaderSources::from_static(VERTEX_SHADER, FRAGMENT_SHADER));
        SceneConfig::new(self.geometry(), shading).with_clear_color(CLEAR_COLOR)
    }
}

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        resizable: true,
    }
}

pub fn gpu_init() -> GpuInit {
    GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    }
}

/// Runs `variant` until the window closes.
pub fn run(variant: Variant) -> Result<()> {
    log::info!("starting {variant:?}");
    Runtime::run(runtime_config(), gpu_init(), ShapeApp::new(variant.scene_config()))
}

/// Binary entry point: logs a fatal error and exits with status -1.
pub fn launch(variant: Variant) {
    init_logging(LoggingConfig::default());

    if let Err(err) = run(variant) {
        log::error!("fatal: {err:#}");
        std::process::exit(-1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_engine::geometry::DrawCall;
    use primer_engine::shader::{build_stages, ShaderFailurePolicy};

    #[test]
    fn demo_shaders_build_and_link() {
        let config = Variant::Triangle.scene_config();
        assert!(build_stages(&config.shading.sources, &Vertex::LAYOUT).is_ok());
    }

    #[test]
    fn triangle_issues_three_vertex_references() {
        let draw = Variant::Triangle.geometry().draw_call();
        assert_eq!(draw, DrawCall::Arrays { vertex_count: 3 });
        assert_eq!(draw.vertex_references(), TRIANGLE_VERTICES.len() as u32);
    }

    #[test]
    fn quad_issues_six_references_over_four_vertices() {
        let geometry = Variant::Quad.geometry();
        assert_eq!(geometry.vertices.len(), 4);
        assert_eq!(geometry.draw_call().vertex_references(), 6);
    }

    #[test]
    fn quad_indices_stay_in_range() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }

    #[test]
    fn both_variants_share_shading_and_clear_color() {
        let tri = Variant::Triangle.scene_config();
        let quad = Variant::Quad.scene_config();
        assert_eq!(tri.clear_color, CLEAR_COLOR);
        assert_eq!(quad.clear_color, CLEAR_COLOR);
        assert_eq!(tri.shading.sources.vertex, quad.shading.sources.vertex);
        assert_eq!(tri.shading.failure_policy, ShaderFailurePolicy::Degraded);
    }

    #[test]
    fn window_matches_fixed_dimensions() {
        let cfg = runtime_config();
        assert_eq!(cfg.title, WINDOW_TITLE);
        assert_eq!(cfg.initial_size, LogicalSize::new(500.0, 200.0));
        assert!(!gpu_init().prefer_srgb);
    }
}
