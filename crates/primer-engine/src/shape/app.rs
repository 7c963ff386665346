use anyhow::Result;
use winit::dpi::PhysicalSize;

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx, StartCtx};
use crate::frame::FrameLoop;
use crate::geometry::{GpuGeometry, Vertex};
use crate::shader::ShaderProgram;

use super::SceneConfig;

/// GPU objects owned by the app. Dropping this releases all of them.
struct SceneResources {
    program: Option<ShaderProgram>,
    geometry: GpuGeometry,
}

/// Draws one static shape every frame until the exit key or window close.
pub struct ShapeApp {
    config: SceneConfig,
    frame_loop: Option<FrameLoop>,
    resources: Option<SceneResources>,
}

impl ShapeApp {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            frame_loop: None,
            resources: None,
        }
    }
}

impl App for ShapeApp {
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) -> Result<()> {
        let device = ctx.gpu.device();

        let built = ShaderProgram::build(
            device,
            &self.config.shading,
            &Vertex::LAYOUT,
            ctx.gpu.surface_format(),
        );
        let program = self.config.shading.failure_policy.apply(built)?;

        let geometry = GpuGeometry::upload(device, &self.config.geometry);

        // Without a program there is nothing to draw; frames are only cleared.
        let draw = program.as_ref().map(|_| geometry.draw_call());

        self.frame_loop = Some(
            FrameLoop::new(self.config.clear_color, draw, Viewport::from(ctx.gpu.size()))
                .with_exit_key(self.config.exit_key),
        );
        self.resources = Some(SceneResources { program, geometry });

        log::info!(
            "scene `{}` ready ({} vertices, {})",
            self.config.geometry.label,
            self.config.geometry.vertices.len(),
            if self.config.geometry.is_indexed() { "indexed" } else { "non-indexed" }
        );
        Ok(())
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        if let Some(frame_loop) = &mut self.frame_loop {
            frame_loop.resize(Viewport::from(size));
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (Some(frame_loop), Some(resources)) = (&mut self.frame_loop, &self.resources) else {
            return AppControl::Exit;
        };

        let Some(plan) = frame_loop.next_frame(ctx.input) else {
            return AppControl::Exit;
        };

        let control = ctx.render(&plan, |pass| {
            if let (Some(program), Some(draw)) = (&resources.program, plan.draw) {
                program.bind(pass);
                resources.geometry.bind(pass);
                draw.record(pass);
            }
        });

        if control == AppControl::Exit {
            frame_loop.request_close();
        }
        control
    }

    fn on_exit(&mut self) {
        if self.resources.take().is_some() {
            log::info!("released GPU resources");
        }
    }
}
