use crate::geometry::VertexLayout;

use super::{build_stages, LinkedStages, ShaderError, ShadingConfig};

/// A linked shader program: one render pipeline drawing triangle lists.
///
/// Immutable after creation. Dropping it releases the pipeline.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    /// Compiles, links and creates the pipeline for `target_format`.
    ///
    /// Anything the device rejects is captured in a validation error scope and
    /// returned as `ShaderError::Pipeline`.
    pub fn build(
        device: &wgpu::Device,
        config: &ShadingConfig,
        layout: &VertexLayout,
        target_format: wgpu::TextureFormat,
    ) -> Result<Self, ShaderError> {
        let linked = build_stages(&config.sources, layout)?;

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let program = Self::create(device, config, &linked, layout, target_format);

        match pollster::block_on(scope.pop()) {
            Some(err) => Err(ShaderError::pipeline(&err)),
            None => {
                log::info!("shader program ready ({target_format:?})");
                Ok(program)
            }
        }
    }

    fn create(
        device: &wgpu::Device,
        config: &ShadingConfig,
        linked: &LinkedStages,
        layout: &VertexLayout,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        // Stage modules only live until the pipeline exists.
        let vs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("primer vertex stage"),
            source: wgpu::ShaderSource::Wgsl(config.sources.vertex.clone()),
        });
        let fs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("primer fragment stage"),
            source: wgpu::ShaderSource::Wgsl(config.sources.fragment.clone()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("primer pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let attributes = layout.wgpu_attributes();

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("primer program"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(linked.vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: &[layout.buffer_layout(&attributes)],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(linked.fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self { pipeline }
    }

    /// Binds the program for subsequent draws in `pass`.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        log::trace!("released shader program");
    }
}
