use super::{DrawCall, Geometry, GpuBuffer};

/// A shape resident on the GPU: vertex buffer, optional index buffer, and the
/// draw call that consumes them.
pub struct GpuGeometry {
    vertices: GpuBuffer,
    indices: Option<GpuBuffer>,
    draw: DrawCall,
}

impl GpuGeometry {
    /// Uploads `geometry` once. Buffers are never written again.
    pub fn upload(device: &wgpu::Device, geometry: &Geometry) -> Self {
        let vertices = GpuBuffer::init(
            device,
            format!("{} vertices", geometry.label),
            geometry.vertex_bytes(),
            wgpu::BufferUsages::VERTEX,
        );

        let indices = geometry.index_bytes().map(|bytes| {
            GpuBuffer::init(
                device,
                format!("{} indices", geometry.label),
                bytes,
                wgpu::BufferUsages::INDEX,
            )
        });

        Self {
            vertices,
            indices,
            draw: geometry.draw_call(),
        }
    }

    #[inline]
    pub fn draw_call(&self) -> DrawCall {
        self.draw
    }

    /// Binds the vertex buffer to slot 0 and, if present, the `u32` index buffer.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertices.raw().slice(..));
        if let Some(indices) = &self.indices {
            pass.set_index_buffer(indices.raw().slice(..), wgpu::IndexFormat::Uint32);
        }
    }
}
