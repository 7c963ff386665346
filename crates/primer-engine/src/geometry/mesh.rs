use super::Vertex;

/// The single draw issued per frame for a shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawCall {
    /// Draw vertices in buffer order.
    Arrays { vertex_count: u32 },
    /// Draw through the index buffer.
    Indexed { index_count: u32 },
}

impl DrawCall {
    /// Number of vertices the pipeline assembles for this draw.
    #[inline]
    pub fn vertex_references(self) -> u32 {
        match self {
            DrawCall::Arrays { vertex_count } => vertex_count,
            DrawCall::Indexed { index_count } => index_count,
        }
    }

    /// Records the draw; program and buffers must already be bound.
    pub fn record(self, pass: &mut wgpu::RenderPass<'_>) {
        match self {
            DrawCall::Arrays { vertex_count } => pass.draw(0..vertex_count, 0..1),
            DrawCall::Indexed { index_count } => pass.draw_indexed(0..index_count, 0, 0..1),
        }
    }
}

/// A static shape: fixed vertices and optional index triples.
#[derive(Debug, Copy, Clone)]
pub struct Geometry {
    pub label: &'static str,
    pub vertices: &'static [Vertex],
    pub indices: Option<&'static [u32]>,
}

impl Geometry {
    pub const fn new(label: &'static str, vertices: &'static [Vertex]) -> Self {
        Self {
            label,
            vertices,
            indices: None,
        }
    }

    pub const fn with_indices(mut self, indices: &'static [u32]) -> Self {
        self.indices = Some(indices);
        self
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    pub fn draw_call(&self) -> DrawCall {
        match self.indices {
            Some(indices) => DrawCall::Indexed {
                index_count: indices.len() as u32,
            },
            None => DrawCall::Arrays {
                vertex_count: self.vertices.len() as u32,
            },
        }
    }

    pub fn vertex_bytes(&self) -> &'static [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    pub fn index_bytes(&self) -> Option<&'static [u8]> {
        self.indices.map(bytemuck::cast_slice)
    }
}
