use bytemuck::{Pod, Zeroable};

/// One vertex: a position in clip space.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }

    /// Position at location 0, three floats, tightly packed.
    pub const LAYOUT: VertexLayout = VertexLayout {
        stride: std::mem::size_of::<Vertex>() as u64,
        attributes: &[AttributeDesc {
            location: 0,
            components: 3,
            offset: 0,
        }],
    };
}

/// A single float vertex attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeDesc {
    /// Shader input slot (`@location`).
    pub location: u32,
    /// Number of `f32` components, 1 to 4.
    pub components: u32,
    /// Byte offset inside one vertex.
    pub offset: u64,
}

impl AttributeDesc {
    /// `None` when `components` is outside 1..=4.
    pub fn format(&self) -> Option<wgpu::VertexFormat> {
        match self.components {
            1 => Some(wgpu::VertexFormat::Float32),
            2 => Some(wgpu::VertexFormat::Float32x2),
            3 => Some(wgpu::VertexFormat::Float32x3),
            4 => Some(wgpu::VertexFormat::Float32x4),
            _ => None,
        }
    }
}

/// How raw vertex buffer bytes are read as attributes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexLayout {
    /// Bytes between consecutive vertices.
    pub stride: u64,
    pub attributes: &'static [AttributeDesc],
}

impl VertexLayout {
    pub fn attribute(&self, location: u32) -> Option<&AttributeDesc> {
        self.attributes.iter().find(|a| a.location == location)
    }

    /// Attributes with an invalid component count are skipped; linking rejects them first.
    pub fn wgpu_attributes(&self) -> Vec<wgpu::VertexAttribute> {
        self.attributes
            .iter()
            .filter_map(|a| {
                Some(wgpu::VertexAttribute {
                    format: a.format()?,
                    offset: a.offset,
                    shader_location: a.location,
                })
            })
            .collect()
    }

    /// Buffer layout for slot 0; `attributes` comes from [`wgpu_attributes`](Self::wgpu_attributes).
    pub fn buffer_layout<'a>(
        &self,
        attributes: &'a [wgpu::VertexAttribute],
    ) -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }
}
