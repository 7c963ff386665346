use wgpu::util::DeviceExt;

/// Owned GPU buffer with guaranteed release.
///
/// `Drop` destroys the buffer's memory immediately instead of waiting for the
/// last internal reference to go away.
pub struct GpuBuffer {
    raw: wgpu::Buffer,
    label: String,
}

impl GpuBuffer {
    /// Creates a buffer initialized with `contents`.
    pub fn init(
        device: &wgpu::Device,
        label: String,
        contents: &[u8],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let raw = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&label),
            contents,
            usage,
        });
        log::debug!("uploaded {label} ({} bytes)", contents.len());

        Self { raw, label }
    }

    #[inline]
    pub fn raw(&self) -> &wgpu::Buffer {
        &self.raw
    }
}

impl Drop for GpuBuffer {
    fn drop(&mut self) {
        self.raw.destroy();
        log::trace!("released {}", self.label);
    }
}
