use winit::dpi::PhysicalSize;

/// Rendering viewport in physical pixels, anchored at the top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A minimized window reports 0x0; nothing can be rasterized into it.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Arguments for `RenderPass::set_viewport` as `(x, y, w, h, min_depth, max_depth)`.
    #[inline]
    pub fn to_pass_args(self) -> (f32, f32, f32, f32, f32, f32) {
        (0.0, 0.0, self.width as f32, self.height as f32, 0.0, 1.0)
    }
}

impl From<PhysicalSize<u32>> for Viewport {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_physical_size() {
        let vp = Viewport::from(PhysicalSize::new(500, 200));
        assert_eq!(vp, Viewport::new(500, 200));
    }

    #[test]
    fn zero_dimension_is_empty() {
        assert!(Viewport::new(0, 200).is_empty());
        assert!(Viewport::new(500, 0).is_empty());
        assert!(!Viewport::new(1, 1).is_empty());
    }

    #[test]
    fn pass_args_cover_full_target() {
        assert_eq!(
            Viewport::new(800, 600).to_pass_args(),
            (0.0, 0.0, 800.0, 600.0, 0.0, 1.0)
        );
    }
}
