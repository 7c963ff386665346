use crate::coords::Viewport;
use crate::geometry::DrawCall;
use crate::paint::Color;

/// Everything one frame does: clear, set the viewport, and at most one draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FramePlan {
    pub clear: Color,
    pub viewport: Viewport,
    pub draw: Option<DrawCall>,
}
