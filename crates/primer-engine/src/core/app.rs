use anyhow::Result;
use winit::dpi::PhysicalSize;

use super::ctx::{FrameCtx, StartCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by `window::Runtime`.
///
/// Call order: `on_start` once after the window and GPU exist, then
/// `on_resize`/`on_frame` as events arrive, then `on_exit` exactly once
/// before the GPU context is dropped.
pub trait App {
    /// Creates GPU resources. An error here is fatal.
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called after the surface was reconfigured for a new size.
    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        let _ = size;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Releases GPU resources while the device is still alive.
    fn on_exit(&mut self) {}
}
