use crate::coords::Viewport;
use crate::geometry::DrawCall;
use crate::input::{InputState, Key};
use crate::paint::Color;

use super::FramePlan;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    /// Terminal: once closing, no further frames are planned.
    Closing,
}

/// Per-window frame loop.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: LoopState,
    exit_key: Key,
    clear: Color,
    viewport: Viewport,
    draw: Option<DrawCall>,
    frames: u64,
}

impl FrameLoop {
    /// `draw` is `None` when there is nothing to draw (e.g. no shader program).
    pub fn new(clear: Color, draw: Option<DrawCall>, viewport: Viewport) -> Self {
        Self {
            state: LoopState::Running,
            exit_key: Key::Escape,
            clear,
            viewport,
            draw,
            frames: 0,
        }
    }

    pub fn with_exit_key(mut self, key: Key) -> Self {
        self.exit_key = key;
        self
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_closing(&self) -> bool {
        self.state == LoopState::Closing
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of frames planned so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Marks the loop as closing (window close button, fatal surface error).
    pub fn request_close(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("frame loop closing after {} frames", self.frames);
        }
        self.state = LoopState::Closing;
    }

    /// Records the new drawable size; the next plan uses it.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advances one iteration.
    ///
    /// Polls the exit key first; if it is held the loop closes in this same
    /// iteration and `None` is returned. A 0x0 viewport skips drawing but the
    /// loop keeps running.
    pub fn next_frame(&mut self, input: &InputState) -> Option<FramePlan> {
        if self.is_closing() {
            return None;
        }

        if input.is_down(self.exit_key) {
            self.request_close();
            return None;
        }

        self.frames = self.frames.wrapping_add(1);

        Some(FramePlan {
            clear: self.clear,
            viewport: self.viewport,
            draw: if self.viewport.is_empty() { None } else { self.draw },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState};

    const CLEAR: Color = Color::rgba(0.0, 0.9, 0.2, 1.0);

    fn running(draw: Option<DrawCall>) -> FrameLoop {
        FrameLoop::new(CLEAR, draw, Viewport::new(500, 200))
    }

    fn pressed(key: Key) -> InputState {
        let mut input = InputState::default();
        input.apply_event(InputEvent::Key { key, state: KeyState::Pressed, repeat: false });
        input
    }

    // ── transitions ───────────────────────────────────────────────────────

    #[test]
    fn starts_running() {
        assert_eq!(running(None).state(), LoopState::Running);
    }

    #[test]
    fn exit_key_closes_within_one_iteration() {
        let mut fl = running(Some(DrawCall::Arrays { vertex_count: 3 }));
        assert!(fl.next_frame(&InputState::default()).is_some());

        assert!(fl.next_frame(&pressed(Key::Escape)).is_none());
        assert_eq!(fl.state(), LoopState::Closing);
    }

    #[test]
    fn closing_is_terminal() {
        let mut fl = running(None);
        fl.request_close();
        assert!(fl.next_frame(&InputState::default()).is_none());
        assert!(fl.is_closing());
    }

    #[test]
    fn other_keys_do_not_close() {
        let mut fl = running(None);
        assert!(fl.next_frame(&pressed(Key::Space)).is_some());
        assert_eq!(fl.state(), LoopState::Running);
    }

    #[test]
    fn custom_exit_key() {
        let mut fl = running(None).with_exit_key(Key::Q);
        assert!(fl.next_frame(&pressed(Key::Escape)).is_some());
        assert!(fl.next_frame(&pressed(Key::Q)).is_none());
    }

    // ── plans ─────────────────────────────────────────────────────────────

    #[test]
    fn plan_carries_clear_color_and_single_draw() {
        let mut fl = running(Some(DrawCall::Indexed { index_count: 6 }));
        let plan = fl.next_frame(&InputState::default()).unwrap();
        assert_eq!(plan.clear, CLEAR);
        assert_eq!(plan.draw, Some(DrawCall::Indexed { index_count: 6 }));
        assert_eq!(fl.frames(), 1);
    }

    #[test]
    fn no_program_still_clears() {
        let mut fl = running(None);
        let plan = fl.next_frame(&InputState::default()).unwrap();
        assert_eq!(plan.clear, CLEAR);
        assert!(plan.draw.is_none());
    }

    #[test]
    fn resize_applies_before_next_clear() {
        let mut fl = running(Some(DrawCall::Arrays { vertex_count: 3 }));
        fl.next_frame(&InputState::default());

        fl.resize(Viewport::new(800, 600));
        let plan = fl.next_frame(&InputState::default()).unwrap();
        assert_eq!(plan.viewport, Viewport::new(800, 600));
    }

    #[test]
    fn empty_viewport_skips_draw_but_keeps_running() {
        let mut fl = running(Some(DrawCall::Arrays { vertex_count: 3 }));
        fl.resize(Viewport::new(0, 0));
        let plan = fl.next_frame(&InputState::default()).unwrap();
        assert!(plan.draw.is_none());
        assert_eq!(fl.state(), LoopState::Running);
    }
}
