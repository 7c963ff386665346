//! Frame loop state machine.
//!
//! Decides, once per iteration, whether the loop keeps running and what the
//! frame contains. It owns no GPU objects; `core::FrameCtx` executes the plan.

mod plan;
mod state;

pub use plan::FramePlan;
pub use state::{FrameLoop, LoopState};
