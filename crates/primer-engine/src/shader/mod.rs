//! Shader program builder.
//!
//! Two WGSL stage sources are compiled independently, their interfaces are
//! linked against each other and against the vertex layout, and the result
//! becomes one render pipeline (`ShaderProgram`).
//!
//! Compilation and linking run through naga without a device, so every
//! diagnostic is available before any GPU object is created.

mod compile;
mod error;
mod info_log;
mod link;
mod policy;
mod program;
mod source;

pub use compile::{compile_stage, CompiledStage, Stage};
pub use error::ShaderError;
pub use info_log::{InfoLog, INFO_LOG_CAPACITY};
pub use link::{build_stages, link, LinkedStages};
pub use policy::ShaderFailurePolicy;
pub use program::ShaderProgram;
pub use source::{ShaderSources, ShadingConfig};
