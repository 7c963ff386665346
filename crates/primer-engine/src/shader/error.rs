use std::fmt::Write;

use thiserror::Error;

use super::{InfoLog, Stage};

/// Errors produced while building a shader program.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// A stage failed to parse or validate.
    #[error("{stage} shader compilation failed:\n{log}")]
    Compile {
        /// The stage that failed.
        stage: Stage,
        /// Compiler diagnostic, bounded.
        log: InfoLog,
    },

    /// The stages compiled but their interfaces do not fit together.
    #[error("shader program linking failed:\n{log}")]
    Link {
        /// Linker diagnostic, bounded.
        log: InfoLog,
    },

    /// The device rejected the stage modules or the render pipeline.
    #[error("render pipeline creation failed:\n{log}")]
    Pipeline {
        /// Device validation message with its causes, bounded.
        log: InfoLog,
    },
}

impl ShaderError {
    pub(crate) fn compile(stage: Stage, log: impl Into<String>) -> Self {
        Self::Compile { stage, log: InfoLog::new(log) }
    }

    pub(crate) fn link(log: impl Into<String>) -> Self {
        Self::Link { log: InfoLog::new(log) }
    }

    /// Flattens `err` and its source chain into one diagnostic.
    pub(crate) fn pipeline(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut text = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = write!(text, "\ncaused by: {cause}");
            source = cause.source();
        }
        Self::Pipeline { log: InfoLog::new(text) }
    }

    /// Returns the diagnostic text.
    pub fn log(&self) -> &InfoLog {
        match self {
            Self::Compile { log, .. } | Self::Link { log } | Self::Pipeline { log } => log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_stage() {
        let err = ShaderError::compile(Stage::Fragment, "unexpected token");
        let msg = err.to_string();
        assert!(msg.starts_with("fragment shader compilation failed"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn link_error_log_is_bounded() {
        let err = ShaderError::link("x".repeat(4096));
        assert_eq!(err.log().as_str().len(), crate::shader::INFO_LOG_CAPACITY);
    }

    #[derive(Debug, Error)]
    #[error("invalid render pipeline")]
    struct Rejected(#[source] std::io::Error);

    #[test]
    fn pipeline_error_keeps_the_cause_chain() {
        let cause = std::io::Error::other("vertex attribute format mismatch");
        let err = ShaderError::pipeline(&Rejected(cause));
        let msg = err.to_string();
        assert!(msg.starts_with("render pipeline creation failed"));
        assert!(msg.contains("invalid render pipeline"));
        assert!(msg.contains("caused by: vertex attribute format mismatch"));
    }

    #[test]
    fn pipeline_error_log_is_bounded() {
        let err = ShaderError::pipeline(&std::io::Error::other("y".repeat(2048)));
        assert_eq!(err.log().as_str().len(), crate::shader::INFO_LOG_CAPACITY);
    }
}
