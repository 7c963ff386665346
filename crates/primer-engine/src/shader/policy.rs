use super::ShaderError;

/// What happens when the program cannot be built.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShaderFailurePolicy {
    /// Log the diagnostic and keep running without a program.
    ///
    /// Frames are still cleared; nothing is drawn.
    #[default]
    Degraded,

    /// Propagate the error; startup fails.
    Fatal,
}

impl ShaderFailurePolicy {
    /// Resolves a build result under this policy.
    pub fn apply<T>(self, result: Result<T, ShaderError>) -> Result<Option<T>, ShaderError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => match self {
                Self::Degraded => {
                    log::error!("{err}");
                    log::warn!("no shader program; frames will be cleared without drawing");
                    Ok(None)
                }
                Self::Fatal => Err(err),
            },
        }
    }
}
