use std::borrow::Cow;

use super::ShaderFailurePolicy;

/// The two WGSL stage sources of a program.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl ShaderSources {
    pub const fn from_static(vertex: &'static str, fragment: &'static str) -> Self {
        Self {
            vertex: Cow::Borrowed(vertex),
            fragment: Cow::Borrowed(fragment),
        }
    }
}

/// Everything the builder needs to produce a program.
#[derive(Debug, Clone)]
pub struct ShadingConfig {
    pub sources: ShaderSources,
    pub failure_policy: ShaderFailurePolicy,
}

impl ShadingConfig {
    pub const fn new(sources: ShaderSources) -> Self {
        Self {
            sources,
            failure_policy: ShaderFailurePolicy::Degraded,
        }
    }

    pub const fn with_failure_policy(mut self, policy: ShaderFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
