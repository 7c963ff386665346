use std::fmt;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::ShaderError;

/// Pipeline stage a source is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub(crate) fn naga_stage(self) -> naga::ShaderStage {
        match self {
            Stage::Vertex => naga::ShaderStage::Vertex,
            Stage::Fragment => naga::ShaderStage::Fragment,
        }
    }

    fn attribute(self) -> &'static str {
        match self {
            Stage::Vertex => "@vertex",
            Stage::Fragment => "@fragment",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        })
    }
}

/// A parsed and validated stage.
///
/// Holds the naga IR so the linker can inspect the entry point interface.
#[derive(Debug)]
pub struct CompiledStage {
    stage: Stage,
    module: naga::Module,
    entry_point: usize,
}

impl CompiledStage {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn module(&self) -> &naga::Module {
        &self.module
    }

    pub(crate) fn entry(&self) -> &naga::EntryPoint {
        &self.module.entry_points[self.entry_point]
    }

    /// Name of the stage's entry point function.
    pub fn entry_point(&self) -> &str {
        &self.entry().name
    }
}

/// Compiles one WGSL stage: parse, validate, and locate its entry point.
///
/// Any failure yields `ShaderError::Compile` carrying the bounded diagnostic.
pub fn compile_stage(stage: Stage, source: &str) -> Result<CompiledStage, ShaderError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| ShaderError::compile(stage, e.emit_to_string(source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| ShaderError::compile(stage, e.emit_to_string(source)))?;

    let entry_point = module
        .entry_points
        .iter()
        .position(|ep| ep.stage == stage.naga_stage())
        .ok_or_else(|| {
            ShaderError::compile(stage, format!("no {} entry point in source", stage.attribute()))
        })?;

    log::debug!(
        "{stage} stage compiled (entry point `{}`)",
        module.entry_points[entry_point].name
    );

    Ok(CompiledStage {
        stage,
        module,
        entry_point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = "
@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 1.0);
}
";

    const FS: &str = "
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(0.1, 0.3, 0.9, 1.0);
}
";

    // ── success ───────────────────────────────────────────────────────────

    #[test]
    fn valid_vertex_stage_compiles() {
        let vs = compile_stage(Stage::Vertex, VS).unwrap();
        assert_eq!(vs.stage(), Stage::Vertex);
        assert_eq!(vs.entry_point(), "vs_main");
    }

    #[test]
    fn valid_fragment_stage_compiles() {
        let fs = compile_stage(Stage::Fragment, FS).unwrap();
        assert_eq!(fs.entry_point(), "fs_main");
    }

    // ── failure ───────────────────────────────────────────────────────────

    #[test]
    fn syntax_error_produces_compile_log() {
        let err = compile_stage(Stage::Vertex, "@vertex fn vs_main( -> {").unwrap_err();
        match err {
            ShaderError::Compile { stage, log } => {
                assert_eq!(stage, Stage::Vertex);
                assert!(!log.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn type_error_produces_compile_log() {
        let src = "
@vertex
fn vs_main(@location(0) p: vec3<f32>) -> @builtin(position) vec4<f32> {
    return p;
}
";
        let err = compile_stage(Stage::Vertex, src).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { stage: Stage::Vertex, .. }));
    }

    #[test]
    fn missing_entry_point_for_stage() {
        // Valid WGSL, but it only has a fragment entry point.
        let err = compile_stage(Stage::Vertex, FS).unwrap_err();
        assert!(err.log().as_str().contains("@vertex"));
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::Vertex.to_string(), "vertex");
        assert_eq!(Stage::Fragment.to_string(), "fragment");
    }
}
