use std::collections::BTreeMap;

use naga::common::wgsl::TryToWgsl;
use naga::{Binding, Handle, Module, Scalar, Type, TypeInner};

use crate::geometry::{AttributeDesc, VertexLayout};

use super::{compile_stage, CompiledStage, ShaderError, ShaderSources, Stage};

/// User-defined interface of one side of a stage boundary, keyed by `@location`.
type Interface = BTreeMap<u32, TypeInner>;

/// Vertex and fragment stages whose interfaces have been checked together.
#[derive(Debug)]
pub struct LinkedStages {
    pub vertex: CompiledStage,
    pub fragment: CompiledStage,
}

/// Compiles both stages and links them against `layout`.
///
/// Both stages are always compiled so that every diagnostic reaches the log;
/// the vertex error is returned when both fail.
pub fn build_stages(
    sources: &ShaderSources,
    layout: &VertexLayout,
) -> Result<LinkedStages, ShaderError> {
    let vertex = compile_stage(Stage::Vertex, &sources.vertex);
    let fragment = compile_stage(Stage::Fragment, &sources.fragment);

    let (vertex, fragment) = match (vertex, fragment) {
        (Ok(vs), Ok(fs)) => (vs, fs),
        (Err(vs_err), Err(fs_err)) => {
            log::error!("{fs_err}");
            return Err(vs_err);
        }
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => return Err(err),
    };

    link(vertex, fragment, layout)
}

/// Checks that the stage interfaces fit together:
/// - every layout attribute has a valid component count
/// - every vertex input is fed by an attribute of the same float width
/// - every fragment input is written by the vertex stage with the same type
/// - the fragment stage writes color output location 0
pub fn link(
    vertex: CompiledStage,
    fragment: CompiledStage,
    layout: &VertexLayout,
) -> Result<LinkedStages, ShaderError> {
    if vertex.stage() != Stage::Vertex || fragment.stage() != Stage::Fragment {
        return Err(ShaderError::link("stages attached in the wrong slots"));
    }

    let mut problems = Vec::new();

    for attr in layout.attributes {
        if attr.format().is_none() {
            problems.push(format!(
                "vertex attribute @location({}) has {} components, expected 1 to 4",
                attr.location, attr.components
            ));
        }
    }

    for (loc, ty) in inputs(&vertex) {
        match layout.attribute(loc) {
            None => problems.push(format!(
                "vertex input @location({loc}) has no matching vertex attribute"
            )),
            Some(attr) if attr.format().is_some() && !accepts_attribute(&ty, attr) => {
                problems.push(format!(
                    "vertex input @location({loc}) is {} but the attribute provides {}",
                    describe(&ty),
                    attribute_type(attr)
                ))
            }
            Some(_) => {}
        }
    }

    let written = outputs(&vertex);
    for (loc, ty) in inputs(&fragment) {
        match written.get(&loc) {
            None => problems.push(format!(
                "fragment input @location({loc}) is not written by the vertex stage"
            )),
            Some(out) if *out != ty => problems.push(format!(
                "fragment input @location({loc}) is {} but the vertex stage writes {}",
                describe(&ty),
                describe(out)
            )),
            Some(_) => {}
        }
    }

    if !outputs(&fragment).contains_key(&0) {
        problems.push("fragment stage does not write a color to @location(0)".to_string());
    }

    if !problems.is_empty() {
        return Err(ShaderError::link(problems.join("\n")));
    }

    log::debug!(
        "linked `{}` + `{}`",
        vertex.entry_point(),
        fragment.entry_point()
    );

    Ok(LinkedStages { vertex, fragment })
}

/// Attributes are always `f32` based; the shader must read exactly that many components.
fn accepts_attribute(ty: &TypeInner, attr: &AttributeDesc) -> bool {
    match ty {
        TypeInner::Scalar(scalar) => *scalar == Scalar::F32 && attr.components == 1,
        TypeInner::Vector { size, scalar } => {
            *scalar == Scalar::F32 && *size as u32 == attr.components
        }
        _ => false,
    }
}

fn attribute_type(attr: &AttributeDesc) -> String {
    match attr.components {
        1 => "f32".to_string(),
        n => format!("vec{n}<f32>"),
    }
}

fn describe(ty: &TypeInner) -> String {
    match ty {
        TypeInner::Scalar(scalar) => (*scalar).to_wgsl_for_diagnostics(),
        TypeInner::Vector { size, scalar } => {
            format!("vec{}<{}>", *size as u8, (*scalar).to_wgsl_for_diagnostics())
        }
        other => format!("{other:?}"),
    }
}

fn inputs(stage: &CompiledStage) -> Interface {
    let mut out = Interface::new();
    for arg in &stage.entry().function.arguments {
        collect_locations(stage.module(), arg.ty, arg.binding.as_ref(), &mut out);
    }
    out
}

fn outputs(stage: &CompiledStage) -> Interface {
    let mut out = Interface::new();
    if let Some(result) = &stage.entry().function.result {
        collect_locations(stage.module(), result.ty, result.binding.as_ref(), &mut out);
    }
    out
}

/// Entry point arguments and results carry either a binding of their own or,
/// for structs, one binding per member.
fn collect_locations(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut Interface,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            out.insert(*location, module.types[ty].inner.clone());
        }
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    if let Some(Binding::Location { location, .. }) = &member.binding {
                        out.insert(*location, module.types[member.ty].inner.clone());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vertex;

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

    const VS_STRUCT: &str = "
struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) tint: vec4<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VsOut {
    var out: VsOut;
    out.clip = vec4<f32>(position, 1.0);
    out.tint = vec4<f32>(1.0, 0.0, 0.0, 1.0);
    return out;
}
";

    const FS_TINT: &str = "
@fragment
fn fs_main(@location(0) tint: vec4<f32>) -> @location(0) vec4<f32> {
    return tint;
}
";

    fn sources(vertex: &'static str, fragment: &'static str) -> ShaderSources {
        ShaderSources::from_static(vertex, fragment)
    }

    // ── success ───────────────────────────────────────────────────────────

    #[test]
    fn position_only_program_links() {
        let linked = build_stages(&sources(VS, FS), &Vertex::LAYOUT).unwrap();
        assert_eq!(linked.vertex.entry_point(), "vs_main");
        assert_eq!(linked.fragment.entry_point(), "fs_main");
    }

    #[test]
    fn struct_outputs_satisfy_fragment_inputs() {
        assert!(build_stages(&sources(VS_STRUCT, FS_TINT), &Vertex::LAYOUT).is_ok());
    }

    // ── failure ───────────────────────────────────────────────────────────

    #[test]
    fn fragment_input_without_vertex_output_fails() {
        let err = build_stages(&sources(VS, FS_TINT), &Vertex::LAYOUT).unwrap_err();
        match err {
            ShaderError::Link { log } => assert!(log.as_str().contains("@location(0)")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn vertex_input_without_attribute_fails() {
        let vs = "
@vertex
fn vs_main(@location(0) p: vec3<f32>, @location(3) n: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(p + n, 1.0);
}
";
        let err = build_stages(&sources(vs, FS), &Vertex::LAYOUT).unwrap_err();
        assert!(err.log().as_str().contains("@location(3)"));
    }

    #[test]
    fn fragment_without_color_output_fails() {
        let fs = "
@fragment
fn fs_main() -> @location(1) vec4<f32> {
    return vec4<f32>(1.0);
}
";
        let err = build_stages(&sources(VS, fs), &Vertex::LAYOUT).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
    }

    #[test]
    fn compile_failure_is_reported_before_linking() {
        let err = build_stages(&sources(VS, "@fragment fn ("), &Vertex::LAYOUT).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { stage: Stage::Fragment, .. }));
    }

    #[test]
    fn both_stages_failing_reports_vertex_first() {
        let err = build_stages(&sources("nope", "nope"), &Vertex::LAYOUT).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { stage: Stage::Vertex, .. }));
    }

    #[test]
    fn mismatched_interface_types_fail_to_link() {
        let vs_vec2 = "
struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) tint: vec2<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VsOut {
    var out: VsOut;
    out.clip = vec4<f32>(position, 1.0);
    out.tint = vec2<f32>(1.0, 0.0);
    return out;
}
";
        let err = build_stages(&sources(vs_vec2, FS_TINT), &Vertex::LAYOUT).unwrap_err();
        match err {
            ShaderError::Link { log } => {
                assert!(log.as_str().contains("vec4<f32>"), "{log}");
                assert!(log.as_str().contains("vec2<f32>"), "{log}");
            }
            other => panic!("unexpected error: {other}"),
        }

        let vs_int = "
@vertex
fn vs_main(@location(0) position: vec3<i32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(vec3<f32>(position), 1.0);
}
";
        let err = build_stages(&sources(vs_int, FS), &Vertex::LAYOUT).unwrap_err();
        match err {
            ShaderError::Link { log } => assert!(log.as_str().contains("vec3<i32>"), "{log}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn vertex_input_narrower_than_attribute_fails() {
        let vs = "
@vertex
fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 0.0, 1.0);
}
";
        let err = build_stages(&sources(vs, FS), &Vertex::LAYOUT).unwrap_err();
        assert!(err.log().as_str().contains("vec3<f32>"));
    }

    #[test]
    fn invalid_attribute_component_count_fails() {
        const WIDE: VertexLayout = VertexLayout {
            stride: 12,
            attributes: &[AttributeDesc { location: 0, components: 5, offset: 0 }],
        };
        let err = build_stages(&sources(VS, FS), &WIDE).unwrap_err();
        assert!(err.log().as_str().contains("5 components"));
    }

    #[test]
    fn swapped_stages_do_not_link() {
        let vs = compile_stage(Stage::Vertex, VS).unwrap();
        let fs = compile_stage(Stage::Fragment, FS).unwrap();
        assert!(link(fs, vs, &Vertex::LAYOUT).is_err());
    }
}
