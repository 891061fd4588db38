//! The path tracer graph configuration.
//!
//! This module assembles the reference path tracing graph:
//!
//! 1. `GBufferRT` - Ray traces primary hits into per-channel geometry buffers
//! 2. `MegakernelPathTracer` - Path traces shading from the G-buffer channels
//! 3. `AccumulatePass` - Temporal accumulation of the noisy color
//! 4. `ToneMappingPass` - Maps the accumulated HDR image to displayable range
//!
//! The wiring is a fixed contract with the engine's pass libraries: 4 passes,
//! 11 edges, and the tone mapper's `dst` slot as the graph output.

use crate::error::GraphError;
use crate::graph::{PassDeclaration, RenderGraph, RenderGraphBuilder};
use crate::options::{CullMode, PassOptions, SamplePattern};
use crate::registry::PassTypeRegistry;
use crate::session::{register_graph, Session};

/// Name the path tracer graph is registered under.
pub const PATH_TRACER_GRAPH_NAME: &str = "PathTracerGraph";

/// The G-buffer channel to path tracer input connections, source slot first.
const GBUFFER_CHANNEL_EDGES: [(&str, &str); 9] = [
    ("posW", "posW"),
    ("normW", "normalW"),
    ("bitangentW", "bitangentW"),
    ("faceNormalW", "faceNormalW"),
    ("viewW", "viewW"),
    ("diffuseOpacity", "mtlDiffOpacity"),
    ("specRough", "mtlSpecRough"),
    ("emissive", "mtlEmissive"),
    ("matlExtra", "mtlParams"),
];

/// Build the path tracer render graph.
///
/// The registry must contain the `GBufferRT`, `MegakernelPathTracer`,
/// `AccumulatePass` and `ToneMapper` pass types (see
/// [`PassTypeRegistry::with_builtin_types`]).
pub fn build_path_tracer_graph(registry: &PassTypeRegistry) -> Result<RenderGraph, GraphError> {
    let mut builder = RenderGraphBuilder::new(PATH_TRACER_GRAPH_NAME, registry);

    builder.add_pass(PassDeclaration::new(
        "AccumulatePass",
        "AccumulatePass",
        PassOptions::new().with("enableAccumulation", true),
    ))?;
    builder.add_pass(PassDeclaration::new(
        "ToneMappingPass",
        "ToneMapper",
        PassOptions::new()
            .with("autoExposure", false)
            .with("exposureValue", 0.0),
    ))?;
    builder.add_pass(PassDeclaration::new(
        "GBufferRT",
        "GBufferRT",
        PassOptions::new()
            .with("forceCullMode", false)
            .with("cull", CullMode::Back)
            .with("samplePattern", SamplePattern::Stratified)
            .with("sampleCount", 16),
    ))?;
    builder.add_pass(PassDeclaration::new(
        "MegakernelPathTracer",
        "MegakernelPathTracer",
        PassOptions::new()
            .with("useVBuffer", false)
            .with("useAnalyticLights", false),
    ))?;

    for (source_slot, dest_slot) in GBUFFER_CHANNEL_EDGES {
        builder.add_edge_refs(
            &format!("GBufferRT.{source_slot}"),
            &format!("MegakernelPathTracer.{dest_slot}"),
        )?;
    }
    builder.add_edge_refs("MegakernelPathTracer.color", "AccumulatePass.input")?;
    builder.add_edge_refs("AccumulatePass.output", "ToneMappingPass.src")?;

    builder.mark_output_ref("ToneMappingPass.dst")?;

    Ok(builder.finish())
}

/// Build the path tracer graph and register it with the session, if any.
///
/// Mirrors the load-time flow of a graph configuration script: the graph is
/// always built and returned; registration is a best-effort side effect.
pub fn load_path_tracer_graph(session: Option<&Session>) -> Result<RenderGraph, GraphError> {
    let registry = PassTypeRegistry::with_builtin_types();
    let graph = build_path_tracer_graph(&registry)?;
    register_graph(session, graph.clone());
    Ok(graph)
}
