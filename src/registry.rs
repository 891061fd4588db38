//! Pass type registry.
//!
//! A pass type describes an opaque unit of GPU work as the host engine exposes
//! it: a type id, the named input and output slots through which resources
//! flow, and the default configuration options. The registry is the boundary
//! to the engine's pass libraries; the graph builder validates every slot
//! reference against the declared slot sets registered here.

use std::collections::HashMap;

use crate::error::GraphError;
use crate::options::{CullMode, OptionValue, PassOptions, SamplePattern};

/// Description of a render pass type.
///
/// Built with chained `with_*` calls:
///
/// ```
/// use pathtracer_graph::PassType;
///
/// let blit = PassType::new("Blit")
///     .with_input("src")
///     .with_output("dst");
/// assert!(blit.has_input("src"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PassType {
    type_id: String,
    inputs: Vec<String>,
    outputs: Vec<String>,
    defaults: PassOptions,
}

impl PassType {
    /// Create a pass type with no slots and no default options.
    pub fn new(type_id: &str) -> Self {
        Self {
            type_id: type_id.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            defaults: PassOptions::new(),
        }
    }

    /// Declare an input slot.
    pub fn with_input(mut self, slot: &str) -> Self {
        self.inputs.push(slot.to_string());
        self
    }

    /// Declare an output slot.
    pub fn with_output(mut self, slot: &str) -> Self {
        self.outputs.push(slot.to_string());
        self
    }

    /// Set a default option value.
    pub fn with_default(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.defaults.set(name, value);
        self
    }

    /// The registry key for this type.
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Declared input slots, in declaration order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Declared output slots, in declaration order.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Default option values for passes of this type.
    pub fn defaults(&self) -> &PassOptions {
        &self.defaults
    }

    /// Check whether the type declares the named input slot.
    pub fn has_input(&self, slot: &str) -> bool {
        self.inputs.iter().any(|s| s == slot)
    }

    /// Check whether the type declares the named output slot.
    pub fn has_output(&self, slot: &str) -> bool {
        self.outputs.iter().any(|s| s == slot)
    }
}

/// Registry of pass types, keyed by type id.
#[derive(Debug, Clone, Default)]
pub struct PassTypeRegistry {
    types: HashMap<String, PassType>,
}

impl PassTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with the built-in path tracing pass types.
    ///
    /// Equivalent to loading the engine's `GBuffer`, `MegakernelPathTracer`,
    /// `AccumulatePass` and `ToneMapper` pass libraries.
    pub fn with_builtin_types() -> Self {
        let mut registry = Self::new();
        for pass_type in builtin_types() {
            // Builtin type ids are distinct, insertion cannot collide.
            registry.types.insert(pass_type.type_id().to_string(), pass_type);
        }
        registry
    }

    /// Register a pass type.
    ///
    /// Fails with [`GraphError::DuplicatePassType`] if a type with the same
    /// id is already registered.
    pub fn register(&mut self, pass_type: PassType) -> Result<(), GraphError> {
        if self.types.contains_key(pass_type.type_id()) {
            return Err(GraphError::DuplicatePassType(pass_type.type_id().to_string()));
        }
        self.types.insert(pass_type.type_id().to_string(), pass_type);
        Ok(())
    }

    /// Look up a pass type by id.
    pub fn get(&self, type_id: &str) -> Option<&PassType> {
        self.types.get(type_id)
    }

    /// Check whether a type id is registered.
    pub fn contains(&self, type_id: &str) -> bool {
        self.types.contains_key(type_id)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// The pass types used by the path tracer graph.
///
/// Slot sets mirror the engine's pass reflection data: the geometry buffer
/// pass exposes one output channel per G-buffer attribute, the path tracer
/// consumes those channels and produces a noisy color image, and the
/// accumulate/tone map passes are simple one-in one-out image filters.
fn builtin_types() -> Vec<PassType> {
    vec![
        PassType::new("GBufferRT")
            .with_output("posW")
            .with_output("normW")
            .with_output("bitangentW")
            .with_output("faceNormalW")
            .with_output("viewW")
            .with_output("diffuseOpacity")
            .with_output("specRough")
            .with_output("emissive")
            .with_output("matlExtra")
            .with_output("depth")
            .with_output("mvec")
            .with_default("forceCullMode", false)
            .with_default("cull", CullMode::Back)
            .with_default("samplePattern", SamplePattern::Stratified)
            .with_default("sampleCount", 16),
        PassType::new("MegakernelPathTracer")
            .with_input("posW")
            .with_input("normalW")
            .with_input("bitangentW")
            .with_input("faceNormalW")
            .with_input("viewW")
            .with_input("mtlDiffOpacity")
            .with_input("mtlSpecRough")
            .with_input("mtlEmissive")
            .with_input("mtlParams")
            .with_output("color")
            .with_output("albedo")
            .with_default("useVBuffer", false)
            .with_default("useAnalyticLights", false),
        PassType::new("AccumulatePass")
            .with_input("input")
            .with_output("output")
            .with_default("enableAccumulation", true),
        PassType::new("ToneMapper")
            .with_input("src")
            .with_output("dst")
            .with_default("autoExposure", false)
            .with_default("exposureValue", 0.0),
    ]
}
