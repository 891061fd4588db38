//! Render graph descriptions.
//!
//! A [`RenderGraph`] is a static, declarative description of a frame's
//! rendering work: named pass instances, directed edges between their slots,
//! and the slots whose contents the host consumes. It carries no execution
//! semantics. Scheduling passes in dependency order, allocating the resources
//! that flow through the slots and running the passes are all the host
//! engine's job; this crate only guarantees the description is well formed.
//!
//! Graphs are assembled through [`RenderGraphBuilder`], which validates every
//! declaration against a [`PassTypeRegistry`](crate::registry::PassTypeRegistry)
//! as it is added:
//!
//! ```
//! use pathtracer_graph::{PassDeclaration, PassOptions, PassTypeRegistry, RenderGraphBuilder};
//!
//! let registry = PassTypeRegistry::with_builtin_types();
//! let mut builder = RenderGraphBuilder::new("AccumulateOnly", &registry);
//! builder.add_pass(PassDeclaration::new(
//!     "Accumulate",
//!     "AccumulatePass",
//!     PassOptions::new().with("enableAccumulation", true),
//! ))?;
//! builder.mark_output_ref("Accumulate.output")?;
//! let graph = builder.finish();
//! assert_eq!(graph.pass_count(), 1);
//! # Ok::<(), pathtracer_graph::GraphError>(())
//! ```

mod pass;

pub use pass::{Edge, PassDeclaration, SlotRef};

use log::debug;

use crate::error::{GraphError, SlotDirection};
use crate::registry::PassTypeRegistry;

/// A pass instance inside a graph.
///
/// Pairs the declaration with the slot sets resolved from its pass type at
/// the time the pass was added, so edge validation and later inspection need
/// no registry access.
#[derive(Debug, Clone, PartialEq)]
pub struct PassNode {
    declaration: PassDeclaration,
    inputs: Vec<String>,
    outputs: Vec<String>,
}

impl PassNode {
    /// The pass declaration.
    pub fn declaration(&self) -> &PassDeclaration {
        &self.declaration
    }

    /// Instance name of the pass.
    pub fn name(&self) -> &str {
        self.declaration.name()
    }

    /// Input slots declared by the pass type.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Output slots declared by the pass type.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Check whether the pass exposes the named input slot.
    pub fn has_input(&self, slot: &str) -> bool {
        self.inputs.iter().any(|s| s == slot)
    }

    /// Check whether the pass exposes the named output slot.
    pub fn has_output(&self, slot: &str) -> bool {
        self.outputs.iter().any(|s| s == slot)
    }
}

/// A finished render graph description.
///
/// Passes are stored in insertion order so the description serializes
/// deterministically. Two graphs built from the same declarations in the
/// same order compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderGraph {
    name: String,
    passes: Vec<PassNode>,
    edges: Vec<Edge>,
    outputs: Vec<SlotRef>,
}

impl RenderGraph {
    /// Name of the graph.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All passes, in insertion order.
    pub fn passes(&self) -> &[PassNode] {
        &self.passes
    }

    /// Number of passes in the graph.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Look up a pass by instance name.
    pub fn pass(&self, name: &str) -> Option<&PassNode> {
        self.passes.iter().find(|p| p.name() == name)
    }

    /// Check whether a pass with the given name exists.
    pub fn contains_pass(&self, name: &str) -> bool {
        self.pass(name).is_some()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether an edge connects the two slot references.
    pub fn has_edge(&self, source: &SlotRef, dest: &SlotRef) -> bool {
        self.edges
            .iter()
            .any(|e| e.source() == source && e.dest() == dest)
    }

    /// Edges arriving at the named pass.
    pub fn edges_into<'a>(&'a self, pass: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.dest().pass() == pass)
    }

    /// Edges leaving the named pass.
    pub fn edges_out_of<'a>(&'a self, pass: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source().pass() == pass)
    }

    /// The externally consumed output slots, in marking order.
    pub fn outputs(&self) -> &[SlotRef] {
        &self.outputs
    }
}

/// Builder for [`RenderGraph`] descriptions.
///
/// Borrows the pass type registry for the duration of the build so every
/// pass declaration and slot reference is checked eagerly. Edges must be
/// added after both endpoint passes; there are no forward references.
#[derive(Debug)]
pub struct RenderGraphBuilder<'a> {
    registry: &'a PassTypeRegistry,
    graph: RenderGraph,
}

impl<'a> RenderGraphBuilder<'a> {
    /// Start building a graph with the given name.
    pub fn new(name: &str, registry: &'a PassTypeRegistry) -> Self {
        Self {
            registry,
            graph: RenderGraph {
                name: name.to_string(),
                passes: Vec::new(),
                edges: Vec::new(),
                outputs: Vec::new(),
            },
        }
    }

    /// Add a pass to the graph.
    ///
    /// Fails with [`GraphError::DuplicatePass`] if the instance name is
    /// taken, or [`GraphError::UnknownPassType`] if the declaration's type
    /// id is not in the registry.
    pub fn add_pass(&mut self, declaration: PassDeclaration) -> Result<(), GraphError> {
        if self.graph.contains_pass(declaration.name()) {
            return Err(GraphError::DuplicatePass(declaration.name().to_string()));
        }
        let pass_type = self
            .registry
            .get(declaration.type_id())
            .ok_or_else(|| GraphError::UnknownPassType(declaration.type_id().to_string()))?;

        debug!(
            "graph '{}': add pass '{}' ({})",
            self.graph.name,
            declaration.name(),
            declaration.type_id()
        );
        self.graph.passes.push(PassNode {
            inputs: pass_type.inputs().to_vec(),
            outputs: pass_type.outputs().to_vec(),
            declaration,
        });
        Ok(())
    }

    /// Add a directed edge from an output slot to an input slot.
    ///
    /// Both endpoints must resolve against passes already in the graph.
    /// Adding the same edge twice is a no-op.
    pub fn add_edge(&mut self, source: SlotRef, dest: SlotRef) -> Result<(), GraphError> {
        self.resolve(&source, SlotDirection::Output)?;
        self.resolve(&dest, SlotDirection::Input)?;

        if !self.graph.has_edge(&source, &dest) {
            self.graph.edges.push(Edge::new(source, dest));
        }
        Ok(())
    }

    /// Add an edge from combined `"pass.slot"` reference strings.
    pub fn add_edge_refs(&mut self, source: &str, dest: &str) -> Result<(), GraphError> {
        self.add_edge(source.parse()?, dest.parse()?)
    }

    /// Mark an output slot as externally consumed.
    ///
    /// Repeated calls accumulate markers; marking the same slot twice is a
    /// no-op. The reference must resolve to a declared output slot.
    pub fn mark_output(&mut self, output: SlotRef) -> Result<(), GraphError> {
        self.resolve(&output, SlotDirection::Output)?;

        if !self.graph.outputs.contains(&output) {
            self.graph.outputs.push(output);
        }
        Ok(())
    }

    /// Mark an output from a combined `"pass.slot"` reference string.
    pub fn mark_output_ref(&mut self, output: &str) -> Result<(), GraphError> {
        self.mark_output(output.parse()?)
    }

    /// Finish the build and return the graph.
    pub fn finish(self) -> RenderGraph {
        debug!(
            "graph '{}': finished with {} passes, {} edges, {} outputs",
            self.graph.name,
            self.graph.pass_count(),
            self.graph.edge_count(),
            self.graph.outputs.len()
        );
        self.graph
    }

    /// Check a slot reference against the already-added passes.
    fn resolve(&self, slot_ref: &SlotRef, direction: SlotDirection) -> Result<(), GraphError> {
        let node = self
            .graph
            .pass(slot_ref.pass())
            .ok_or_else(|| GraphError::UnknownPass(slot_ref.pass().to_string()))?;

        let found = match direction {
            SlotDirection::Input => node.has_input(slot_ref.slot()),
            SlotDirection::Output => node.has_output(slot_ref.slot()),
        };
        if !found {
            return Err(GraphError::UnknownSlot {
                pass: slot_ref.pass().to_string(),
                slot: slot_ref.slot().to_string(),
                direction,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PassOptions;
    use crate::registry::PassType;

    fn test_registry() -> PassTypeRegistry {
        let mut registry = PassTypeRegistry::new();
        registry
            .register(PassType::new("Producer").with_output("out"))
            .unwrap();
        registry
            .register(PassType::new("Consumer").with_input("in").with_output("result"))
            .unwrap();
        registry
    }

    fn declare(name: &str, type_id: &str) -> PassDeclaration {
        PassDeclaration::new(name, type_id, PassOptions::new())
    }

    #[test]
    fn test_add_pass() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("a", "Producer")).unwrap();

        let graph = builder.finish();
        assert_eq!(graph.pass_count(), 1);
        assert!(graph.contains_pass("a"));
        assert_eq!(graph.pass("a").unwrap().outputs(), &["out".to_string()]);
    }

    #[test]
    fn test_add_pass_duplicate_name() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("a", "Producer")).unwrap();

        let err = builder.add_pass(declare("a", "Consumer")).unwrap_err();
        assert_eq!(err, GraphError::DuplicatePass("a".to_string()));
    }

    #[test]
    fn test_add_pass_unknown_type() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);

        let err = builder.add_pass(declare("a", "Missing")).unwrap_err();
        assert_eq!(err, GraphError::UnknownPassType("Missing".to_string()));
    }

    #[test]
    fn test_add_edge() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("a", "Producer")).unwrap();
        builder.add_pass(declare("b", "Consumer")).unwrap();
        builder.add_edge_refs("a.out", "b.in").unwrap();

        let graph = builder.finish();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(&SlotRef::new("a", "out"), &SlotRef::new("b", "in")));
    }

    #[test]
    fn test_add_edge_unknown_pass() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("a", "Producer")).unwrap();

        let err = builder.add_edge_refs("a.out", "b.in").unwrap_err();
        assert_eq!(err, GraphError::UnknownPass("b".to_string()));
    }

    #[test]
    fn test_add_edge_unknown_slot() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("a", "Producer")).unwrap();
        builder.add_pass(declare("b", "Consumer")).unwrap();

        // Source must be an output slot.
        let err = builder.add_edge_refs("a.missing", "b.in").unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownSlot {
                pass: "a".to_string(),
                slot: "missing".to_string(),
                direction: SlotDirection::Output,
            }
        );

        // Dest must be an input slot; "result" is an output of Consumer.
        let err = builder.add_edge_refs("a.out", "b.result").unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownSlot {
                pass: "b".to_string(),
                slot: "result".to_string(),
                direction: SlotDirection::Input,
            }
        );
    }

    #[test]
    fn test_add_edge_duplicate_ignored() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("a", "Producer")).unwrap();
        builder.add_pass(declare("b", "Consumer")).unwrap();
        builder.add_edge_refs("a.out", "b.in").unwrap();
        builder.add_edge_refs("a.out", "b.in").unwrap();

        assert_eq!(builder.finish().edge_count(), 1);
    }

    #[test]
    fn test_fan_out_from_one_output() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("a", "Producer")).unwrap();
        builder.add_pass(declare("b", "Consumer")).unwrap();
        builder.add_pass(declare("c", "Consumer")).unwrap();
        builder.add_edge_refs("a.out", "b.in").unwrap();
        builder.add_edge_refs("a.out", "c.in").unwrap();

        let graph = builder.finish();
        assert_eq!(graph.edges_out_of("a").count(), 2);
        assert_eq!(graph.edges_into("b").count(), 1);
    }

    #[test]
    fn test_mark_output() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("b", "Consumer")).unwrap();
        builder.mark_output_ref("b.result").unwrap();

        let graph = builder.finish();
        assert_eq!(graph.outputs(), &[SlotRef::new("b", "result")]);
    }

    #[test]
    fn test_mark_output_accumulates_and_dedups() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("a", "Producer")).unwrap();
        builder.add_pass(declare("b", "Consumer")).unwrap();
        builder.mark_output_ref("b.result").unwrap();
        builder.mark_output_ref("b.result").unwrap();
        builder.mark_output_ref("a.out").unwrap();

        let graph = builder.finish();
        assert_eq!(
            graph.outputs(),
            &[SlotRef::new("b", "result"), SlotRef::new("a", "out")]
        );
    }

    #[test]
    fn test_mark_output_requires_output_slot() {
        let registry = test_registry();
        let mut builder = RenderGraphBuilder::new("test", &registry);
        builder.add_pass(declare("b", "Consumer")).unwrap();

        let err = builder.mark_output_ref("b.in").unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownSlot {
                pass: "b".to_string(),
                slot: "in".to_string(),
                direction: SlotDirection::Output,
            }
        );
    }

    #[test]
    fn test_structural_equality() {
        let registry = test_registry();
        let build = || {
            let mut builder = RenderGraphBuilder::new("test", &registry);
            builder.add_pass(declare("a", "Producer")).unwrap();
            builder.add_pass(declare("b", "Consumer")).unwrap();
            builder.add_edge_refs("a.out", "b.in").unwrap();
            builder.mark_output_ref("b.result").unwrap();
            builder.finish()
        };
        assert_eq!(build(), build());
    }
}
