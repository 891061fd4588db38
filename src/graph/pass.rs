//! Pass declarations and slot references.

use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;
use crate::options::PassOptions;

/// Reference to a named slot on a named pass.
///
/// The wire form is the combined string `"pass.slot"`; [`SlotRef`] keeps the
/// two halves apart so lookups never re-parse:
///
/// ```
/// use pathtracer_graph::SlotRef;
///
/// let slot: SlotRef = "GBufferRT.posW".parse().unwrap();
/// assert_eq!(slot.pass(), "GBufferRT");
/// assert_eq!(slot.slot(), "posW");
/// assert_eq!(slot.to_string(), "GBufferRT.posW");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pass: String,
    slot: String,
}

impl SlotRef {
    /// Create a slot reference from its parts.
    pub fn new(pass: &str, slot: &str) -> Self {
        Self {
            pass: pass.to_string(),
            slot: slot.to_string(),
        }
    }

    /// Name of the referenced pass.
    pub fn pass(&self) -> &str {
        &self.pass
    }

    /// Name of the referenced slot.
    pub fn slot(&self) -> &str {
        &self.slot
    }
}

impl FromStr for SlotRef {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((pass, slot)) if !pass.is_empty() && !slot.is_empty() && !slot.contains('.') => {
                Ok(Self::new(pass, slot))
            }
            _ => Err(GraphError::InvalidSlotRef(s.to_string())),
        }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.pass, self.slot)
    }
}

/// Declaration of one pass instance in a graph.
///
/// Immutable once added to a graph: the name identifies the instance within
/// the graph, the type id resolves against the pass type registry, and the
/// options are handed verbatim to the engine when the pass is instantiated.
#[derive(Debug, Clone, PartialEq)]
pub struct PassDeclaration {
    name: String,
    type_id: String,
    options: PassOptions,
}

impl PassDeclaration {
    /// Create a pass declaration.
    pub fn new(name: &str, type_id: &str, options: PassOptions) -> Self {
        Self {
            name: name.to_string(),
            type_id: type_id.to_string(),
            options,
        }
    }

    /// Instance name, unique within the graph.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pass type id, resolved against the registry.
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Configuration options for this instance.
    pub fn options(&self) -> &PassOptions {
        &self.options
    }
}

/// A directed edge between an output slot and an input slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: SlotRef,
    dest: SlotRef,
}

impl Edge {
    pub(crate) fn new(source: SlotRef, dest: SlotRef) -> Self {
        Self { source, dest }
    }

    /// The producing side (an output slot).
    pub fn source(&self) -> &SlotRef {
        &self.source
    }

    /// The consuming side (an input slot).
    pub fn dest(&self) -> &SlotRef {
        &self.dest
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.dest)
    }
}
