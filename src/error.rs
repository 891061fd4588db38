//! Graph construction error types.

use thiserror::Error;

/// Which side of a pass a slot reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotDirection {
    /// An input slot (resource consumed by the pass).
    Input,
    /// An output slot (resource produced by the pass).
    Output,
}

impl std::fmt::Display for SlotDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Errors that can occur while describing a render graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A pass with the same name was already added to the graph.
    #[error("pass '{0}' already exists in the graph")]
    DuplicatePass(String),

    /// A pass type with the same type id was already registered.
    #[error("pass type '{0}' is already registered")]
    DuplicatePassType(String),

    /// The referenced pass type is not present in the registry.
    #[error("unknown pass type '{0}'")]
    UnknownPassType(String),

    /// An edge or output marker references a pass not in the graph.
    #[error("unknown pass '{0}'")]
    UnknownPass(String),

    /// The referenced pass exists but does not declare the named slot.
    #[error("pass '{pass}' has no {direction} slot '{slot}'")]
    UnknownSlot {
        /// Name of the pass the reference resolved to.
        pass: String,
        /// The slot name that failed to resolve.
        slot: String,
        /// Whether an input or an output slot was expected.
        direction: SlotDirection,
    },

    /// A combined slot reference string did not parse as `"pass.slot"`.
    #[error("invalid slot reference '{0}', expected 'pass.slot'")]
    InvalidSlotRef(String),
}
