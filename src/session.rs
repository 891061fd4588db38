//! Host session and best-effort graph registration.
//!
//! The host application owns a [`Session`] holding the graphs available for
//! execution or display. Configuration code that assembles a graph may run
//! with no session around (for example when only the description is wanted),
//! so registration goes through [`register_graph`], which takes the session
//! as an optional handle and silently skips the side effect when there is
//! none.

use std::collections::HashMap;

use log::debug;
use parking_lot::Mutex;

use crate::graph::RenderGraph;

/// Registry of finished render graphs, keyed by graph name.
///
/// Internally synchronized; hosts can share a `Session` across threads
/// behind an `Arc`.
#[derive(Debug, Default)]
pub struct Session {
    graphs: Mutex<HashMap<String, RenderGraph>>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a graph under its own name.
    ///
    /// Replaces and returns any previously registered graph with the same
    /// name.
    pub fn add_graph(&self, graph: RenderGraph) -> Option<RenderGraph> {
        debug!("session: registering graph '{}'", graph.name());
        self.graphs.lock().insert(graph.name().to_string(), graph)
    }

    /// Look up a registered graph by name.
    pub fn graph(&self, name: &str) -> Option<RenderGraph> {
        self.graphs.lock().get(name).cloned()
    }

    /// Names of all registered graphs, sorted.
    pub fn graph_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.graphs.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered graphs.
    pub fn graph_count(&self) -> usize {
        self.graphs.lock().len()
    }
}

/// Register a graph with a session, if one exists.
///
/// Returns `true` if the graph was registered. With `None` the call is a
/// no-op: no error, nothing registered.
pub fn register_graph(session: Option<&Session>, graph: RenderGraph) -> bool {
    match session {
        Some(session) => {
            session.add_graph(graph);
            true
        }
        None => {
            debug!(
                "no active session, skipping registration of graph '{}'",
                graph.name()
            );
            false
        }
    }
}
