//! Declarative render graph descriptions for a path-traced rendering pipeline.
//!
//! This crate models render graph configurations: named pass instances with
//! configuration options, directed edges between their input/output slots,
//! and designated graph outputs. It ships the reference path tracer graph
//! (G-buffer generation, path-traced shading, temporal accumulation, tone
//! mapping) wired exactly as the engine's pass libraries expect.
//!
//! # Features
//! - Pass type registry with declared slot sets and default options
//! - Graph builder with eager validation of pass names and slot references
//! - Deterministic, structurally comparable graph descriptions
//! - Best-effort registration into an optional host session
//!
//! The graph is a static description. Pass execution, dependency-ordered
//! scheduling and GPU resource management are the host engine's job and are
//! out of scope here.
//!
//! # Example
//!
//! ```
//! use pathtracer_graph::{Session, load_path_tracer_graph};
//!
//! let session = Session::new();
//! let graph = load_path_tracer_graph(Some(&session)).unwrap();
//!
//! assert_eq!(graph.pass_count(), 4);
//! assert_eq!(graph.edge_count(), 11);
//! assert_eq!(session.graph_names(), vec!["PathTracerGraph".to_string()]);
//! ```

pub mod error;
pub mod graph;
pub mod options;
pub mod pipeline;
pub mod registry;
pub mod session;

pub use error::{GraphError, SlotDirection};
pub use graph::{Edge, PassDeclaration, PassNode, RenderGraph, RenderGraphBuilder, SlotRef};
pub use options::{CullMode, OptionValue, PassOptions, SamplePattern};
pub use pipeline::{build_path_tracer_graph, load_path_tracer_graph, PATH_TRACER_GRAPH_NAME};
pub use registry::{PassType, PassTypeRegistry};
pub use session::{register_graph, Session};
