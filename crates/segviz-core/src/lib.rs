//! # segviz-core
//!
//! Transformation engine turning a segmentation-policy model into a graph
//! representation suitable for rendering.
//!
//! The pipeline per application:
//! 1. Classify policy groups (workload clusters, inventory filters) as
//!    internal or external to the application scope ([`classify`]).
//! 2. Aggregate each allow-rule's layer-4 parameters into a compact
//!    protocol/port edge label ([`aggregate`]).
//! 3. Compose nodes and edges into one [`PolicyGraph`] with a layout
//!    orientation derived from the node counts ([`graph_builder`]).
//!
//! All inputs are read-only for a pass; every pass builds fresh node and
//! edge collections, so applications can be processed independently.

pub mod aggregate;
pub mod classify;
pub mod graph;
pub mod graph_builder;
pub mod model;
pub mod protocols;

pub use aggregate::{aggregate_label, edge_for_policy};
pub use classify::{ClassifiedNodes, classify_nodes};
pub use graph::{GraphEdge, GraphNode, NodeGroup, NodeKind, Orientation, PolicyGraph};
pub use graph_builder::build_graph;
pub use model::{AppScope, Application, Cluster, InventoryFilter, L4Param, Policy, Workload};
pub use protocols::{ProtocolEntry, ProtocolTable};
pub use segviz_error::{Error, ErrorKind, ErrorStatus, Result};
