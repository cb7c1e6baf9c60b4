//! Composition of classified nodes and aggregated edges into one
//! [`PolicyGraph`] per application.

use tracing::debug;

use crate::aggregate::edge_for_policy;
use crate::classify::classify_nodes;
use crate::graph::PolicyGraph;
use crate::model::Application;
use crate::protocols::ProtocolTable;

/// Build the graph model for one application.
///
/// Passing `Some(table)` enables port/protocol edge labels; `None` leaves
/// every edge unlabeled. Both node groups are always part of the result,
/// even when empty, and nodes are composed before edges.
pub fn build_graph(app: &Application, table: Option<&ProtocolTable>) -> PolicyGraph {
    let nodes = classify_nodes(app);
    let orientation = nodes.orientation();

    let edges = app
        .default_policies
        .iter()
        .map(|policy| edge_for_policy(policy, table))
        .collect::<Vec<_>>();

    debug!(
        application = %app.name,
        internal = nodes.internal_count(),
        external = nodes.external_count(),
        edges = edges.len(),
        rankdir = orientation.as_rankdir(),
        "graph built"
    );

    PolicyGraph {
        name: app.name.clone(),
        orientation,
        internal: nodes.internal,
        external: nodes.external,
        edges,
    }
}
