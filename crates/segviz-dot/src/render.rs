//! Rendering of a [`PolicyGraph`] to DOT text.

use tracing::debug;

use segviz_core::{GraphNode, NodeKind, PolicyGraph};

use crate::dot::DotBuilder;

/// Node fill color follows the source entity kind, not the group: workload
/// clusters and inventory filters stay visually distinct even when a filter
/// lands in the internal group.
fn fill_color(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Cluster => "royalblue4",
        NodeKind::Filter => "orange2",
    }
}

fn write_node(dot: &mut DotBuilder, node: &GraphNode) {
    dot.node(
        &node.id,
        &[
            ("label", node.label.as_str()),
            ("shape", "rectangle"),
            ("style", "filled"),
            ("fontcolor", "white"),
            ("fillcolor", fill_color(node.kind)),
        ],
    );
}

/// Render one application's policy graph to DOT.
///
/// Both policy-group clusters are always emitted, even when empty, and all
/// nodes are emitted before any edge. An edge gets a `label` attribute only
/// when it carries one.
pub fn render_graph(graph: &PolicyGraph) -> String {
    let mut dot = DotBuilder::new(&graph.name);
    dot.attr("label", &format!("Application Name: {}", graph.name));
    dot.attr("rankdir", graph.orientation.as_rankdir());
    dot.blank();

    dot.start_cluster("clusters", "Application Policy Groups");
    dot.attr("rank", "same");
    for node in &graph.internal {
        write_node(&mut dot, node);
    }
    dot.end_cluster();

    dot.start_cluster("filters", "External Policy Groups");
    dot.attr("rank", "same");
    for node in &graph.external {
        write_node(&mut dot, node);
    }
    dot.end_cluster();

    for edge in &graph.edges {
        match &edge.label {
            Some(label) => dot.edge_with_attrs(&edge.from, &edge.to, &[("label", label)]),
            None => dot.edge(&edge.from, &edge.to),
        };
    }

    debug!(
        application = %graph.name,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "rendered DOT"
    );

    dot.build()
}
