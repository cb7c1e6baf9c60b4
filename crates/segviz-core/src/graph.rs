//! Output graph model.
//!
//! One [`PolicyGraph`] is built per application and consumed immediately by
//! the renderer; nothing is shared across applications.

/// Whether a node belongs to the application's own scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeGroup {
    /// Part of the application scope ("Application Policy Groups").
    Internal,
    /// Outside the application scope ("External Policy Groups").
    External,
}

/// The source entity a node was derived from. Drives node styling: the
/// renderer colors workload clusters and inventory filters differently
/// regardless of their group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Cluster,
    Filter,
}

/// Layout direction hint for the rendered graph.
///
/// Chosen from relative node counts: more external than internal nodes
/// selects left-to-right, otherwise (ties included) right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    LeftToRight,
    #[default]
    RightToLeft,
}

impl Orientation {
    /// Pick the orientation from classified node counts.
    pub fn from_counts(internal: usize, external: usize) -> Self {
        if external > internal {
            Orientation::LeftToRight
        } else {
            Orientation::RightToLeft
        }
    }

    /// The DOT `rankdir` value for this orientation.
    pub fn as_rankdir(&self) -> &'static str {
        match self {
            Orientation::LeftToRight => "LR",
            Orientation::RightToLeft => "RL",
        }
    }
}

/// One graph node per cluster or inventory filter. The id comes from the
/// source entity and is not deduplicated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub group: NodeGroup,
    pub kind: NodeKind,
}

/// A directed edge from consumer to provider. `label` is `None` when port
/// aggregation is disabled or produced nothing; the renderer must not emit
/// an empty label attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

/// The graph model for one application: two node groups (both always
/// present, possibly empty), the layout orientation, and one edge per rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyGraph {
    pub name: String,
    pub orientation: Orientation,
    pub internal: Vec<GraphNode>,
    pub external: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl PolicyGraph {
    pub fn node_count(&self) -> usize {
        self.internal.len() + self.external.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
