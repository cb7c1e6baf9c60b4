//! Node classification: partition an application's policy groups into
//! internal and external graph nodes.

use crate::graph::{GraphNode, NodeGroup, NodeKind, Orientation};
use crate::model::{Application, Cluster};

/// Classified nodes for one application, in input order per group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedNodes {
    pub internal: Vec<GraphNode>,
    pub external: Vec<GraphNode>,
}

impl ClassifiedNodes {
    pub fn internal_count(&self) -> usize {
        self.internal.len()
    }

    pub fn external_count(&self) -> usize {
        self.external.len()
    }

    /// Layout orientation derived from the final counts.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_counts(self.internal_count(), self.external_count())
    }
}

/// Label for a cluster node: the cluster name, then one member workload
/// name per line.
fn cluster_label(cluster: &Cluster) -> String {
    let mut label = format!("{}:", cluster.name);
    for workload in &cluster.nodes {
        label.push('\n');
        label.push_str(&workload.name);
    }
    label
}

/// Partition the application's policy groups into graph nodes.
///
/// Every cluster yields one internal node. An inventory filter is internal
/// iff its name equals the application scope name - that equality is the
/// sole discriminator. Node ids are taken from the source entities verbatim;
/// uniqueness is the data source's contract, not enforced here.
pub fn classify_nodes(app: &Application) -> ClassifiedNodes {
    let mut nodes = ClassifiedNodes::default();

    for cluster in &app.clusters {
        nodes.internal.push(GraphNode {
            id: cluster.id.clone(),
            label: cluster_label(cluster),
            group: NodeGroup::Internal,
            kind: NodeKind::Cluster,
        });
    }

    for filter in &app.inventory_filters {
        let group = if filter.name == app.app_scope.name {
            NodeGroup::Internal
        } else {
            NodeGroup::External
        };
        let node = GraphNode {
            id: filter.id.clone(),
            label: filter.name.clone(),
            group,
            kind: NodeKind::Filter,
        };
        match group {
            NodeGroup::Internal => nodes.internal.push(node),
            NodeGroup::External => nodes.external.push(node),
        }
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppScope, InventoryFilter, Workload};
    use pretty_assertions::assert_eq;

    fn app(
        clusters: Vec<Cluster>,
        filters: Vec<InventoryFilter>,
    ) -> Application {
        Application {
            name: "ERP".to_string(),
            app_scope: AppScope {
                name: "ERP".to_string(),
            },
            clusters,
            inventory_filters: filters,
            default_policies: Vec::new(),
        }
    }

    fn filter(id: &str, name: &str) -> InventoryFilter {
        InventoryFilter {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_filter_matching_scope_is_internal() {
        let nodes = classify_nodes(&app(vec![], vec![filter("f1", "ERP")]));
        assert_eq!(nodes.internal_count(), 1);
        assert_eq!(nodes.external_count(), 0);
        assert_eq!(nodes.internal[0].group, NodeGroup::Internal);
        assert_eq!(nodes.internal[0].kind, NodeKind::Filter);
    }

    #[test]
    fn test_filter_not_matching_scope_is_external() {
        let nodes = classify_nodes(&app(vec![], vec![filter("f1", "Shared Services")]));
        assert_eq!(nodes.internal_count(), 0);
        assert_eq!(nodes.external_count(), 1);
        assert_eq!(nodes.external[0].id, "f1");
        assert_eq!(nodes.external[0].label, "Shared Services");
    }

    #[test]
    fn test_clusters_are_always_internal() {
        let cluster = Cluster {
            id: "c1".to_string(),
            // Name deliberately unrelated to the scope name.
            name: "definitely-not-ERP".to_string(),
            nodes: vec![],
        };
        let nodes = classify_nodes(&app(vec![cluster], vec![]));
        assert_eq!(nodes.internal_count(), 1);
        assert_eq!(nodes.internal[0].kind, NodeKind::Cluster);
    }

    #[test]
    fn test_cluster_label_lists_members_one_per_line() {
        let cluster = Cluster {
            id: "c1".to_string(),
            name: "web".to_string(),
            nodes: vec![
                Workload {
                    name: "web-1".to_string(),
                },
                Workload {
                    name: "web-2".to_string(),
                },
            ],
        };
        let nodes = classify_nodes(&app(vec![cluster], vec![]));
        assert_eq!(nodes.internal[0].label, "web:\nweb-1\nweb-2");
    }

    #[test]
    fn test_cluster_without_members_keeps_bare_label() {
        let cluster = Cluster {
            id: "c1".to_string(),
            name: "db".to_string(),
            nodes: vec![],
        };
        let nodes = classify_nodes(&app(vec![cluster], vec![]));
        assert_eq!(nodes.internal[0].label, "db:");
    }

    #[test]
    fn test_orientation_follows_counts() {
        // Two external, one internal: left-to-right.
        let nodes = classify_nodes(&app(
            vec![],
            vec![
                filter("f1", "ERP"),
                filter("f2", "DNS"),
                filter("f3", "NTP"),
            ],
        ));
        assert_eq!(nodes.orientation(), Orientation::LeftToRight);

        // Tie: right-to-left.
        let nodes = classify_nodes(&app(
            vec![],
            vec![filter("f1", "ERP"), filter("f2", "DNS")],
        ));
        assert_eq!(nodes.orientation(), Orientation::RightToLeft);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let app = app(
            vec![Cluster {
                id: "c1".to_string(),
                name: "web".to_string(),
                nodes: vec![Workload {
                    name: "web-1".to_string(),
                }],
            }],
            vec![filter("f1", "ERP"), filter("f2", "DNS")],
        );

        let first = classify_nodes(&app);
        let second = classify_nodes(&app);
        assert_eq!(first, second);
        assert_eq!(first.orientation(), second.orientation());
    }
}
