//! Rule aggregation: fold a rule's layer-4 parameters into one compact
//! protocol/port edge label.

use indexmap::IndexMap;

use crate::graph::GraphEdge;
use crate::model::{L4Param, Policy};
use crate::protocols::ProtocolTable;

/// Port token for one parameter: `"80"` for a single port, `"20-21"` for a
/// range, nothing when the parameter covers all ports.
fn port_token(param: &L4Param) -> Option<String> {
    let [low, high] = param.port?;
    if low == high {
        Some(low.to_string())
    } else {
        Some(format!("{low}-{high}"))
    }
}

/// Aggregate a rule's parameters into a label, or `None` when nothing
/// accumulated.
///
/// Tokens are grouped per protocol key (table keyword, or the `PROTO-<n>`
/// fallback) in order of first appearance, appended in encounter order. An
/// all-ports parameter resets its key's token list to empty: the keyword
/// then renders alone, standing for every port. The accumulation map is
/// fresh per rule.
pub fn aggregate_label(l4_params: &[L4Param], table: &ProtocolTable) -> Option<String> {
    let mut by_proto: IndexMap<String, Vec<String>> = IndexMap::new();

    for param in l4_params {
        let key = table.key_for(param.proto);
        match port_token(param) {
            Some(token) => by_proto.entry(key).or_default().push(token),
            // insert keeps the key's original position when it already exists
            None => {
                by_proto.insert(key, Vec::new());
            }
        }
    }

    if by_proto.is_empty() {
        return None;
    }

    let fragments: Vec<String> = by_proto
        .iter()
        .map(|(key, tokens)| {
            if tokens.is_empty() {
                key.clone()
            } else {
                format!("{}={}", key, tokens.join(", "))
            }
        })
        .collect();

    Some(fragments.join("; "))
}

/// Build the edge for a policy. The edge itself is unconditional; the label
/// exists only when aggregation is enabled (`table` present) and produced at
/// least one protocol key.
pub fn edge_for_policy(policy: &Policy, table: Option<&ProtocolTable>) -> GraphEdge {
    GraphEdge {
        from: policy.consumer_filter_id.clone(),
        to: policy.provider_filter_id.clone(),
        label: table.and_then(|table| aggregate_label(&policy.l4_params, table)),
    }
}
