//! Input policy model.
//!
//! These records mirror the application-details shape handed over by the
//! policy source (a remote API export or a local JSON file); the engine is
//! agnostic to where they came from. Required fields are required at
//! deserialization time - a record missing `id`, `name`, or `proto` fails to
//! deserialize, which is how upstream-data defects surface. Optional
//! collections default to empty instead of erroring.

use serde::Deserialize;

/// An application: the policy-segmentation unit under diagramming.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Application {
    pub name: String,
    pub app_scope: AppScope,
    #[serde(default)]
    pub clusters: Vec<Cluster>,
    #[serde(default)]
    pub inventory_filters: Vec<InventoryFilter>,
    #[serde(default)]
    pub default_policies: Vec<Policy>,
}

/// The scope an application owns. Inventory filters whose name matches the
/// scope name are internal to the application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppScope {
    pub name: String,
}

/// A workload cluster. Always internal to its application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<Workload>,
}

/// A member workload of a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Workload {
    pub name: String,
}

/// A named policy group, internal or external depending on scope-name match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryFilter {
    pub id: String,
    pub name: String,
}

/// A directed allow-rule between two policy groups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Policy {
    pub consumer_filter_id: String,
    pub provider_filter_id: String,
    #[serde(default)]
    pub l4_params: Vec<L4Param>,
}

/// A layer-4 restriction on a rule. `port` is `[low, high]`; when absent the
/// rule matches all ports for that protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct L4Param {
    pub proto: i64,
    #[serde(default)]
    pub port: Option<[u16; 2]>,
}
