pub mod catalog;
pub mod enrich;
pub mod layout;
pub mod matcher;
pub mod phases;
pub mod settings;
pub mod store;
pub mod templates;

use serde::{Deserialize, Serialize};

// --- Types (matching the canvas JSON the frontend renders) ---

/// Coarse trust/location band a node lives in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Sources,
    Connectivity,
    Cloud,
    Consumers,
}

/// Pipeline-stage classification, inferred from a node's ID prefix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Layer {
    L1,
    L2,
    L3,
    L4,
    L5,
    L6,
    L7,
    L8,
    #[serde(rename = "P")]
    Pillar,
    #[serde(rename = "?")]
    Unknown,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::L1 => "L1",
            Layer::L2 => "L2",
            Layer::L3 => "L3",
            Layer::L4 => "L4",
            Layer::L5 => "L5",
            Layer::L6 => "L6",
            Layer::L7 => "L7",
            Layer::L8 => "L8",
            Layer::Pillar => "P",
            Layer::Unknown => "?",
        }
    }
}

/// Free-form operational annotations carried by catalog entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<String>,
}

impl NodeDetails {
    pub fn is_empty(&self) -> bool {
        self.notes.is_none() && self.cost.is_none() && self.compliance.is_none()
    }
}

/// A positioned node in a diagram. Coordinates are assigned by the layout
/// engine; everything else comes from the catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub zone: Zone,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<NodeDetails>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Data,
    Control,
    Observe,
    Alert,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Internal,
    Confidential,
}

/// Default-stamped security metadata on an edge. Cosmetic, not an analysis
/// result; see enrich.rs for the stamping rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSecurity {
    pub transport: String,
    pub auth: String,
    pub classification: Classification,
    pub private_network: bool,
}

/// A directed relationship between two node IDs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub label: String,
    /// Ordering step along the data flow. 0 = non-sequential/control-plane.
    #[serde(default)]
    pub step: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<EdgeSecurity>,
    #[serde(default)]
    pub crosses_boundary: bool,
    pub kind: EdgeKind,
}

/// A raw edge tuple as selected by an external generator, before
/// enrichment. Endpoints may reference nodes that were not kept.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RawEdge {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub step: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Descriptive annotation tied to a node or edge ID. Never affects layout
/// or matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Threat {
    pub target: String,
    pub severity: Severity,
    pub category: String,
    pub description: String,
    pub mitigation: String,
}

/// A named grouping of node IDs representing one pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: String,
    pub name: String,
    pub node_ids: Vec<String>,
}

/// The single cross-cutting grouping for pillar nodes that don't fit the
/// linear layer model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PillarGroup {
    pub name: String,
    pub node_ids: Vec<String>,
}

/// The aggregate root handed to the frontend and the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threats: Vec<Threat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phases: Vec<Phase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillars: Option<PillarGroup>,
}

/// Build a complete diagram from a kept-node selection and raw edge tuples:
/// position the kept nodes, enrich the surviving edges, derive groupings.
///
/// IDs not present in the catalog are dropped, as are edges referencing a
/// dropped endpoint, so the result always satisfies the diagram invariants
/// (unique node IDs, no dangling edge references).
pub fn assemble(
    title: &str,
    subtitle: Option<String>,
    kept: &[String],
    raw_edges: &[RawEdge],
) -> Diagram {
    let nodes = layout::position(kept);
    let edges = enrich::enrich(raw_edges, &nodes);
    let (phases, pillars) = phases::build(&nodes);
    Diagram {
        title: title.to_string(),
        subtitle,
        layout: None,
        nodes,
        edges,
        threats: Vec::new(),
        phases,
        pillars,
    }
}
