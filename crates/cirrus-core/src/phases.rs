//! Derive display groupings from a positioned node set: one phase per
//! populated pipeline layer, plus a single crosscutting group for the
//! pillar nodes. Unknown-layer nodes are skipped.

use crate::catalog;
use crate::{Layer, Node, Phase, PillarGroup};

const PHASE_NAMES: &[(Layer, &str, &str)] = &[
    (Layer::L1, "l1", "Layer 1: Sources"),
    (Layer::L2, "l2", "Layer 2: Connectivity & Access"),
    (Layer::L3, "l3", "Layer 3: Ingestion"),
    (Layer::L4, "l4", "Layer 4: Data Lake"),
    (Layer::L5, "l5", "Layer 5: Processing"),
    (Layer::L6, "l6", "Layer 6: Medallion"),
    (Layer::L7, "l7", "Layer 7: Serving & Delivery"),
    (Layer::L8, "l8", "Layer 8: Consumers"),
];

pub const PILLAR_GROUP_NAME: &str = "Crosscutting Pillars";

fn ids_in_layer(nodes: &[Node], layer: Layer) -> Vec<String> {
    nodes
        .iter()
        .filter(|n| catalog::infer_layer(&n.id) == layer)
        .map(|n| n.id.clone())
        .collect()
}

pub fn build(nodes: &[Node]) -> (Vec<Phase>, Option<PillarGroup>) {
    let mut phases = Vec::new();
    for (layer, id, name) in PHASE_NAMES {
        let node_ids = ids_in_layer(nodes, *layer);
        if !node_ids.is_empty() {
            phases.push(Phase { id: id.to_string(), name: name.to_string(), node_ids });
        }
    }

    let pillar_ids = ids_in_layer(nodes, Layer::Pillar);
    let pillars = (!pillar_ids.is_empty()).then(|| PillarGroup {
        name: PILLAR_GROUP_NAME.to_string(),
        node_ids: pillar_ids,
    });

    (phases, pillars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        layout::position(&ids.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn only_populated_layers_become_phases() {
        let nodes = nodes(&["src_kafka", "ing_pubsub", "gold"]);
        let (phases, _) = build(&nodes);
        let ids: Vec<&str> = phases.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["l1", "l3", "l6"]);
    }

    #[test]
    fn phases_are_emitted_in_layer_order() {
        let nodes = nodes(&["con_looker", "src_oracle", "bronze", "conn_vpn"]);
        let (phases, _) = build(&nodes);
        let ids: Vec<&str> = phases.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["l1", "l2", "l6", "l8"]);
    }

    #[test]
    fn pillars_group_separately_and_never_phase() {
        let nodes = nodes(&["src_oracle", "pillar_sec", "pillar_obs"]);
        let (phases, pillars) = build(&nodes);
        assert_eq!(phases.len(), 1);
        let group = pillars.unwrap();
        assert_eq!(group.name, PILLAR_GROUP_NAME);
        assert_eq!(group.node_ids, ["pillar_sec", "pillar_obs"]);
    }

    #[test]
    fn no_pillars_means_no_group() {
        let nodes = nodes(&["src_oracle"]);
        let (_, pillars) = build(&nodes);
        assert!(pillars.is_none());
    }
}
