//! Edge enrichment: filter raw edge tuples against the positioned node
//! set, then stamp each survivor with trust-boundary and security
//! metadata.
//!
//! The security defaults are cosmetic placeholders chosen to keep
//! generated diagrams consistent with hand-authored ones. They are not a
//! security analysis of any real deployment.

use std::collections::HashMap;

use crate::catalog;
use crate::{Classification, Edge, EdgeKind, EdgeSecurity, Layer, Node, RawEdge, Zone};

const PUBLIC_TRANSPORT: &str = "TLS 1.3";
const PUBLIC_AUTH: &str = "OAuth 2.0";
const PRIVATE_TRANSPORT: &str = "VPC internal";
const PRIVATE_AUTH: &str = "IAM service identity";

fn public_defaults() -> EdgeSecurity {
    EdgeSecurity {
        transport: PUBLIC_TRANSPORT.to_string(),
        auth: PUBLIC_AUTH.to_string(),
        classification: Classification::Confidential,
        private_network: false,
    }
}

fn private_defaults() -> EdgeSecurity {
    EdgeSecurity {
        transport: PRIVATE_TRANSPORT.to_string(),
        auth: PRIVATE_AUTH.to_string(),
        classification: Classification::Internal,
        private_network: true,
    }
}

fn classify(from: &str, to: &str, step: u32, to_zone: Zone) -> EdgeKind {
    // Alerts fan out from the observability pillar to people/systems.
    if from == "pillar_obs" && to_zone == Zone::Consumers {
        return EdgeKind::Alert;
    }
    if from == "pillar_obs" || to == "pillar_obs" {
        return EdgeKind::Observe;
    }
    if catalog::infer_layer(from) == Layer::Pillar || catalog::infer_layer(to) == Layer::Pillar {
        return EdgeKind::Control;
    }
    if step == 0 {
        return EdgeKind::Control;
    }
    EdgeKind::Data
}

/// Turn raw (from, to, label, step) tuples into full edges. Tuples whose
/// endpoints are missing from `nodes` are dropped: expected noise from an
/// imperfect external generator, not an error.
pub fn enrich(raw: &[RawEdge], nodes: &[Node]) -> Vec<Edge> {
    let zones: HashMap<&str, Zone> = nodes.iter().map(|n| (n.id.as_str(), n.zone)).collect();

    let mut edges = Vec::with_capacity(raw.len());
    for tuple in raw {
        let (Some(&from_zone), Some(&to_zone)) =
            (zones.get(tuple.from.as_str()), zones.get(tuple.to.as_str()))
        else {
            tracing::debug!(from = %tuple.from, to = %tuple.to, "dropping dangling edge");
            continue;
        };

        let crosses_boundary = from_zone != to_zone;
        let security = if crosses_boundary {
            Some(public_defaults())
        } else if from_zone == Zone::Cloud {
            Some(private_defaults())
        } else {
            None
        };

        edges.push(Edge {
            id: format!("e{}", edges.len() + 1),
            from: tuple.from.clone(),
            to: tuple.to.clone(),
            label: tuple.label.clone(),
            step: tuple.step,
            security,
            crosses_boundary,
            kind: classify(&tuple.from, &tuple.to, tuple.step, to_zone),
        });
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        layout::position(&ids.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    fn raw(from: &str, to: &str, step: u32) -> RawEdge {
        RawEdge { from: from.into(), to: to.into(), label: "flow".into(), step }
    }

    #[test]
    fn dangling_tuples_are_dropped() {
        let nodes = nodes(&["src_kafka", "ing_pubsub"]);
        let tuples = vec![
            raw("src_kafka", "ing_pubsub", 1),
            raw("src_kafka", "nowhere", 2),
            raw("nowhere", "ing_pubsub", 3),
        ];
        let edges = enrich(&tuples, &nodes);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].id, "e1");
    }

    #[test]
    fn zone_crossing_edges_get_public_defaults() {
        let nodes = nodes(&["src_kafka", "ing_pubsub"]);
        let edges = enrich(&[raw("src_kafka", "ing_pubsub", 1)], &nodes);
        let e = &edges[0];
        assert!(e.crosses_boundary);
        let sec = e.security.as_ref().unwrap();
        assert_eq!(sec.transport, "TLS 1.3");
        assert_eq!(sec.auth, "OAuth 2.0");
        assert_eq!(sec.classification, Classification::Confidential);
        assert!(!sec.private_network);
    }

    #[test]
    fn cloud_internal_edges_are_private() {
        let nodes = nodes(&["bronze", "silver"]);
        let edges = enrich(&[raw("bronze", "silver", 1)], &nodes);
        let e = &edges[0];
        assert!(!e.crosses_boundary);
        let sec = e.security.as_ref().unwrap();
        assert_eq!(sec.classification, Classification::Internal);
        assert!(sec.private_network);
    }

    #[test]
    fn same_zone_outside_cloud_gets_no_stamp() {
        let nodes = nodes(&["src_oracle", "src_kafka"]);
        let edges = enrich(&[raw("src_oracle", "src_kafka", 1)], &nodes);
        assert!(!edges[0].crosses_boundary);
        assert!(edges[0].security.is_none());
    }

    #[test]
    fn kind_classification() {
        let nodes = nodes(&["src_kafka", "ing_pubsub", "pillar_orch", "pillar_obs", "con_looker"]);

        let data = enrich(&[raw("src_kafka", "ing_pubsub", 1)], &nodes);
        assert_eq!(data[0].kind, EdgeKind::Data);

        let control = enrich(&[raw("pillar_orch", "ing_pubsub", 0)], &nodes);
        assert_eq!(control[0].kind, EdgeKind::Control);

        let observe = enrich(&[raw("ing_pubsub", "pillar_obs", 0)], &nodes);
        assert_eq!(observe[0].kind, EdgeKind::Observe);

        let alert = enrich(&[raw("pillar_obs", "con_looker", 0)], &nodes);
        assert_eq!(alert[0].kind, EdgeKind::Alert);

        let step_zero = enrich(&[raw("src_kafka", "ing_pubsub", 0)], &nodes);
        assert_eq!(step_zero[0].kind, EdgeKind::Control);
    }

    #[test]
    fn valid_plus_invalid_tuples_yield_exactly_the_valid_count() {
        let nodes = nodes(&["src_kafka", "ing_pubsub", "bronze", "silver"]);
        let mut tuples = vec![
            raw("src_kafka", "ing_pubsub", 1),
            raw("ing_pubsub", "bronze", 2),
            raw("bronze", "silver", 3),
        ];
        for i in 0..5 {
            tuples.push(raw("ghost", &format!("phantom_{i}"), 9));
        }
        assert_eq!(enrich(&tuples, &nodes).len(), 3);
    }
}
