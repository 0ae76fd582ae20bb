//! End-to-end assembly and persistence checks over a realistic keep-set.

use cirrus_core::store::DiagramStore;
use cirrus_core::{assemble, phases, Layer, RawEdge, Zone};

fn keep(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn raw(from: &str, to: &str, label: &str, step: u32) -> RawEdge {
    RawEdge { from: from.into(), to: to.into(), label: label.into(), step }
}

fn cdc_keep_set() -> Vec<String> {
    keep(&[
        "src_oracle",
        "src_postgresql",
        "conn_vpn",
        "conn_iam",
        "ing_datastream",
        "lake_gcs",
        "proc_bq_sql",
        "bronze",
        "silver",
        "gold",
        "serve_looker",
        "con_looker",
        "pillar_sec",
        "pillar_obs",
    ])
}

fn cdc_edges() -> Vec<RawEdge> {
    vec![
        raw("src_oracle", "conn_vpn", "CDC", 1),
        raw("src_postgresql", "conn_vpn", "CDC", 1),
        raw("conn_vpn", "ing_datastream", "tunnel", 2),
        raw("ing_datastream", "lake_gcs", "raw files", 3),
        raw("lake_gcs", "proc_bq_sql", "ELT", 4),
        raw("proc_bq_sql", "bronze", "transform", 5),
        raw("bronze", "silver", "clean", 6),
        raw("silver", "gold", "curate", 7),
        raw("gold", "serve_looker", "governed BI", 8),
        raw("serve_looker", "con_looker", "dashboards", 9),
        raw("ing_datastream", "pillar_obs", "metrics", 0),
        raw("hallucinated_node", "gold", "???", 5),
    ]
}

#[test]
fn assembled_diagram_holds_structural_invariants() {
    let diagram = assemble("CDC Pipeline", None, &cdc_keep_set(), &cdc_edges());

    assert_eq!(diagram.nodes.len(), 14);
    // The hallucinated tuple is dropped; the eleven real ones survive.
    assert_eq!(diagram.edges.len(), 11);

    let mut ids: Vec<&str> = diagram.nodes.iter().map(|n| n.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), diagram.nodes.len(), "node ids must be unique");

    for e in &diagram.edges {
        assert!(ids.binary_search(&e.from.as_str()).is_ok());
        assert!(ids.binary_search(&e.to.as_str()).is_ok());
    }

    for (i, a) in diagram.nodes.iter().enumerate() {
        for b in &diagram.nodes[i + 1..] {
            assert!(a.x != b.x || a.y != b.y, "{} and {} overlap", a.id, b.id);
        }
    }
}

#[test]
fn boundary_and_phase_semantics() {
    let diagram = assemble("CDC Pipeline", None, &cdc_keep_set(), &cdc_edges());

    let edge = |from: &str, to: &str| {
        diagram
            .edges
            .iter()
            .find(|e| e.from == from && e.to == to)
            .unwrap()
    };

    // Sources -> connectivity crosses a trust boundary and gets stamped.
    let ingress = edge("src_oracle", "conn_vpn");
    assert!(ingress.crosses_boundary);
    assert!(ingress.security.as_ref().unwrap().transport == "TLS 1.3");

    // Medallion hops stay inside the cloud zone on the private network.
    let medallion = edge("bronze", "silver");
    assert!(!medallion.crosses_boundary);
    assert!(medallion.security.as_ref().unwrap().private_network);

    // Phases cover every populated pipeline layer and skip pillars.
    let phase_ids: Vec<&str> = diagram.phases.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(phase_ids, ["l1", "l2", "l3", "l4", "l5", "l6", "l7", "l8"]);
    for p in &diagram.phases {
        for id in &p.node_ids {
            assert_ne!(cirrus_core::catalog::infer_layer(id), Layer::Pillar);
        }
    }

    let pillars = diagram.pillars.as_ref().unwrap();
    assert_eq!(pillars.name, phases::PILLAR_GROUP_NAME);
    assert_eq!(pillars.node_ids, ["pillar_sec", "pillar_obs"]);

    // Pillars render between serving and consumers.
    let x = |id: &str| diagram.nodes.iter().find(|n| n.id == id).unwrap().x;
    assert!(x("serve_looker") < x("pillar_sec"));
    assert!(x("pillar_sec") < x("con_looker"));
}

#[test]
fn consumers_sit_in_their_own_zone() {
    let diagram = assemble("CDC Pipeline", None, &cdc_keep_set(), &cdc_edges());
    let consumer = diagram.nodes.iter().find(|n| n.id == "con_looker").unwrap();
    assert_eq!(consumer.zone, Zone::Consumers);
    let serving = diagram.nodes.iter().find(|n| n.id == "serve_looker").unwrap();
    assert_eq!(serving.zone, Zone::Cloud);
}

#[test]
fn records_survive_a_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = DiagramStore::new(dir.path());

    let diagram = assemble("CDC Pipeline", None, &cdc_keep_set(), &cdc_edges());
    let saved = store.save("local", "replicate oracle to bigquery", &diagram).unwrap();

    let listed = store.list("local").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, saved.id);

    let loaded = store.load("local", &saved.id).unwrap();
    assert_eq!(loaded.diagram, diagram);
}
