//! Hand-authored template catalog: canned diagrams for prompts that
//! closely match a known architecture pattern, keyed by matcher tags.
//!
//! Declaration order is the matcher's tie-break: a template declared
//! earlier wins an exact score tie, so reordering this list changes
//! matching behavior.

use std::sync::LazyLock;

use crate::{assemble, Diagram, RawEdge, Severity, Threat};

/// A named, tagged wrapper around a complete diagram.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub diagram: Diagram,
}

pub fn all() -> &'static [Template] {
    &TEMPLATES
}

fn threat(
    target: &str,
    severity: Severity,
    category: &str,
    description: &str,
    mitigation: &str,
) -> Threat {
    Threat {
        target: target.to_string(),
        severity,
        category: category.to_string(),
        description: description.to_string(),
        mitigation: mitigation.to_string(),
    }
}

/// Assemble a template diagram from a keep-set and edge tuples through
/// the same pipeline the generated path uses, so template output stays
/// visually consistent with generated output.
fn build(
    id: &'static str,
    name: &'static str,
    tags: &'static [&'static str],
    title: &str,
    keep: &[&str],
    edges: &[(&str, &str, &str, u32)],
    threats: Vec<Threat>,
) -> Template {
    let kept: Vec<String> = keep.iter().map(|s| s.to_string()).collect();
    let raw: Vec<RawEdge> = edges
        .iter()
        .map(|(from, to, label, step)| RawEdge {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
            step: *step,
        })
        .collect();
    let mut diagram = assemble(title, None, &kept, &raw);
    diagram.subtitle = Some(format!(
        "{} products · {} connections",
        diagram.nodes.len(),
        diagram.edges.len()
    ));
    diagram.threats = threats;
    Template { id, name, tags, diagram }
}

static TEMPLATES: LazyLock<Vec<Template>> = LazyLock::new(|| {
    vec![
        build(
            "streaming_analytics",
            "Real-Time Streaming Analytics",
            &["kafka", "streaming", "real-time", "bigquery", "event", "pub/sub", "iot"],
            "Kafka → BigQuery Streaming Platform",
            &[
                "src_kafka", "conn_iam", "conn_secret_manager", "conn_vpc",
                "ing_pubsub", "ing_dataflow", "lake_bq_staging", "proc_dataflow",
                "bronze", "silver", "gold", "serve_looker", "serve_bi_engine",
                "con_looker", "con_powerbi",
                "pillar_sec", "pillar_gov", "pillar_obs", "pillar_orch",
            ],
            &[
                ("src_kafka", "ing_pubsub", "subscribe", 1),
                ("ing_pubsub", "ing_dataflow", "events", 2),
                ("ing_dataflow", "lake_bq_staging", "stream load", 3),
                ("lake_bq_staging", "proc_dataflow", "process", 4),
                ("proc_dataflow", "bronze", "ingest", 5),
                ("bronze", "silver", "quality gate", 6),
                ("silver", "gold", "quality gate", 7),
                ("gold", "serve_looker", "governed BI", 8),
                ("gold", "serve_bi_engine", "BI Engine", 9),
                ("serve_looker", "con_looker", "dashboards", 10),
                ("gold", "con_powerbi", "DirectQuery", 11),
                ("pillar_orch", "ing_dataflow", "trigger", 0),
                ("pillar_sec", "conn_iam", "policy", 0),
                ("pillar_gov", "gold", "catalog", 0),
                ("ing_dataflow", "pillar_obs", "metrics", 0),
                ("pillar_obs", "con_looker", "alerts", 0),
            ],
            vec![
                threat(
                    "src_kafka",
                    Severity::High,
                    "spoofing",
                    "Unauthenticated producers can publish forged events into the stream.",
                    "Require SASL/OAUTHBEARER on every producer and pin broker certificates.",
                ),
                threat(
                    "e1",
                    Severity::Medium,
                    "information disclosure",
                    "Events leave the source network before any masking step runs.",
                    "Pseudonymize payloads at the producer and run DLP inspection before Silver.",
                ),
                threat(
                    "gold",
                    Severity::Medium,
                    "elevation of privilege",
                    "Broad read grants on curated data expose aggregates to every BI user.",
                    "Scope dataset access with authorized views and row-level policies.",
                ),
            ],
        ),
        build(
            "customer_360",
            "Customer 360 Warehouse",
            &["salesforce", "crm", "customer 360", "hubspot", "marketing", "warehouse"],
            "Salesforce → BigQuery Customer 360",
            &[
                "src_salesforce", "src_workday", "conn_armor", "conn_apigee",
                "conn_iam", "conn_secret_manager", "ing_functions", "ing_fivetran",
                "lake_gcs", "lake_bq_staging", "proc_bq_sql", "proc_dlp",
                "bronze", "silver", "gold", "serve_looker",
                "con_looker", "con_sheets",
                "pillar_sec", "pillar_gov", "pillar_obs", "pillar_orch",
            ],
            &[
                ("src_salesforce", "conn_armor", "REST API", 1),
                ("src_workday", "conn_armor", "RaaS", 1),
                ("src_salesforce", "ing_fivetran", "managed ELT", 1),
                ("conn_armor", "ing_functions", "filtered", 2),
                ("ing_functions", "lake_gcs", "raw files", 3),
                ("ing_fivetran", "lake_bq_staging", "sync", 3),
                ("lake_gcs", "proc_bq_sql", "ELT", 4),
                ("lake_bq_staging", "proc_bq_sql", "SQL transform", 4),
                ("proc_bq_sql", "bronze", "transform", 5),
                ("bronze", "silver", "clean", 6),
                ("proc_dlp", "silver", "mask", 6),
                ("silver", "gold", "curate", 7),
                ("gold", "serve_looker", "governed BI", 8),
                ("serve_looker", "con_looker", "dashboards", 9),
                ("gold", "con_sheets", "connected sheets", 9),
                ("proc_bq_sql", "proc_dlp", "PII scan", 0),
                ("pillar_orch", "proc_bq_sql", "trigger", 0),
                ("pillar_gov", "silver", "lineage", 0),
                ("proc_bq_sql", "pillar_obs", "logs", 0),
                ("pillar_sec", "conn_iam", "policy", 0),
            ],
            vec![
                threat(
                    "src_salesforce",
                    Severity::High,
                    "information disclosure",
                    "CRM extracts carry PII for every contact and lead.",
                    "Route extracts through DLP inspection before Silver and tag PII columns in the catalog.",
                ),
                threat(
                    "conn_armor",
                    Severity::Medium,
                    "denial of service",
                    "The API pull path is reachable from the public internet.",
                    "Keep Cloud Armor rate limiting in front of the ingestion functions.",
                ),
            ],
        ),
        build(
            "database_cdc",
            "Database CDC Replication",
            &["oracle", "sql server", "postgres", "cdc", "change data capture", "replication", "on-prem"],
            "On-Prem Databases → BigQuery via CDC",
            &[
                "src_oracle", "src_sqlserver", "src_postgresql",
                "conn_vpn", "conn_vpc", "conn_iam", "conn_secret_manager",
                "ing_datastream", "lake_gcs", "proc_bq_sql",
                "bronze", "silver", "gold", "serve_looker", "serve_run",
                "con_looker", "con_run",
                "pillar_sec", "pillar_gov", "pillar_obs", "pillar_orch",
            ],
            &[
                ("src_oracle", "conn_vpn", "LogMiner CDC", 1),
                ("src_sqlserver", "conn_vpn", "change tracking", 1),
                ("src_postgresql", "conn_vpn", "WAL CDC", 1),
                ("conn_vpn", "ing_datastream", "tunnel", 2),
                ("ing_datastream", "lake_gcs", "raw files", 3),
                ("lake_gcs", "proc_bq_sql", "ELT", 4),
                ("proc_bq_sql", "bronze", "transform", 5),
                ("bronze", "silver", "clean", 6),
                ("silver", "gold", "curate", 7),
                ("gold", "serve_looker", "governed BI", 8),
                ("gold", "serve_run", "serving API", 8),
                ("serve_looker", "con_looker", "dashboards", 9),
                ("serve_run", "con_run", "REST API", 9),
                ("pillar_orch", "ing_datastream", "schedule", 0),
                ("ing_datastream", "pillar_obs", "metrics", 0),
                ("pillar_sec", "conn_iam", "policy", 0),
                ("pillar_gov", "bronze", "quality", 0),
            ],
            vec![
                threat(
                    "conn_vpn",
                    Severity::High,
                    "tampering",
                    "A compromised tunnel endpoint can replay or alter change records in flight.",
                    "Rotate IPsec pre-shared keys from Secret Manager and alert on tunnel renegotiation.",
                ),
                threat(
                    "ing_datastream",
                    Severity::Medium,
                    "repudiation",
                    "CDC gaps are silent when source redo logs age out.",
                    "Monitor stream freshness and alert when replication lag exceeds log retention.",
                ),
            ],
        ),
    ]
});
