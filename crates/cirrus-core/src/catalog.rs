//! Static product catalog: every cloud service or external entity a
//! diagram can reference, plus the prefix table that maps node IDs to
//! pipeline layers. Loaded into the binary and never mutated, so it is
//! safe for unlimited concurrent readers.

use crate::{Layer, Node, NodeDetails, Zone};

/// One product in the catalog. Positions come later, from the layout
/// engine; a catalog entry is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogNode {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub subtitle: &'static str,
    pub zone: Zone,
    pub notes: &'static str,
    pub cost: &'static str,
    pub compliance: &'static str,
}

impl CatalogNode {
    pub fn layer(&self) -> Layer {
        infer_layer(self.id)
    }

    pub fn details(&self) -> Option<NodeDetails> {
        let opt = |s: &'static str| (!s.is_empty()).then(|| s.to_string());
        let d = NodeDetails {
            notes: opt(self.notes),
            cost: opt(self.cost),
            compliance: opt(self.compliance),
        };
        (!d.is_empty()).then_some(d)
    }

    /// Instantiate this entry as a positioned diagram node.
    pub fn positioned(&self, x: f64, y: f64) -> Node {
        Node {
            id: self.id.to_string(),
            name: self.name.to_string(),
            icon: (!self.icon.is_empty()).then(|| self.icon.to_string()),
            subtitle: (!self.subtitle.is_empty()).then(|| self.subtitle.to_string()),
            zone: self.zone,
            x,
            y,
            details: self.details(),
        }
    }
}

/// Ordered (prefix, layer, zone) table. Evaluated top to bottom with the
/// first matching prefix winning: `conn_` must stay above `con_` or
/// connectivity nodes would classify as consumers. The medallion tiers
/// carry no prefix and match by full ID.
pub const LAYER_PREFIXES: &[(&str, Layer, Zone)] = &[
    ("src_", Layer::L1, Zone::Sources),
    ("conn_", Layer::L2, Zone::Connectivity),
    ("ing_", Layer::L3, Zone::Cloud),
    ("lake_", Layer::L4, Zone::Cloud),
    ("proc_", Layer::L5, Zone::Cloud),
    ("bronze", Layer::L6, Zone::Cloud),
    ("silver", Layer::L6, Zone::Cloud),
    ("gold", Layer::L6, Zone::Cloud),
    ("serve_", Layer::L7, Zone::Cloud),
    ("con_", Layer::L8, Zone::Consumers),
    ("pillar_", Layer::Pillar, Zone::Cloud),
];

/// Infer the pipeline layer from a node ID prefix. IDs matching no known
/// prefix map to the `Unknown` sentinel and are excluded from layer-based
/// grouping.
pub fn infer_layer(id: &str) -> Layer {
    LAYER_PREFIXES
        .iter()
        .find(|(prefix, _, _)| id.starts_with(prefix))
        .map(|(_, layer, _)| *layer)
        .unwrap_or(Layer::Unknown)
}

pub fn find(id: &str) -> Option<&'static CatalogNode> {
    CATALOG.iter().find(|n| n.id == id)
}

const fn entry(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    subtitle: &'static str,
    zone: Zone,
) -> CatalogNode {
    CatalogNode { id, name, icon, subtitle, zone, notes: "", cost: "", compliance: "" }
}

const fn detailed(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    subtitle: &'static str,
    zone: Zone,
    notes: &'static str,
    cost: &'static str,
    compliance: &'static str,
) -> CatalogNode {
    CatalogNode { id, name, icon, subtitle, zone, notes, cost, compliance }
}

/// The full product catalog, in declaration order. Layout and phase
/// derivation both iterate this slice, so declaration order doubles as the
/// stable within-column ordering.
pub static CATALOG: &[CatalogNode] = &[
    // L1: sources
    detailed("src_oracle", "Oracle DB", "oracle", "On-prem RDBMS", Zone::Sources,
        "Enterprise RDBMS via JDBC, LogMiner CDC.", "", "SOC2, HIPAA, PCI-DSS"),
    detailed("src_sqlserver", "SQL Server", "sqlserver", "On-prem RDBMS", Zone::Sources,
        "Microsoft RDBMS via JDBC/ODBC, Change Tracking.", "", "SOC2, HIPAA"),
    detailed("src_postgresql", "PostgreSQL", "postgresql", "WAL-based CDC", Zone::Sources,
        "Open-source RDBMS via JDBC and WAL logical replication.", "", "SOC2"),
    entry("src_mongodb", "MongoDB", "mongodb", "Change streams", Zone::Sources),
    detailed("src_salesforce", "Salesforce", "salesforce", "CRM SaaS", Zone::Sources,
        "Cloud CRM: REST/Bulk APIs and CDC.", "Included in SF license", "SOC2, GDPR"),
    detailed("src_workday", "Workday", "workday", "HCM SaaS", Zone::Sources,
        "HCM/Finance: employees, payroll via RaaS.", "", "SOC2, GDPR, HIPAA"),
    entry("src_servicenow", "ServiceNow", "servicenow", "ITSM SaaS", Zone::Sources),
    detailed("src_sap", "SAP ERP", "sap", "OData/BAPI", Zone::Sources,
        "ERP: finance, supply chain via OData/BAPI.", "", "SOC2, SOX"),
    detailed("src_kafka", "Kafka", "kafka", "Event streaming", Zone::Sources,
        "Distributed event streaming for high-throughput pub-sub.", "", "SOC2"),
    entry("src_s3", "AWS S3", "aws_s3", "Cross-cloud object store", Zone::Sources),
    entry("src_sftp", "SFTP Server", "sftp_server", "Legacy file transfer", Zone::Sources),
    // L2: connectivity & identity
    detailed("conn_iam", "Cloud IAM", "identity_and_access_management", "Roles · Policies · WIF",
        Zone::Connectivity, "Roles, policies, Workload Identity Federation.", "", "SOC2, ISO 27001"),
    detailed("conn_secret_manager", "Secret Manager", "secret_manager", "Runtime secrets · CMEK",
        Zone::Connectivity, "Secret storage: versioning, IAM, CMEK.", "$0.06/10K ops", "SOC2, HIPAA"),
    detailed("conn_vpn", "Cloud VPN", "cloud_vpn", "IPsec tunnels · HA VPN", Zone::Connectivity,
        "Managed IPsec VPN. HA VPN: 99.99% SLA.", "~$0.075/hr per tunnel", "SOC2"),
    detailed("conn_vpc", "VPC / VPC-SC", "virtual_private_cloud", "Network · Service controls",
        Zone::Connectivity, "VPC plus VPC-SC for exfiltration prevention.", "", "SOC2, HIPAA, PCI-DSS"),
    detailed("conn_armor", "Cloud Armor", "cloud_armor", "WAF · DDoS", Zone::Connectivity,
        "", "$0.75/policy/mo", "SOC2"),
    detailed("conn_apigee", "Apigee", "apigee_api_platform", "API gateway", Zone::Connectivity,
        "", "Standard: $500/mo", "SOC2, PCI-DSS"),
    detailed("conn_entra_id", "Entra ID", "entra_id", "Enterprise IdP · SSO · MFA", Zone::Connectivity,
        "Microsoft SSO, MFA, conditional access via SAML 2.0.", "P1: $6/user/mo", "SOC2, ISO 27001"),
    detailed("conn_cyberark", "CyberArk", "cyberark", "Enterprise PAM · Vault", Zone::Connectivity,
        "PAM: credential vault with auto rotation.", "", "SOC2, PCI-DSS, HIPAA"),
    // L3: ingestion
    detailed("ing_datastream", "Datastream", "datastream", "Serverless CDC", Zone::Cloud,
        "", "$0.10/GB", "SOC2, ISO 27001"),
    detailed("ing_pubsub", "Pub/Sub", "pubsub", "Events · At-least-once", Zone::Cloud,
        "", "$40/TiB", "SOC2, ISO 27001"),
    detailed("ing_dataflow", "Dataflow", "dataflow", "Stream & batch ingestion", Zone::Cloud,
        "", "$0.056/vCPU-hr", "SOC2, ISO 27001"),
    detailed("ing_functions", "Cloud Functions", "cloud_functions", "Serverless pull", Zone::Cloud,
        "", "$0.40/million invocations", "SOC2"),
    detailed("ing_fivetran", "Fivetran", "fivetran", "Managed ELT connectors", Zone::Cloud,
        "", "Per MAR pricing", "SOC2, ISO 27001"),
    // L4: landing
    detailed("lake_gcs", "Cloud Storage", "cloud_storage", "Raw landing · Parquet/JSON", Zone::Cloud,
        "", "$0.020/GB/mo", "SOC2, HIPAA"),
    detailed("lake_bq_staging", "BigQuery Staging", "bigquery", "Relational landing", Zone::Cloud,
        "", "$6.25/TB queried", "SOC2, HIPAA"),
    // L5: processing
    detailed("proc_bq_sql", "BigQuery SQL", "bigquery", "SQL transforms · Scheduled", Zone::Cloud,
        "", "$6.25/TB queried", "SOC2"),
    detailed("proc_dataflow", "Dataflow", "dataflow", "Beam · Stream processing", Zone::Cloud,
        "", "$0.056/vCPU-hr", "SOC2"),
    detailed("proc_dataproc", "Dataproc", "dataproc", "Spark · Heavy transforms", Zone::Cloud,
        "", "$0.01/vCPU-hr on Compute", "SOC2"),
    detailed("proc_dlp", "Cloud DLP", "security_command_center", "PII detection · Masking", Zone::Cloud,
        "", "$1-3/GB inspected", "GDPR, HIPAA, PCI-DSS"),
    // L6: medallion
    entry("bronze", "Bronze", "bigquery", "Raw · Deduplicated", Zone::Cloud),
    entry("silver", "Silver", "bigquery", "Cleaned · Conformed", Zone::Cloud),
    entry("gold", "Gold", "bigquery", "Curated · Aggregated", Zone::Cloud),
    // L7: serving
    detailed("serve_looker", "Looker", "looker", "Semantic layer · LookML", Zone::Cloud,
        "", "$5,000/mo Standard", "SOC2, ISO 27001"),
    detailed("serve_run", "Cloud Run", "cloud_run", "Data APIs · Serverless", Zone::Cloud,
        "", "$0.000024/vCPU-sec", "SOC2"),
    entry("serve_hub", "Analytics Hub", "analytics_hub", "Data exchange", Zone::Cloud),
    detailed("serve_bi_engine", "BQ BI Engine", "bigquery", "In-memory acceleration", Zone::Cloud,
        "", "$0.0416/GB/hr", "SOC2"),
    // L8: consumers
    entry("con_looker", "Looker Dashboards", "looker", "Executive & operational BI", Zone::Consumers),
    entry("con_sheets", "Connected Sheets", "data_studio", "BQ in Google Sheets", Zone::Consumers),
    entry("con_vertex", "Vertex AI Notebooks", "vertexai", "Data science · ML", Zone::Consumers),
    entry("con_run", "Cloud Run APIs", "cloud_run", "Downstream apps", Zone::Consumers),
    entry("con_powerbi", "Power BI", "", "Microsoft BI · DirectQuery", Zone::Consumers),
    // Crosscutting pillars
    detailed("pillar_sec", "Security & Identity", "security_command_center",
        "IAM · Encryption · Secrets · Network", Zone::Cloud,
        "IAM, KMS/CMEK, VPC-SC, SCC, Armor.", "", "SOC2, ISO 27001, HIPAA, PCI-DSS"),
    detailed("pillar_gov", "Governance & Quality", "dataplex",
        "Catalog · Lineage · DLP · Quality", Zone::Cloud,
        "Dataplex, Data Catalog, Lineage, DLP.", "Dataplex: $0.05/GB", "GDPR, CCPA, HIPAA"),
    detailed("pillar_obs", "Observability & Ops", "cloud_monitoring",
        "Monitor · Logging · Alerting · SLA", Zone::Cloud,
        "Monitoring, Logging, Error Reporting.", "", "SLO/SLA, MTTR"),
    detailed("pillar_orch", "Orchestration & Cost", "cloud_composer",
        "DAGs · Scheduling · Budget", Zone::Cloud,
        "Composer, Scheduler, budget alerts.", "Composer: $0.35/vCPU-hr", "FINOPS"),
];
