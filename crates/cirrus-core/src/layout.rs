//! Zone/layer column layout. Sources land leftmost, then connectivity,
//! then the L3–L7 pipeline columns, then the crosscutting pillars, with
//! consumers rightmost. Nodes sharing a column are spaced at a fixed row
//! pitch and every column is vertically centered against the tallest one.
//!
//! This is a layout heuristic, not graph drawing; there is no
//! edge-crossing minimization.

use std::collections::BTreeMap;

use crate::catalog::{CatalogNode, CATALOG};
use crate::{Layer, Node, Zone};

pub const COL_BASE_X: f64 = 70.0;
pub const COL_PITCH: f64 = 230.0;
pub const ROW_BASE_Y: f64 = 80.0;
pub const ROW_PITCH: f64 = 160.0;

/// Column index for a catalog entry. Unknown-layer nodes fall back to a
/// zone band so they still render somewhere sensible even though they are
/// skipped by phase grouping.
fn column(node: &CatalogNode) -> usize {
    match node.layer() {
        Layer::L1 => 0,
        Layer::L2 => 1,
        Layer::L3 => 2,
        Layer::L4 => 3,
        Layer::L5 => 4,
        Layer::L6 => 5,
        Layer::L7 => 6,
        Layer::Pillar => 7,
        Layer::L8 => 8,
        Layer::Unknown => match node.zone {
            Zone::Sources => 0,
            Zone::Connectivity => 1,
            Zone::Cloud => 4,
            Zone::Consumers => 8,
        },
    }
}

/// Resolve a kept-ID selection against the catalog and assign every
/// surviving node deterministic, non-overlapping coordinates.
///
/// IDs absent from the catalog are dropped. Duplicates collapse to one
/// node: resolution iterates the catalog, so within-column order is
/// catalog declaration order regardless of input order.
pub fn position(kept: &[String]) -> Vec<Node> {
    let mut columns: BTreeMap<usize, Vec<&'static CatalogNode>> = BTreeMap::new();
    for entry in CATALOG {
        if kept.iter().any(|id| id == entry.id) {
            columns.entry(column(entry)).or_default().push(entry);
        }
    }

    let tallest = columns.values().map(Vec::len).max().unwrap_or(0);

    let mut nodes = Vec::new();
    for (col, entries) in &columns {
        let x = COL_BASE_X + *col as f64 * COL_PITCH;
        // Center shorter columns against the tallest.
        let y_start = ROW_BASE_Y + (tallest - entries.len()) as f64 * ROW_PITCH / 2.0;
        for (row, entry) in entries.iter().enumerate() {
            nodes.push(entry.positioned(x, y_start + row as f64 * ROW_PITCH));
        }
    }
    nodes
}
