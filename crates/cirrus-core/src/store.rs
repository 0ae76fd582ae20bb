//! On-disk diagram persistence. Records are pretty JSON files laid out as
//! `<root>/diagrams/<owner>/<id>.json`, written atomically (temp file +
//! rename) so concurrent readers never observe a half-written record.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::Diagram;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("diagram not found: {0}")]
    NotFound(String),
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encoding(#[from] serde_json::Error),
}

/// A saved diagram together with the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramRecord {
    pub id: String,
    pub owner: String,
    pub prompt: String,
    /// Unix seconds.
    pub created_at: u64,
    pub diagram: Diagram,
}

/// Resolve the global data directory (~/.cirrus/).
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cirrus")
}

/// Owner names and record IDs become path components, so anything outside
/// a conservative character set is refused rather than escaped.
fn check_key(key: &str) -> Result<(), StoreError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub struct DiagramStore {
    root: PathBuf,
}

impl DiagramStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn default_location() -> Self {
        Self::new(data_dir())
    }

    fn owner_dir(&self, owner: &str) -> PathBuf {
        self.root.join("diagrams").join(owner)
    }

    fn record_path(&self, owner: &str, id: &str) -> PathBuf {
        self.owner_dir(owner).join(format!("{id}.json"))
    }

    pub fn save(
        &self,
        owner: &str,
        prompt: &str,
        diagram: &Diagram,
    ) -> Result<DiagramRecord, StoreError> {
        check_key(owner)?;
        let record = DiagramRecord {
            id: Uuid::new_v4().to_string(),
            owner: owner.to_string(),
            prompt: prompt.to_string(),
            created_at: now_unix(),
            diagram: diagram.clone(),
        };

        let dir = self.owner_dir(owner);
        fs::create_dir_all(&dir)?;
        let json = serde_json::to_string_pretty(&record)?;
        let tmp = dir.join(format!(".{}.json.tmp", record.id));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, self.record_path(owner, &record.id))?;
        tracing::info!(owner, id = %record.id, "saved diagram");
        Ok(record)
    }

    /// List an owner's records, newest first. An owner with no directory
    /// yet simply has no records.
    pub fn list(&self, owner: &str) -> Result<Vec<DiagramRecord>, StoreError> {
        check_key(owner)?;
        let dir = self.owner_dir(owner);
        if !dir.exists() {
            return Ok(vec![]);
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            match fs::read_to_string(&path).map_err(StoreError::from).and_then(|raw| {
                serde_json::from_str::<DiagramRecord>(&raw).map_err(StoreError::from)
            }) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unreadable record");
                }
            }
        }
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    pub fn load(&self, owner: &str, id: &str) -> Result<DiagramRecord, StoreError> {
        check_key(owner)?;
        check_key(id)?;
        let path = self.record_path(owner, id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn delete(&self, owner: &str, id: &str) -> Result<(), StoreError> {
        check_key(owner)?;
        check_key(id)?;
        let path = self.record_path(owner, id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        fs::remove_file(&path)?;
        tracing::info!(owner, id, "deleted diagram");
        Ok(())
    }
}
