// In memory raw entry source.
//
// Purpose
// - Serve raw records without a backend, for local runs and tests.
//
// Responsibilities
// - Keep records in insertion order.
// - Optionally load the initial records from a JSON array file.

use crate::modules::entries::use_cases::list_entries::source_port::RawEntrySource;
use anyhow::Context;
use serde_json::Value;
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRawEntries {
    records: RwLock<Vec<Value>>,
    is_offline: bool,
}

impl InMemoryRawEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            records: RwLock::new(records),
            is_offline: false,
        }
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let records: Vec<Value> = serde_json::from_str(&contents)
            .with_context(|| format!("seed file {} is not a JSON array", path.display()))?;
        Ok(Self::with_records(records))
    }

    pub async fn insert(&self, record: Value) {
        self.records.write().await.push(record);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl RawEntrySource for InMemoryRawEntries {
    async fn list(&self) -> anyhow::Result<Vec<Value>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Raw entry source offline"));
        }

        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Value>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Raw entry source offline"));
        }

        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| id_matches(record, id))
            .cloned())
    }
}

// Also matches "2" and 2.0; the decoder then rejects the non-integer id.
fn id_matches(record: &Value, id: i64) -> bool {
    match record.get("id") {
        Some(Value::Number(n)) => n.as_i64() == Some(id) || n.as_f64() == Some(id as f64),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok() == Some(id),
        _ => false,
    }
}
