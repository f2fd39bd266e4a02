// Port for whatever hands over raw entry records (a backend join, a seed file, a test double).
//
// Records stay untyped here so malformed upstream data reaches the decoder, which
// owns the field-access contract.

use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait RawEntrySource: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<Value>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Value>>;
}
