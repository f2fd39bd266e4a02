use crate::modules::entries::adapters::inbound::raw_json::{decode_entries, decode_entry};
use crate::modules::entries::core::entry::Entry;
use crate::modules::entries::core::errors::MappingError;
use crate::modules::entries::use_cases::list_entries::source_port::RawEntrySource;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("raw entry source failed: {0}")]
    Source(String),
}

pub struct ListEntriesHandler<TSource>
where
    TSource: RawEntrySource + 'static,
{
    source: Arc<TSource>,
}

impl<TSource> ListEntriesHandler<TSource>
where
    TSource: RawEntrySource + 'static,
{
    pub fn new(source: Arc<TSource>) -> Self {
        Self { source }
    }

    pub async fn list(&self) -> Result<Vec<Entry>, ApplicationError> {
        let records = self
            .source
            .list()
            .await
            .map_err(|e| ApplicationError::Source(e.to_string()))?;
        let count = records.len();
        let entries = decode_entries(records)?;
        tracing::debug!(count, "mapped raw entries");
        Ok(entries)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Entry>, ApplicationError> {
        let record = self
            .source
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::Source(e.to_string()))?;
        match record {
            Some(record) => Ok(Some(decode_entry(record)?)),
            None => {
                tracing::debug!(id, "raw entry not found");
                Ok(None)
            }
        }
    }
}
