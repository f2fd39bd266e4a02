// Untyped JSON boundary.
//
// Purpose
// - Turn raw backend JSON into derived values in one step.
//
// Responsibilities
// - Surface a missing or wrongly-typed required field as MappingError::FieldAccess.
// - Stop at the first malformed record of a list. No partial results.

use crate::modules::entries::core::emotion::Emotion;
use crate::modules::entries::core::entry::Entry;
use crate::modules::entries::core::errors::MappingError;
use crate::modules::entries::core::raw::{RawEmotion, RawEntry};
use serde_json::Value;

pub fn decode_entry(value: Value) -> Result<Entry, MappingError> {
    let raw: RawEntry = serde_json::from_value(value)?;
    Ok(raw.into())
}

pub fn decode_entry_str(json: &str) -> Result<Entry, MappingError> {
    let raw: RawEntry = serde_json::from_str(json)?;
    Ok(raw.into())
}

pub fn decode_entries(values: Vec<Value>) -> Result<Vec<Entry>, MappingError> {
    values.into_iter().map(decode_entry).collect()
}

pub fn decode_emotion(value: Value) -> Result<Emotion, MappingError> {
    let raw: RawEmotion = serde_json::from_value(value)?;
    Ok(raw.into())
}
