// Shared test fixtures for raw entry records.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::entries::core::raw::{RawEmotion, RawEntry, RawEntryEmotion};
use std::fs;

pub const RAW_ENTRY_JSON: &str = "./src/tests/fixtures/json/raw_entry.json";
pub const RAW_ENTRIES_JSON: &str = "./src/tests/fixtures/json/raw_entries.json";

pub fn read_json(path: &str) -> serde_json::Value {
    let json_str = fs::read_to_string(path).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

/// The canonical raw entry: id 1, "ok", one Joy emotion.
pub fn make_raw_entry() -> RawEntry {
    serde_json::from_value(read_json(RAW_ENTRY_JSON)).unwrap()
}

pub fn make_raw_emotion() -> RawEmotion {
    make_raw_entry().entry_emotions.remove(0).emotions
}

/// Raw records as the backend would hand them over, untyped.
pub fn make_raw_entry_values() -> Vec<serde_json::Value> {
    match read_json(RAW_ENTRIES_JSON) {
        serde_json::Value::Array(values) => values,
        other => panic!("expected a JSON array, got {other}"),
    }
}

pub struct RawEntryBuilder {
    inner: RawEntry,
}

impl Default for RawEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RawEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: make_raw_entry(),
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn comment(mut self, v: impl Into<String>) -> Self {
        self.inner.comment = v.into();
        self
    }

    pub fn created_at(mut self, v: impl Into<String>) -> Self {
        self.inner.created_at = v.into();
        self
    }

    pub fn entry_emotions(mut self, v: Vec<RawEntryEmotion>) -> Self {
        self.inner.entry_emotions = v;
        self
    }

    pub fn build(self) -> RawEntry {
        self.inner
    }

    pub fn build_value(self) -> serde_json::Value {
        serde_json::to_value(self.inner).unwrap()
    }
}

#[cfg(test)]
mod raw_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RawEntryBuilder::default().build();
        assert_eq!(built, make_raw_entry());
        assert_eq!(built.id, 1);
        assert_eq!(built.entry_emotions[0].emotions.id, 5);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RawEntryBuilder::new()
            .id(42)
            .comment("custom")
            .created_at("2023-06-01")
            .entry_emotions(vec![])
            .build();

        assert_eq!(custom.id, 42);
        assert_eq!(custom.comment, "custom");
        assert_eq!(custom.created_at, "2023-06-01");
        assert!(custom.entry_emotions.is_empty());
    }

    #[rstest]
    fn it_should_load_the_seed_list() {
        let values = make_raw_entry_values();
        assert_eq!(values.len(), 3);
    }
}
