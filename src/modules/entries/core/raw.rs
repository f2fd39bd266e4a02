// Raw records as the backend returns them.
//
// Purpose
// - Describe the JSON shape of an entry joined with its emotions and emotion groups.
//
// Boundaries
// - No parsing beyond serde. Dates stay strings here, see created_at.rs.
// - Unknown fields are ignored so extra backend columns do not break decoding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub id: i64,
    pub comment: String,
    pub created_at: String,
    pub entry_emotions: Vec<RawEntryEmotion>,
}

/// Join-table wrapper: each item carries exactly one emotion under `emotions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntryEmotion {
    pub emotions: RawEmotion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmotion {
    pub id: i64,
    pub name: String,
    pub emotion_groups: RawEmotionGroup,
}

// emoji is never copied into the derived Emotion, so a record without it still maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmotionGroup {
    pub color: String,
    #[serde(default)]
    pub emoji: Option<String>,
}
