// Derived journal entry.
//
// Purpose
// - The typed value the rest of the application reads: parsed creation time and
//   a flat, ordered list of emotions.
//
// Notes
// - Field names serialize in camelCase (createdAt) for the consumers of the JSON output.

use crate::modules::entries::core::created_at::CreatedAt;
use crate::modules::entries::core::emotion::Emotion;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub comment: String,
    pub created_at: CreatedAt,
    pub emotions: Vec<Emotion>,
}
