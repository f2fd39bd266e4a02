// Derived emotion: the raw emotion with its group color flattened onto it.
//
// Notes
// - The group emoji is not part of this model.

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Emotion {
    pub id: i64,
    pub name: String,
    pub color: String,
}
