use crate::modules::entries::core::created_at::CreatedAt;
use crate::modules::entries::core::emotion::Emotion;
use crate::modules::entries::core::entry::Entry;
use crate::modules::entries::core::raw::RawEntry;

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Self {
            id: raw.id,
            comment: raw.comment,
            created_at: CreatedAt::parse(&raw.created_at),
            emotions: raw
                .entry_emotions
                .into_iter()
                .map(|item| Emotion::from(item.emotions))
                .collect(),
        }
    }
}
