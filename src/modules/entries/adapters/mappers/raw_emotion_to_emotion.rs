use crate::modules::entries::core::emotion::Emotion;
use crate::modules::entries::core::raw::RawEmotion;

impl From<RawEmotion> for Emotion {
    fn from(raw: RawEmotion) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            color: raw.emotion_groups.color,
        }
    }
}
