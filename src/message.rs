//! Message records handed in by the retrieval collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MessageError;

/// One chat message, as fetched upstream. Never mutated by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub channel_id: String,
    pub author_id: String,
    /// True when the author is a bot identity (e.g. a workflow app
    /// filing requests on behalf of users).
    #[serde(default)]
    pub author_is_bot: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub text: String,
    /// Replies in this message's thread. Raw exports sometimes carry
    /// negative sentinels; those clamp to 0 on deserialization.
    #[serde(default, deserialize_with = "clamped_count")]
    pub thread_reply_count: u32,
    #[serde(default, deserialize_with = "clamped_count")]
    pub reaction_count: u32,
    #[serde(default)]
    pub permalink: Option<String>,
}

fn clamped_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, u32::MAX as i64) as u32)
}

/// Reject records with empty required identifiers before they enter the
/// classification core.
pub fn validate_batch(messages: &[Message]) -> Result<(), MessageError> {
    for (index, message) in messages.iter().enumerate() {
        for (field, value) in [
            ("id", &message.id),
            ("channel_id", &message.channel_id),
            ("author_id", &message.author_id),
        ] {
            if value.trim().is_empty() {
                return Err(MessageError::MissingField { index, field });
            }
        }
    }
    Ok(())
}
