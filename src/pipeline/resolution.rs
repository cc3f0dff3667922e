//! Resolution confidence scoring.
//!
//! Thread activity and reactions are engagement signals: a message that
//! drew replies and reactions was probably looked at and handled. The
//! score is a heuristic, the bucket its discrete reading.

use serde::{Deserialize, Serialize};

use crate::config::ResolutionConfig;

/// Discretized interpretation of a resolution score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionBucket {
    Resolved,
    Likely,
    NeedsAttention,
}

impl ResolutionBucket {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Likely => "likely",
            Self::NeedsAttention => "needs_attention",
        }
    }
}

/// Combine thread and reaction signals into a confidence score.
///
/// The thread increment applies once regardless of reply count; each
/// reaction adds its increment. The result is clamped to [0.0, 1.0].
pub fn score(thread_reply_count: u32, reaction_count: u32, config: &ResolutionConfig) -> f32 {
    let mut score = 0.0f32;
    if thread_reply_count > 0 {
        score += config.thread_increment;
    }
    score += config.reaction_increment * reaction_count as f32;
    score.clamp(0.0, 1.0)
}

/// Map a score onto its bucket. Deterministic step function.
pub fn bucket(score: f32, config: &ResolutionConfig) -> ResolutionBucket {
    if score >= config.resolved_threshold {
        ResolutionBucket::Resolved
    } else if score >= config.likely_threshold {
        ResolutionBucket::Likely
    } else {
        ResolutionBucket::NeedsAttention
    }
}
