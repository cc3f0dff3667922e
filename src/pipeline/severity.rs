//! Severity classification by keyword scan.

use serde::{Deserialize, Serialize};

/// Message priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Case-insensitive keyword containment scan.
///
/// High keywords are checked before Low, so a message matching both
/// lists comes out High. No match defaults to Medium.
pub fn classify(text: &str, high_keywords: &[String], low_keywords: &[String]) -> Severity {
    let lowered = text.to_lowercase();
    if contains_any(&lowered, high_keywords) {
        Severity::High
    } else if contains_any(&lowered, low_keywords) {
        Severity::Low
    } else {
        Severity::Medium
    }
}

fn contains_any(lowered: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}
