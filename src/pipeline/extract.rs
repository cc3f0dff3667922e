//! Field extraction — pulls structured fields out of free-text bodies.
//!
//! Extraction is best-effort: a missing marker leaves the field absent,
//! and no input can make it fail.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structured fields parsed from a message body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Lowercased request-type line, when the `request type:` marker is
    /// present.
    pub request_type: Option<String>,
    /// Mention token from the first "New request from <@...> via" match.
    pub referenced_user_id: Option<String>,
    /// Ticket references in order of first appearance, deduplicated.
    pub ticket_ids: Vec<String>,
}

/// Compiled extraction patterns. Build once, reuse per batch.
pub struct FieldExtractor {
    request_type: Regex,
    user_reference: Regex,
    ticket: Regex,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            // Capture stops at a newline or a field delimiter so a
            // "Request Type: X | Priority: Y" line only yields X.
            request_type: Regex::new(r"(?i)request type:[ \t]*([^\n|•]+)").unwrap(),
            // The marker words are case-insensitive but the mention
            // token itself is strictly uppercase letters and digits.
            user_reference: Regex::new(r"(?i:new request from)\s+<@([A-Z0-9]+)>\s+(?i:via)")
                .unwrap(),
            ticket: Regex::new(r"\b[A-Z]+-[0-9]+\b").unwrap(),
        }
    }

    /// Extract all fields from one message body.
    pub fn extract(&self, text: &str) -> ExtractedFields {
        let request_type = self
            .request_type
            .captures(text)
            .map(|c| c[1].trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let referenced_user_id = self
            .user_reference
            .captures(text)
            .map(|c| c[1].to_string());

        let mut ticket_ids: Vec<String> = Vec::new();
        for found in self.ticket.find_iter(text) {
            if !ticket_ids.iter().any(|t| t == found.as_str()) {
                ticket_ids.push(found.as_str().to_string());
            }
        }

        ExtractedFields {
            request_type,
            referenced_user_id,
            ticket_ids,
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
