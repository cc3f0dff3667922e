//! Workflow classification.

use serde::{Deserialize, Serialize};

use crate::pipeline::extract::ExtractedFields;

/// Functional category a message's request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workflow {
    Nucleus,
    TrustView,
    Search,
    Deployment,
    Other,
}

impl Workflow {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nucleus => "nucleus",
            Self::TrustView => "trust_view",
            Self::Search => "search",
            Self::Deployment => "deployment",
            Self::Other => "other",
        }
    }
}

/// Classify against the extracted request type, falling back to the full
/// message text when no request type was found.
///
/// Total: every message receives exactly one label.
pub fn classify(fields: &ExtractedFields, text: &str) -> Workflow {
    match &fields.request_type {
        // Request types come out of the extractor already lowercased.
        Some(request_type) => classify_text(request_type),
        None => classify_text(&text.to_lowercase()),
    }
}

// First match wins.
fn classify_text(haystack: &str) -> Workflow {
    if haystack.contains("nucleus") {
        Workflow::Nucleus
    } else if haystack.contains("trust view") || haystack.contains("trust dashboard") {
        Workflow::TrustView
    } else if haystack.contains("search") {
        Workflow::Search
    } else if haystack.contains("deploy") {
        Workflow::Deployment
    } else {
        Workflow::Other
    }
}
