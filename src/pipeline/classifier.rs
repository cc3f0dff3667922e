//! Per-message classifier — composes extraction, workflow, severity,
//! resolution, and question detection into one immutable result.

use serde::{Deserialize, Serialize};

use crate::config::DigestConfig;
use crate::message::Message;
use crate::pipeline::extract::{ExtractedFields, FieldExtractor};
use crate::pipeline::question;
use crate::pipeline::resolution::{self, ResolutionBucket};
use crate::pipeline::severity::{self, Severity};
use crate::pipeline::workflow::{self, Workflow};

/// Classification result for one message.
///
/// An immutable value: the bucket is derived from the score at
/// construction and the two never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub workflow: Workflow,
    pub severity: Severity,
    pub resolution_score: f32,
    pub resolution_bucket: ResolutionBucket,
    pub is_question: bool,
    /// Fields extracted from the message body.
    pub fields: ExtractedFields,
}

/// Classifies messages against a fixed configuration.
///
/// Holds the compiled extraction patterns so a batch run compiles them
/// once, not per message.
pub struct MessageClassifier {
    config: DigestConfig,
    extractor: FieldExtractor,
}

impl MessageClassifier {
    pub fn new(config: DigestConfig) -> Self {
        Self {
            config,
            extractor: FieldExtractor::new(),
        }
    }

    /// Classify a single message.
    ///
    /// Total and pure: every message, including one with empty text,
    /// yields exactly one workflow, one severity, and one bucket.
    pub fn classify(&self, message: &Message) -> Classification {
        let fields = self.extractor.extract(&message.text);
        let workflow = workflow::classify(&fields, &message.text);
        let severity = severity::classify(
            &message.text,
            &self.config.high_severity_keywords,
            &self.config.low_severity_keywords,
        );
        let resolution_score = resolution::score(
            message.thread_reply_count,
            message.reaction_count,
            &self.config.resolution,
        );
        let resolution_bucket = resolution::bucket(resolution_score, &self.config.resolution);
        let is_question = question::is_question(&message.text);

        Classification {
            workflow,
            severity,
            resolution_score,
            resolution_bucket,
            is_question,
            fields,
        }
    }

    /// Classify a batch in input order, pairing each message with its
    /// result for aggregation.
    pub fn classify_batch(&self, messages: Vec<Message>) -> Vec<(Message, Classification)> {
        messages
            .into_iter()
            .map(|message| {
                let classification = self.classify(&message);
                (message, classification)
            })
            .collect()
    }
}
