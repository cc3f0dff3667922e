//! Digest aggregation — folds classified messages into per-channel
//! statistics.
//!
//! The aggregator is the only place order matters: day activity is
//! emitted chronologically ascending. Everything else is a plain tally.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DigestConfig;
use crate::message::Message;
use crate::pipeline::classifier::Classification;
use crate::pipeline::resolution::ResolutionBucket;
use crate::pipeline::severity::Severity;
use crate::pipeline::workflow::Workflow;

/// Channel and time bounds a digest covers.
///
/// The window is descriptive: the retrieval collaborator already scoped
/// the batch, so the aggregator records the bounds rather than
/// re-filtering by them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestWindow {
    pub channel_id: String,
    /// Inclusive start of the window.
    pub start: DateTime<Utc>,
    /// Exclusive end of the window.
    pub end: DateTime<Utc>,
}

/// Message count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: NaiveDate,
    pub count: usize,
}

/// Aggregate statistics for one (channel, window) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestSummary {
    pub window: DigestWindow,
    /// All messages seen, before interest filtering.
    pub raw_total: usize,
    /// Messages whose workflow is in the configured interest set; every
    /// other statistic below covers only these.
    pub total: usize,
    pub by_workflow: HashMap<Workflow, usize>,
    pub by_severity: HashMap<Severity, usize>,
    pub by_resolution: HashMap<ResolutionBucket, usize>,
    /// Sparse per-day activity, chronologically ascending.
    pub daily_activity: Vec<DayCount>,
    /// Message counts per attributed user.
    pub by_user: HashMap<String, usize>,
    /// Messages flagged as questions.
    pub questions: usize,
    /// Ticket references across all kept messages (non-unique).
    pub ticket_references: usize,
    /// Kept messages carrying at least one ticket reference.
    pub messages_with_tickets: usize,
}

impl DigestSummary {
    fn empty(window: DigestWindow) -> Self {
        Self {
            window,
            raw_total: 0,
            total: 0,
            by_workflow: HashMap::new(),
            by_severity: HashMap::new(),
            by_resolution: HashMap::new(),
            daily_activity: Vec::new(),
            by_user: HashMap::new(),
            questions: 0,
            ticket_references: 0,
            messages_with_tickets: 0,
        }
    }

    /// Fraction of messages that drew any engagement (everything not
    /// bucketed NeedsAttention). Zero for an empty digest.
    pub fn response_rate(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        let needs_attention = self
            .by_resolution
            .get(&ResolutionBucket::NeedsAttention)
            .copied()
            .unwrap_or(0);
        (self.total - needs_attention) as f32 / self.total as f32
    }

    /// Fraction of messages bucketed Resolved or Likely. Zero for an
    /// empty digest.
    pub fn resolution_rate(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        let resolved = self
            .by_resolution
            .get(&ResolutionBucket::Resolved)
            .copied()
            .unwrap_or(0);
        let likely = self
            .by_resolution
            .get(&ResolutionBucket::Likely)
            .copied()
            .unwrap_or(0);
        (resolved + likely) as f32 / self.total as f32
    }
}

/// Folds classified messages for one channel/window into a summary.
pub struct DigestAggregator {
    config: DigestConfig,
}

impl DigestAggregator {
    pub fn new(config: DigestConfig) -> Self {
        Self { config }
    }

    /// Aggregate one channel's classified messages.
    ///
    /// Never fails: an empty batch yields a summary with total 0 and
    /// every collection empty.
    pub fn aggregate(
        &self,
        window: &DigestWindow,
        classified: &[(Message, Classification)],
    ) -> DigestSummary {
        let mut summary = DigestSummary::empty(window.clone());
        summary.raw_total = classified.len();

        let mut daily: BTreeMap<NaiveDate, usize> = BTreeMap::new();

        for (message, classification) in classified {
            if !self
                .config
                .interest_workflows
                .contains(&classification.workflow)
            {
                continue;
            }

            summary.total += 1;
            *summary
                .by_workflow
                .entry(classification.workflow)
                .or_insert(0) += 1;
            *summary
                .by_severity
                .entry(classification.severity)
                .or_insert(0) += 1;
            *summary
                .by_resolution
                .entry(classification.resolution_bucket)
                .or_insert(0) += 1;
            *daily.entry(message.timestamp.date_naive()).or_insert(0) += 1;

            let user = attributed_user(message, classification);
            *summary.by_user.entry(user.to_string()).or_insert(0) += 1;

            if classification.is_question {
                summary.questions += 1;
            }
            summary.ticket_references += classification.fields.ticket_ids.len();
            if !classification.fields.ticket_ids.is_empty() {
                summary.messages_with_tickets += 1;
            }
        }

        summary.daily_activity = daily
            .into_iter()
            .map(|(day, count)| DayCount { day, count })
            .collect();

        debug!(
            channel = %window.channel_id,
            raw = summary.raw_total,
            kept = summary.total,
            "Aggregated digest window"
        );
        summary
    }
}

// Bot-filed messages are attributed to the referenced human, not the bot.
fn attributed_user<'a>(message: &'a Message, classification: &'a Classification) -> &'a str {
    if message.author_is_bot {
        if let Some(user) = &classification.fields.referenced_user_id {
            return user;
        }
    }
    &message.author_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    use crate::pipeline::classifier::MessageClassifier;

    fn window() -> DigestWindow {
        DigestWindow {
            channel_id: "C001".into(),
            start: Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 6, 9, 0, 0, 0).unwrap(),
        }
    }

    fn make_message(
        id: &str,
        author: &str,
        text: &str,
        day: u32,
        replies: u32,
        reactions: u32,
    ) -> Message {
        Message {
            id: id.into(),
            channel_id: "C001".into(),
            author_id: author.into(),
            author_is_bot: false,
            timestamp: Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap(),
            text: text.into(),
            thread_reply_count: replies,
            reaction_count: reactions,
            permalink: None,
        }
    }

    fn aggregate(messages: Vec<Message>) -> DigestSummary {
        let config = DigestConfig::default();
        let classifier = MessageClassifier::new(config.clone());
        let classified = classifier.classify_batch(messages);
        DigestAggregator::new(config).aggregate(&window(), &classified)
    }

    #[test]
    fn empty_batch_yields_empty_summary() {
        let summary = aggregate(vec![]);
        assert_eq!(summary.raw_total, 0);
        assert_eq!(summary.total, 0);
        assert!(summary.by_workflow.is_empty());
        assert!(summary.by_severity.is_empty());
        assert!(summary.by_resolution.is_empty());
        assert!(summary.daily_activity.is_empty());
        assert!(summary.by_user.is_empty());
        assert_eq!(summary.response_rate(), 0.0);
        assert_eq!(summary.resolution_rate(), 0.0);
    }

    #[test]
    fn interest_filter_excludes_other_workflows() {
        let summary = aggregate(vec![
            make_message("1", "U1", "nucleus access broken", 2, 0, 0),
            make_message("2", "U2", "lunch anyone", 2, 0, 0),
            make_message("3", "U3", "deploy failed", 2, 0, 0),
        ]);
        assert_eq!(summary.raw_total, 3);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.by_workflow.get(&Workflow::Nucleus), Some(&1));
        assert_eq!(summary.by_workflow.get(&Workflow::Deployment), None);
        assert_eq!(summary.by_user.len(), 1);
    }

    #[test]
    fn daily_activity_sparse_and_ascending() {
        let summary = aggregate(vec![
            make_message("1", "U1", "trust view question", 6, 0, 0),
            make_message("2", "U1", "nucleus access", 2, 0, 0),
            make_message("3", "U2", "nucleus again", 6, 0, 0),
        ]);
        let days: Vec<(u32, usize)> = summary
            .daily_activity
            .iter()
            .map(|d| (d.day.day(), d.count))
            .collect();
        assert_eq!(days, vec![(2, 1), (6, 2)]);
    }

    #[test]
    fn severity_and_resolution_tallies() {
        let summary = aggregate(vec![
            make_message("1", "U1", "URGENT nucleus outage", 2, 1, 5),
            make_message("2", "U2", "minor trust view nit", 3, 0, 0),
        ]);
        assert_eq!(summary.by_severity.get(&Severity::High), Some(&1));
        assert_eq!(summary.by_severity.get(&Severity::Low), Some(&1));
        assert_eq!(
            summary.by_resolution.get(&ResolutionBucket::Resolved),
            Some(&1)
        );
        assert_eq!(
            summary.by_resolution.get(&ResolutionBucket::NeedsAttention),
            Some(&1)
        );
        assert!((summary.response_rate() - 0.5).abs() < 1e-6);
        assert!((summary.resolution_rate() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn bot_messages_attribute_to_referenced_user() {
        let mut bot_message = make_message(
            "1",
            "BOT99",
            "New request from <@U12345> via <@BOT99>\nRequest Type: Nucleus",
            2,
            0,
            0,
        );
        bot_message.author_is_bot = true;
        let summary = aggregate(vec![bot_message]);
        assert_eq!(summary.by_user.get("U12345"), Some(&1));
        assert_eq!(summary.by_user.get("BOT99"), None);
    }

    #[test]
    fn bot_without_reference_keeps_bot_author() {
        let mut bot_message = make_message("1", "BOT99", "nucleus heartbeat ok", 2, 0, 0);
        bot_message.author_is_bot = true;
        let summary = aggregate(vec![bot_message]);
        assert_eq!(summary.by_user.get("BOT99"), Some(&1));
    }

    #[test]
    fn human_author_with_reference_keeps_author() {
        let summary = aggregate(vec![make_message(
            "1",
            "U777",
            "New request from <@U12345> via <@BOT99> nucleus",
            2,
            0,
            0,
        )]);
        assert_eq!(summary.by_user.get("U777"), Some(&1));
        assert_eq!(summary.by_user.get("U12345"), None);
    }

    #[test]
    fn ticket_statistics() {
        let summary = aggregate(vec![
            make_message("1", "U1", "nucleus PROJ-123 and PROJ-456", 2, 0, 0),
            make_message("2", "U2", "trust view fine today", 3, 0, 0),
        ]);
        assert_eq!(summary.ticket_references, 2);
        assert_eq!(summary.messages_with_tickets, 1);
    }

    #[test]
    fn question_count() {
        let summary = aggregate(vec![
            make_message("1", "U1", "how do I get nucleus access", 2, 0, 0),
            make_message("2", "U2", "trust view restored", 3, 0, 0),
        ]);
        assert_eq!(summary.questions, 1);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = aggregate(vec![make_message("1", "U1", "nucleus down?", 2, 1, 1)]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["by_workflow"]["Nucleus"], 1);
        assert_eq!(json["by_severity"]["Medium"], 1);
    }
}
