//! Configuration types.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::pipeline::workflow::Workflow;

/// Digest configuration.
///
/// Every knob has a default matching production behavior; callers
/// override selectively and run [`DigestConfig::validate`] before
/// handing the config to the classifier or aggregator.
#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// Workflows included in the aggregated digest.
    pub interest_workflows: HashSet<Workflow>,
    /// Keywords that force High severity (checked first).
    pub high_severity_keywords: Vec<String>,
    /// Keywords that mark Low severity (checked after High).
    pub low_severity_keywords: Vec<String>,
    /// Resolution scoring increments and bucket thresholds.
    pub resolution: ResolutionConfig,
}

/// Resolution scoring configuration.
#[derive(Debug, Clone)]
pub struct ResolutionConfig {
    /// Added once when a message has any thread replies.
    pub thread_increment: f32,
    /// Added per reaction.
    pub reaction_increment: f32,
    /// Scores at or above this bucket as Resolved.
    pub resolved_threshold: f32,
    /// Scores at or above this (but below resolved) bucket as Likely.
    pub likely_threshold: f32,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            interest_workflows: HashSet::from([Workflow::Nucleus, Workflow::TrustView]),
            high_severity_keywords: vec![
                "urgent".to_string(),
                "critical".to_string(),
                "p1".to_string(),
                "sev1".to_string(),
                "emergency".to_string(),
            ],
            low_severity_keywords: vec![
                "minor".to_string(),
                "enhancement".to_string(),
                "low priority".to_string(),
                "nice to have".to_string(),
            ],
            resolution: ResolutionConfig::default(),
        }
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            thread_increment: 0.3,
            reaction_increment: 0.1,
            resolved_threshold: 0.8,
            likely_threshold: 0.6,
        }
    }
}

impl DigestConfig {
    /// Check that overrides are internally consistent.
    ///
    /// A bad override is rejected here so the pure pipeline never has to
    /// handle one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.resolution;

        for (key, value) in [
            ("resolution.thread_increment", r.thread_increment),
            ("resolution.reaction_increment", r.reaction_increment),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "increment must be a non-negative finite number".to_string(),
                });
            }
        }

        for (key, value) in [
            ("resolution.resolved_threshold", r.resolved_threshold),
            ("resolution.likely_threshold", r.likely_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "threshold must be within [0.0, 1.0]".to_string(),
                });
            }
        }

        if r.likely_threshold >= r.resolved_threshold {
            return Err(ConfigError::InvalidValue {
                key: "resolution.likely_threshold".to_string(),
                message: "must be below resolution.resolved_threshold".to_string(),
            });
        }

        Ok(())
    }
}
