//! Message classification pipeline.
//!
//! Every message flows through:
//! 1. `FieldExtractor` — structured fields from free text
//! 2. `workflow::classify` — workflow label
//! 3. `severity::classify` — priority level
//! 4. `resolution::score` / `resolution::bucket` — resolution confidence
//! 5. `question::is_question` — question flag
//!
//! All steps are pure and total: any text, including empty, produces a
//! well-formed `Classification`. `MessageClassifier` composes them.

pub mod classifier;
pub mod extract;
pub mod question;
pub mod resolution;
pub mod severity;
pub mod workflow;
