//! Question detection.

/// Interrogative openers checked after whitespace trimming.
const QUESTION_PREFIXES: &[&str] = &["how", "what", "why", "can", "could", "is it", "does"];

/// True when the text contains a question mark or opens with an
/// interrogative word.
pub fn is_question(text: &str) -> bool {
    if text.contains('?') {
        return true;
    }
    let trimmed = text.trim().to_lowercase();
    QUESTION_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_mark_anywhere() {
        assert!(is_question("the deploy failed, any ideas?"));
    }

    #[test]
    fn interrogative_prefix() {
        assert!(is_question("How do I request nucleus access"));
        assert!(is_question("  what happened to the dashboard"));
        assert!(is_question("Is it expected that search is slow"));
    }

    #[test]
    fn statements_are_not_questions() {
        assert!(!is_question("deployed the fix to staging"));
        assert!(!is_question(""));
    }

    #[test]
    fn prefix_is_case_insensitive() {
        assert!(is_question("WHY is this broken"));
    }
}
