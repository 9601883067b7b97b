//! Generation prompt composition.
//!
//! [`compose`] renders the user question, the inline file content, and the
//! retrieved passages into the single user message sent to the generation
//! model. The output is a pure function of the three inputs. Nothing is
//! truncated or re-ranked here: a prompt that overflows the model's context
//! window fails at generation time.
//!
//! ```text
//! User Question: {question}
//!
//! File Content: {file_content}
//!
//! Relevant Legal Documents:
//! {passage 1}
//!
//! {passage 2}
//!
//! Answer:
//! ```

/// Separator placed between retrieved passages.
pub const PASSAGE_SEPARATOR: &str = "\n\n";

/// Render the generation prompt.
pub fn compose(question: &str, file_content: &str, retrieved: &[String]) -> String {
    format!(
        "User Question: {}\n\nFile Content: {}\n\nRelevant Legal Documents:\n{}\n\nAnswer:",
        question,
        file_content,
        retrieved.join(PASSAGE_SEPARATOR)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_template() {
        let prompt = compose(
            "Can the landlord enter?",
            "Clause 9: access",
            &["Entry requires notice.".to_string(), "Notice is 24h.".to_string()],
        );
        assert_eq!(
            prompt,
            "User Question: Can the landlord enter?\n\n\
             File Content: Clause 9: access\n\n\
             Relevant Legal Documents:\n\
             Entry requires notice.\n\nNotice is 24h.\n\n\
             Answer:"
        );
    }

    #[test]
    fn test_empty_retrieval_leaves_section_empty() {
        let prompt = compose("What is a tort?", "", &[]);
        assert!(prompt.contains("Relevant Legal Documents:\n\n\nAnswer:"));
        assert!(prompt.starts_with("User Question: What is a tort?"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn test_deterministic() {
        let retrieved = vec!["a".to_string(), "b".to_string()];
        assert_eq!(compose("q", "c", &retrieved), compose("q", "c", &retrieved));
    }

    #[test]
    fn test_no_truncation() {
        let long = "x".repeat(100_000);
        let prompt = compose("q", &long, &[]);
        assert!(prompt.contains(&long));
    }
}
