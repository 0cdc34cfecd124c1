use crate::models::question::{Mcq, OptionKey};
use std::collections::BTreeMap;

fn mcq(question: &str, options: [(OptionKey, &str); 4], correct: OptionKey) -> Mcq {
    Mcq {
        question: question.to_string(),
        options: BTreeMap::from(options.map(|(k, v)| (k, v.to_string()))),
        correct,
    }
}

/// The fixed substitute set used whenever generation cannot produce enough
/// usable questions. General technical knowledge, not stack-specific.
pub fn fallback_mcqs() -> Vec<Mcq> {
    vec![
        mcq(
            "What is the primary purpose of version control systems like Git?",
            [
                (OptionKey::A, "To compile code"),
                (OptionKey::B, "To track changes in code over time"),
                (OptionKey::C, "To deploy applications"),
                (OptionKey::D, "To test code quality"),
            ],
            OptionKey::B,
        ),
        mcq(
            "Which HTTP method is typically used to retrieve data from a server?",
            [
                (OptionKey::A, "POST"),
                (OptionKey::B, "PUT"),
                (OptionKey::C, "GET"),
                (OptionKey::D, "DELETE"),
            ],
            OptionKey::C,
        ),
        mcq(
            "What does API stand for?",
            [
                (OptionKey::A, "Application Programming Interface"),
                (OptionKey::B, "Advanced Programming Instructions"),
                (OptionKey::C, "Automated Program Integration"),
                (OptionKey::D, "Application Process Integration"),
            ],
            OptionKey::A,
        ),
        mcq(
            "What is the difference between == and === in JavaScript?",
            [
                (OptionKey::A, "No difference"),
                (OptionKey::B, "== checks type and value, === checks only value"),
                (OptionKey::C, "== checks only value, === checks type and value"),
                (OptionKey::D, "=== is used for assignment"),
            ],
            OptionKey::C,
        ),
        mcq(
            "Which database type is MongoDB?",
            [
                (OptionKey::A, "Relational database"),
                (OptionKey::B, "Graph database"),
                (OptionKey::C, "Document database (NoSQL)"),
                (OptionKey::D, "Key-value database"),
            ],
            OptionKey::C,
        ),
    ]
}
