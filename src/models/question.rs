use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Option letter for a multiple-choice question. The alphabet is fixed:
/// generated and fallback questions alike only ever use A through D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    #[serde(alias = "a")]
    A,
    #[serde(alias = "b")]
    B,
    #[serde(alias = "c")]
    C,
    #[serde(alias = "d")]
    D,
}

impl OptionKey {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(OptionKey::A),
            'B' => Some(OptionKey::B),
            'C' => Some(OptionKey::C),
            'D' => Some(OptionKey::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::A => "A",
            OptionKey::B => "B",
            OptionKey::C => "C",
            OptionKey::D => "D",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One multiple-choice question, held in memory for the duration of an
/// assessment run. Only the resulting answer rows are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mcq {
    pub question: String,
    pub options: BTreeMap<OptionKey, String>,
    pub correct: OptionKey,
}

impl Mcq {
    /// Structural invariants shared by parsed and hand-authored questions:
    /// non-empty text, at least two options, correct letter present in the
    /// options map.
    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty()
            && self.options.len() >= 2
            && self.options.contains_key(&self.correct)
    }
}
