use crate::models::question::{Mcq, OptionKey};
use std::collections::BTreeMap;

/// A question set never exceeds five items; anything past the fifth
/// accepted block is dropped.
pub const MAX_QUESTIONS: usize = 5;

/// What a single line of model output is.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    QuestionLabel(&'a str),
    Option(OptionKey, &'a str),
    Answer(OptionKey),
    Other,
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(text) = question_label(line) {
        return Line::QuestionLabel(text);
    }
    if let Some((key, text)) = option_line(line) {
        return Line::Option(key, text);
    }
    if let Some(key) = answer_line(line) {
        return Line::Answer(key);
    }
    Line::Other
}

/// `Question` optionally followed by a number, or `Q` followed by digits,
/// optionally a colon; the rest of the line is the question text.
fn question_label(line: &str) -> Option<&str> {
    let rest = if line
        .get(..8)
        .is_some_and(|p| p.eq_ignore_ascii_case("question"))
    {
        &line[8..]
    } else {
        let tail = line.strip_prefix(['Q', 'q'])?;
        if !tail.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        tail
    };
    let rest = rest
        .trim_start()
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start();
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    Some(rest.trim())
}

/// `<letter>) <text>` with the letter in A-D, either case.
fn option_line(line: &str) -> Option<(OptionKey, &str)> {
    let mut chars = line.chars();
    let key = OptionKey::from_char(chars.next()?)?;
    let text = chars.as_str().strip_prefix(')')?;
    Some((key, text.trim()))
}

/// `Answer: <letter>`, case-insensitive; text past the letter is ignored.
fn answer_line(line: &str) -> Option<OptionKey> {
    if !line
        .get(..6)
        .is_some_and(|p| p.eq_ignore_ascii_case("answer"))
    {
        return None;
    }
    let rest = line[6..].trim_start().strip_prefix(':')?;
    OptionKey::from_char(rest.trim_start().chars().next()?)
}

#[derive(Debug)]
struct BlockBuilder {
    question: String,
    options: BTreeMap<OptionKey, String>,
    answer: Option<OptionKey>,
}

fn finish(block: &mut Option<BlockBuilder>, accepted: &mut Vec<Mcq>) {
    let Some(built) = block.take() else { return };
    let Some(correct) = built.answer else { return };
    let mcq = Mcq {
        question: built.question,
        options: built.options,
        correct,
    };
    if mcq.is_well_formed() {
        accepted.push(mcq);
    }
}

/// Extracts up to five validated questions from raw model output. Malformed
/// blocks are dropped, never reported; any input at all yields a (possibly
/// empty) list. The tech stack is context for the log line only.
pub fn parse_mcqs(raw: &str, tech_stack: &str) -> Vec<Mcq> {
    let mut accepted = Vec::new();
    let mut block: Option<BlockBuilder> = None;

    for line in raw.lines() {
        match classify(line) {
            Line::Blank => finish(&mut block, &mut accepted),
            Line::QuestionLabel(text) => {
                finish(&mut block, &mut accepted);
                // A label with no text discards the whole block: option and
                // answer lines that follow have no question to attach to.
                block = (!text.is_empty()).then(|| BlockBuilder {
                    question: text.to_string(),
                    options: BTreeMap::new(),
                    answer: None,
                });
            }
            Line::Option(key, text) => {
                if let Some(b) = block.as_mut() {
                    // Duplicate letters within a block: last write wins.
                    b.options.insert(key, text.to_string());
                }
            }
            Line::Answer(key) => {
                if let Some(b) = block.as_mut() {
                    if b.answer.is_none() {
                        b.answer = Some(key);
                    }
                }
            }
            Line::Other => {}
        }
    }
    finish(&mut block, &mut accepted);

    accepted.truncate(MAX_QUESTIONS);
    tracing::debug!(
        count = accepted.len(),
        tech_stack,
        "parsed multiple-choice questions from model output"
    );
    accepted
}
