use anyhow::*;
use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

pub mod question;

#[cfg(test)]
mod tests;

pub use question::{collapse_whitespace, normalize_stem, Choice, Question};

lazy_static! {
    static ref BLOCK_REGEX: Regex = Regex::new(
        r"(?ms)^(?:[Qq]\s*)?(\d+)\s*[:.]\s*(.*?)\n\s*A\s*\)\s*(.*?)\n\s*B\s*\)\s*(.*?)\n\s*C\s*\)\s*(.*?)\n\s*D\s*\)\s*(.*?)\n\s*(?i:answer)\s*:\s*([A-Da-d])\s*$"
    )
    .unwrap();
    static ref BLOCK_START_REGEX: Regex = Regex::new(r"^(?:[Qq]\s*)?\d+\s*[:.]").unwrap();
}

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let text = fs::read_to_string(source)
            .with_context(|| format!("Could not read quiz file {}", source.display()))?;
        Ok(QuizDefinition::parse(&text))
    }

    // Absence of matches is a normal outcome, never an error. Blocks that do
    // not terminate with a valid answer line are dropped, not guessed at.
    pub fn parse(text: &str) -> QuizDefinition {
        let mut questions = scan(text);
        if questions.is_empty() {
            questions = rescan_chunks(text);
        }
        QuizDefinition { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

fn scan(text: &str) -> Vec<Question> {
    BLOCK_REGEX
        .captures_iter(text)
        .filter_map(|captures| question_from_captures(&captures))
        .collect()
}

// Recovery strategy for files with inconsistent blank-line conventions:
// cut the text at every line that looks like a question header, then run the
// same block matcher inside each chunk, keeping at most one match per chunk.
fn rescan_chunks(text: &str) -> Vec<Question> {
    split_chunks(text)
        .into_iter()
        .filter_map(|chunk| {
            BLOCK_REGEX
                .captures(chunk)
                .and_then(|captures| question_from_captures(&captures))
        })
        .collect()
}

fn split_chunks(text: &str) -> Vec<&str> {
    let mut starts = vec![0];
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if offset > 0 && BLOCK_START_REGEX.is_match(line) {
            starts.push(offset);
        }
        offset += line.len();
    }

    let mut chunks = Vec::new();
    for (index, &start) in starts.iter().enumerate() {
        let end = starts.get(index + 1).copied().unwrap_or_else(|| text.len());
        chunks.push(&text[start..end]);
    }
    chunks
}

fn question_from_captures(captures: &Captures<'_>) -> Option<Question> {
    let ordinal: u32 = captures[1].parse().unwrap_or(0);
    let answer = Choice::parse(&captures[7])?;
    let question = Question::new(
        ordinal,
        &captures[2],
        [&captures[3], &captures[4], &captures[5], &captures[6]],
        answer,
    );
    if question.is_none() {
        debug!("Dropping block {}: stem is empty after normalization", &captures[1]);
    }
    question
}
