use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    static ref VARIANT_TAG_REGEX: Regex = Regex::new(r"(?i)\(variant[^)]*\)").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_owned()
}

// Variant tags carry no meaning and must never reach display or exports.
pub fn normalize_stem(stem: &str) -> String {
    collapse_whitespace(&VARIANT_TAG_REGEX.replace_all(stem, ""))
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    pub fn parse(token: &str) -> Option<Choice> {
        match token.trim().trim_end_matches(')').trim().to_uppercase().as_str() {
            "A" => Some(Choice::A),
            "B" => Some(Choice::B),
            "C" => Some(Choice::C),
            "D" => Some(Choice::D),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub ordinal: u32,
    pub stem: String,
    pub stem_raw: String,
    options: [String; 4],
    pub answer: Choice,
}

impl Question {
    pub fn new(ordinal: u32, stem: &str, options: [&str; 4], answer: Choice) -> Option<Question> {
        let normalized = normalize_stem(stem);
        if normalized.is_empty() {
            return None;
        }
        let [a, b, c, d] = options;
        Some(Question {
            ordinal,
            stem: normalized,
            stem_raw: collapse_whitespace(stem),
            options: [
                collapse_whitespace(a),
                collapse_whitespace(b),
                collapse_whitespace(c),
                collapse_whitespace(d),
            ],
            answer,
        })
    }

    pub fn option(&self, choice: Choice) -> &str {
        &self.options[choice as usize]
    }

    pub fn dedupe_key(&self) -> String {
        self.stem.to_lowercase()
    }

    pub fn to_block(&self) -> String {
        let mut block = format!("Q{}: {}\n", self.ordinal, self.stem_raw);
        for choice in &Choice::ALL {
            block.push_str(&format!("{}) {}\n", choice, self.option(*choice)));
        }
        block.push_str(&format!("Answer: {}\n", self.answer));
        block
    }
}
