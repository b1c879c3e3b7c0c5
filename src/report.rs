use anyhow::*;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::game::quiz::definition::{Choice, Question};
use crate::game::quiz::Session;

#[derive(Serialize)]
struct ResultRow<'a> {
    attempt: usize,
    question: &'a str,
    chosen: Choice,
    correct: bool,
    answer: Choice,
}

pub fn write_results<W: Write>(writer: W, session: &Session) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (index, event) in session.history().iter().enumerate() {
        let question = &session.questions()[event.question_index];
        csv_writer.serialize(ResultRow {
            attempt: index + 1,
            question: &question.stem,
            chosen: event.chosen,
            correct: event.is_correct,
            answer: question.answer,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_results(path: &Path, session: &Session) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not create results file {}", path.display()))?;
    write_results(file, session)
}

pub fn write_questions<W: Write>(mut writer: W, questions: &[Question]) -> Result<()> {
    for (index, question) in questions.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        write!(writer, "{}", question.to_block())?;
    }
    Ok(())
}

pub fn save_questions(path: &Path, questions: &[Question]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not create quiz file {}", path.display()))?;
    write_questions(file, questions)
}
