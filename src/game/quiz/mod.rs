use rand::seq::SliceRandom;
use rand::Rng;

pub mod definition;
pub mod set;


use definition::{Choice, Question};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnswerEvent {
    pub position: usize,
    pub question_index: usize,
    pub chosen: Choice,
    pub is_correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Submission {
    Recorded(AnswerEvent),
    Repeat(AnswerEvent),
    NoSelection,
    NoQuestion,
}

// One active session per process. `position == order.len()` signals
// completion; history is append-only with at most one event per position.
#[derive(Debug, Default)]
pub struct Session {
    questions: Vec<Question>,
    order: Vec<usize>,
    position: usize,
    history: Vec<AnswerEvent>,
}

impl Session {
    pub fn new() -> Session {
        Default::default()
    }

    pub fn load<R>(&mut self, questions: Vec<Question>, shuffle: bool, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let mut order: Vec<usize> = (0..questions.len()).collect();
        if shuffle {
            order.shuffle(rng);
        }
        self.questions = questions;
        self.order = order;
        self.position = 0;
        self.history.clear();
    }

    // Restart over the same questions, in declaration order, without reparsing.
    pub fn reset(&mut self) {
        self.order = (0..self.questions.len()).collect();
        self.position = 0;
        self.history.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.order.is_empty() && self.position == self.order.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.order
            .get(self.position)
            .map(|&index| &self.questions[index])
    }

    pub fn submit(&mut self, chosen: Option<Choice>) -> Submission {
        let question_index = match self.order.get(self.position) {
            Some(&index) => index,
            None => return Submission::NoQuestion,
        };

        // Repeated submits at one position return the recorded result and
        // leave history alone, so double clicks cannot double-count.
        if let Some(event) = self.history.iter().find(|e| e.position == self.position) {
            return Submission::Repeat(*event);
        }

        let chosen = match chosen {
            Some(choice) => choice,
            None => return Submission::NoSelection,
        };

        let event = AnswerEvent {
            position: self.position,
            question_index,
            chosen,
            is_correct: chosen == self.questions[question_index].answer,
        };
        self.history.push(event);
        Submission::Recorded(event)
    }

    pub fn advance(&mut self) -> Option<&Question> {
        if self.position < self.order.len() {
            self.position += 1;
        }
        self.current_question()
    }

    pub fn reveal(&self) -> Option<(Choice, &str)> {
        self.current_question()
            .map(|question| (question.answer, question.option(question.answer)))
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn history(&self) -> &[AnswerEvent] {
        &self.history
    }

    pub fn correct_count(&self) -> usize {
        self.history.iter().filter(|event| event.is_correct).count()
    }

    pub fn accuracy(&self) -> Option<f64> {
        if self.history.is_empty() {
            return None;
        }
        Some(self.correct_count() as f64 / self.history.len() as f64)
    }

    pub fn running_accuracy(&self) -> Vec<f64> {
        let mut correct = 0;
        self.history
            .iter()
            .enumerate()
            .map(|(index, event)| {
                if event.is_correct {
                    correct += 1;
                }
                correct as f64 / (index + 1) as f64
            })
            .collect()
    }
}
