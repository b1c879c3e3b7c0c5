use anyhow::*;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

pub mod quiz;
pub mod settings;


use crate::library;
use crate::output::{GameOutput, Message};
use crate::report;
use quiz::definition::{Choice, QuizDefinition};
use quiz::set::{self, SetOptions};
use quiz::{Session, Submission};
use settings::Settings;

pub struct Game<O> {
    settings: Settings,
    session: Session,
    rng: StdRng,
    output: O,
}

impl<O: GameOutput> Game<O> {
    pub fn new(settings: Settings, output: O) -> Game<O> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game {
            settings,
            session: Session::new(),
            rng,
            output,
        }
    }

    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let definition = QuizDefinition::open(path)?;
        self.load_definition(definition, &path.display().to_string());
        Ok(())
    }

    pub fn load_text(&mut self, text: &str, source: &str) {
        self.load_definition(QuizDefinition::parse(text), source);
    }

    pub fn load_default(&mut self) {
        self.load_text(library::SAMPLE_QUIZ, "the built-in quiz");
    }

    fn load_definition(&mut self, definition: QuizDefinition, source: &str) {
        if definition.questions().is_empty() {
            warn!("No question blocks recognized in {}", source);
            self.output.say(&Message::ParseEmpty(source.to_owned()));
        }
        let records = definition.into_questions();

        let options = self.set_options();
        let questions = set::build(records, &options, &mut self.rng);
        info!("Loaded {} questions from {}", questions.len(), source);

        let count = questions.len();
        self.session
            .load(questions, self.settings.shuffle, &mut self.rng);
        self.output.say(&Message::QuizLoaded {
            source: source.to_owned(),
            count,
        });
        self.show_current();
    }

    fn set_options(&self) -> SetOptions {
        let mut options = SetOptions {
            dedupe: self.settings.dedupe,
            cap: self.settings.max_questions,
            sample: self.settings.sample_size,
        };
        // At most one size limit per load; sampling wins over truncation.
        if options.cap.is_some() && options.sample.is_some() {
            warn!("Both QUIZ_MAX_QUESTIONS and QUIZ_SAMPLE_SIZE are set; sampling wins");
            options.cap = None;
        }
        options
    }

    pub fn submit(&mut self, chosen: Option<Choice>) {
        match self.session.submit(chosen) {
            Submission::Recorded(event) | Submission::Repeat(event) => {
                let correct = self.session.questions()[event.question_index].answer;
                if event.is_correct {
                    self.output.say(&Message::AnswerCorrect(correct));
                } else {
                    self.output.say(&Message::AnswerIncorrect {
                        chosen: event.chosen,
                        correct,
                    });
                }
            }
            Submission::NoSelection => self.output.say(&Message::NoSelection),
            Submission::NoQuestion => self.output.say(&Message::NoCurrentQuestion),
        }
    }

    pub fn advance(&mut self) {
        if self.session.current_question().is_none() {
            self.output.say(&Message::NoCurrentQuestion);
            return;
        }
        self.session.advance();
        if self.session.is_complete() {
            self.output.say(&Message::QuizComplete {
                total: self.session.total(),
            });
        } else {
            self.show_current();
        }
    }

    pub fn reveal(&self) {
        match self.session.reveal() {
            Some((answer, text)) => self.output.say(&Message::AnswerReveal {
                answer,
                text: text.to_owned(),
            }),
            None => self.output.say(&Message::NoCurrentQuestion),
        }
    }

    pub fn recap(&self) {
        self.output.say(&Message::ScoreRecap {
            correct: self.session.correct_count(),
            answered: self.session.history().len(),
            accuracy: self.session.accuracy(),
            running_accuracy: self.session.running_accuracy(),
        });
    }

    pub fn reset(&mut self) {
        if self.session.is_empty() {
            self.output.say(&Message::NoCurrentQuestion);
            return;
        }
        self.session.reset();
        self.output.say(&Message::SessionReset);
        self.show_current();
    }

    pub fn export_results(&self, path: &Path) -> Result<()> {
        report::save_results(path, &self.session)?;
        self.output.say(&Message::ResultsSaved(path.to_owned()));
        Ok(())
    }

    pub fn save_questions(&self, path: &Path) -> Result<()> {
        report::save_questions(path, self.session.questions())?;
        self.output.say(&Message::QuestionsSaved {
            path: path.to_owned(),
            count: self.session.questions().len(),
        });
        Ok(())
    }

    pub fn list_library(&self) -> Result<()> {
        let dir = library::quiz_dir()?;
        let files = library::list_quiz_files()?;
        let names = files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        self.output.say(&Message::LibraryListing { dir, files: names });
        Ok(())
    }

    pub fn help(&self) {
        self.output.say(&Message::Help);
    }

    fn show_current(&self) {
        if let Some(question) = self.session.current_question() {
            self.output.say(&Message::QuestionBegins {
                question: question.clone(),
                number: self.session.position() + 1,
                total: self.session.total(),
            });
        }
    }
}
