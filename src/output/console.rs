use parking_lot::RwLock;
use std::io::{self, Write};
use std::sync::Arc;

use crate::game::quiz::definition::Choice;
use crate::output::{GameOutput, Message};

const HELP_TEXT: &str = "Commands:
  load FILE     load a quiz file (bare names resolve against the library)
  default       load the built-in sample quiz
  library       list quiz files in the library directory
  a/b/c/d       answer the current question (also: answer LETTER)
  next          move to the next question
  reveal        show the correct answer without answering
  score         show score and running accuracy
  reset         restart the loaded quiz from the first question
  export FILE   write the answer history as CSV
  save FILE     write the loaded question set as quiz text
  help          show this message
  quit          leave";

#[derive(Clone)]
pub struct ConsoleOutput {
    out: Arc<RwLock<io::Stdout>>,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput {
            out: Arc::new(RwLock::new(io::stdout())),
        }
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            QuizLoaded { source, count } => {
                format!("📚 Loaded {} questions from {}.", count, source)
            }
            ParseEmpty(source) => format!(
                "⚠️ No questions recognized in {}. Type `default` to use the built-in quiz.",
                source
            ),
            QuestionBegins {
                question,
                number,
                total,
            } => {
                let mut text = format!("\nQuestion {} of {}\n{}\n", number, total, question.stem);
                for choice in &Choice::ALL {
                    text.push_str(&format!("  {}) {}\n", choice, question.option(*choice)));
                }
                text
            }
            AnswerCorrect(answer) => format!("✅ Correct! The answer is {}.", answer),
            AnswerIncorrect { chosen, correct } => format!(
                "❌ {} is incorrect. The correct answer is {}.",
                chosen, correct
            ),
            AnswerReveal { answer, text } => {
                format!("💡 The correct answer is {}) {}", answer, text)
            }
            NoSelection => "Pick an answer first: a, b, c or d.".into(),
            NoCurrentQuestion => {
                "There is no question to act on. Load a quiz with `load` or `default`.".into()
            }
            QuizComplete { total } => format!(
                "🎉 Quiz complete! You went through all {} questions. Type `score` for a recap or `reset` to start over.",
                total
            ),
            ScoreRecap {
                correct,
                answered,
                accuracy,
                running_accuracy,
            } => {
                let accuracy = match accuracy {
                    Some(accuracy) => accuracy,
                    None => return "No answers yet.".into(),
                };
                let mut text = format!(
                    "📈 Score: {}/{} ({:.1}%)",
                    correct,
                    answered,
                    accuracy * 100.0
                );
                let running = running_accuracy
                    .iter()
                    .map(|accuracy| format!("{:.0}%", accuracy * 100.0))
                    .collect::<Vec<String>>()
                    .join(" ");
                text.push_str(&format!("\nRunning accuracy: {}", running));
                text
            }
            SessionReset => "🔄 Session reset.".into(),
            LibraryListing { dir, files } => {
                if files.is_empty() {
                    return format!(
                        "No quiz files in {}. Drop .txt files there or set QUIZ_DIR.",
                        dir.display()
                    );
                }
                let mut text = format!("Quiz files in {}:", dir.display());
                for file in files {
                    text.push_str(&format!("\n  {}", file));
                }
                text
            }
            ResultsSaved(path) => format!("💾 Results written to {}", path.display()),
            QuestionsSaved { path, count } => {
                format!("💾 Saved {} questions to {}", count, path.display())
            }
            Help => HELP_TEXT.into(),
        }
    }
}

impl GameOutput for ConsoleOutput {
    fn say(&self, message: &Message) {
        let text = self.interpret_message(message);
        let mut out = self.out.write();
        let _ = writeln!(out, "{}", text);
    }
}
