use anyhow::*;
use log::debug;
use std::path::PathBuf;

use crate::game::quiz::definition::Choice;
use crate::game::Game;
use crate::library;
use crate::output::GameOutput;


#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Load(String),
    Default,
    Library,
    Answer(Option<Choice>),
    Next,
    Reveal,
    Score,
    Reset,
    Export(PathBuf),
    Save(PathBuf),
    Help,
    Quit,
}

pub enum Flow {
    Continue,
    Quit,
}

pub fn parse(line: &str) -> Option<Command> {
    let mut tokens = line.trim().splitn(2, char::is_whitespace);
    let keyword = tokens.next()?.to_lowercase();
    let argument = tokens
        .next()
        .map(|argument| argument.trim().to_owned())
        .filter(|argument| !argument.is_empty());

    let command = match keyword.as_str() {
        "load" | "open" => Command::Load(argument?),
        "default" => Command::Default,
        "library" | "ls" => Command::Library,
        "answer" | "submit" => Command::Answer(argument.as_deref().and_then(Choice::parse)),
        "a" | "b" | "c" | "d" => Command::Answer(Choice::parse(&keyword)),
        "next" | "n" => Command::Next,
        "reveal" => Command::Reveal,
        "score" => Command::Score,
        "reset" => Command::Reset,
        "export" => Command::Export(PathBuf::from(argument?)),
        "save" => Command::Save(PathBuf::from(argument?)),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

pub fn dispatch<O: GameOutput>(game: &mut Game<O>, command: Command) -> Result<Flow> {
    debug!("Dispatching {:?}", command);
    match command {
        Command::Load(name) => game.load_file(&library::resolve(&name))?,
        Command::Default => game.load_default(),
        Command::Library => game.list_library()?,
        Command::Answer(choice) => game.submit(choice),
        Command::Next => game.advance(),
        Command::Reveal => game.reveal(),
        Command::Score => game.recap(),
        Command::Reset => game.reset(),
        Command::Export(path) => game.export_results(&path)?,
        Command::Save(path) => game.save_questions(&path)?,
        Command::Help => game.help(),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
