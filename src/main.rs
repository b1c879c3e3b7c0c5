use anyhow::Result;
use log::info;
use std::env;
use std::io::{self, BufRead, Write};

mod commands;
mod game;
mod library;
mod output;
mod report;

use commands::Flow;
use game::settings::Settings;
use game::Game;
use output::console::ConsoleOutput;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let settings = Settings::from_env();
    info!("Starting quizdrill with {:?}", settings);

    let mut game = Game::new(settings, ConsoleOutput::new());
    match env::args().nth(1) {
        Some(name) => game.load_file(&library::resolve(&name))?,
        None => game.load_default(),
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match commands::parse(&line) {
            Some(command) => match commands::dispatch(&mut game, command) {
                Ok(Flow::Continue) => (),
                Ok(Flow::Quit) => break,
                Err(error) => eprintln!("Error: {:#}", error),
            },
            None => {
                if !line.trim().is_empty() {
                    eprintln!("Unknown command: {}. Type `help` for the list.", line.trim());
                }
            }
        }
    }

    Ok(())
}
