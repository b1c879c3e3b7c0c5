use log::warn;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Settings {
    pub dedupe: bool,
    pub shuffle: bool,
    pub max_questions: Option<usize>,
    pub sample_size: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            dedupe: true,
            shuffle: true,
            max_questions: None,
            sample_size: None,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Settings {
        let mut settings = Settings::default();
        if let Some(dedupe) = env_flag("QUIZ_DEDUPE") {
            settings.dedupe = dedupe;
        }
        if let Some(shuffle) = env_flag("QUIZ_SHUFFLE") {
            settings.shuffle = shuffle;
        }
        settings.max_questions = env_number("QUIZ_MAX_QUESTIONS");
        settings.sample_size = env_number("QUIZ_SAMPLE_SIZE");
        settings.seed = env_number("QUIZ_SEED");
        settings
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.trim().to_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Some(true),
        "0" | "off" | "false" | "no" => Some(false),
        other => {
            warn!("Ignoring {}: expected on or off, got {:?}", name, other);
            None
        }
    }
}

fn env_number<T: FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.trim().parse() {
        Ok(number) => Some(number),
        Err(_) => {
            warn!("Ignoring {}: expected a number, got {:?}", name, value);
            None
        }
    }
}
