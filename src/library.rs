use anyhow::{Context, Result};
use directories_next::BaseDirs;
use log::debug;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SAMPLE_QUIZ: &str = "\
Q1: Which mineral primarily strengthens bone? (variant 4-7)
A) Sodium
B) Calcium
C) Potassium
D) Iron
Answer: B

Q2: Rising T3 / T4 typically causes pituitary TSH to: (variant 10-8)
A) Increase
B) Decrease
C) No change
D) Oscillate
Answer: B

Q3: Which ion binds troponin to initiate contraction? (variant 6-2)
A) Na+
B) K+
C) Ca2+
D) Cl-
Answer: C

Q4: Rising T3 / T4 typically causes pituitary TSH to: (variant 10-14)
A) Increase
B) Decrease
C) No change
D) Oscillate
Answer: B

Q5: Which ion binds troponin to initiate contraction? (variant 6-12)
A) Na+
B) K+
C) Ca2+
D) Cl-
Answer: C
";

pub fn quiz_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("QUIZ_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("quizdrill");
    Ok(dir)
}

pub fn list_quiz_files() -> Result<Vec<PathBuf>> {
    let dir = quiz_dir()?;
    let mut files = Vec::new();
    if !dir.is_dir() {
        debug!("Quiz directory {} does not exist", dir.display());
        return Ok(files);
    }
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        let is_quiz = path
            .extension()
            .map(|extension| extension.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);
        if path.is_file() && is_quiz {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// Bare names refer to library entries; anything that exists as given wins.
pub fn resolve(name: &str) -> PathBuf {
    let direct = PathBuf::from(name);
    if direct.exists() {
        return direct;
    }
    match quiz_dir() {
        Ok(dir) => {
            let mut path = dir.join(name);
            if path.extension().is_none() {
                path.set_extension("txt");
            }
            path
        }
        Err(_) => direct,
    }
}
