//! Interactive collection of the four answers.
//!
//! On a terminal each field re-prompts until it validates. When stdin is
//! redirected the collector reads one line per field instead, and the first
//! invalid value becomes a fatal error, which keeps the tool scriptable.

use std::io::{BufRead, IsTerminal};

use dialoguer::{Error as DialoguerError, Input};

use crate::answers::{self, AnswerSet};
use crate::config::Config;
use crate::error::AppError;

/// Collect one answer set, asking the four questions in order.
pub fn collect(config: &Config) -> Result<AnswerSet, AppError> {
    if std::io::stdin().is_terminal() {
        collect_interactive(config)
    } else {
        let stdin = std::io::stdin();
        collect_from_reader(config, &mut stdin.lock())
    }
}

fn collect_interactive(config: &Config) -> Result<AnswerSet, AppError> {
    let root = config.boilerplates_root.clone();
    let name = ask(
        Input::new()
            .with_prompt("Boilerplate name (ex. my-boilerplate)")
            .allow_empty(true)
            .validate_with(move |input: &String| answers::validate_name(input, &root)),
    )?;

    let stack = ask(
        Input::new()
            .with_prompt("Featured stack (ex. Typescript, React, ...)")
            .allow_empty(true)
            .validate_with(|input: &String| answers::validate_stack(input)),
    )?;

    let repo = ask(
        Input::new()
            .with_prompt("GitHub repository")
            .allow_empty(true)
            .validate_with(|input: &String| answers::validate_repo(input)),
    )?;

    let scripts = ask(
        Input::new().with_prompt("NPM \"scripts\" (comma-separated)").allow_empty(true),
    )?;

    AnswerSet::new(&name, &stack, &repo, &scripts)
}

fn ask(input: Input<'_, String>) -> Result<String, AppError> {
    match input.interact_text() {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == std::io::ErrorKind::Interrupted => {
            Err(AppError::Cancelled)
        }
        Err(err) => Err(AppError::validation(format!("Failed to read input: {err}"))),
    }
}

/// Line-per-field collection for redirected stdin.
fn collect_from_reader<R: BufRead>(
    config: &Config,
    reader: &mut R,
) -> Result<AnswerSet, AppError> {
    let name = read_answer(reader)?;
    answers::validate_name(&name, &config.boilerplates_root)?;

    let stack = read_answer(reader)?;
    let repo = read_answer(reader)?;
    let scripts = read_answer(reader)?;

    AnswerSet::new(&name, &stack, &repo, &scripts)
}

fn read_answer<R: BufRead>(reader: &mut R) -> Result<String, AppError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(AppError::Cancelled);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
