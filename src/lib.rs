//! boilersmith adds a new boilerplate to the registry checkout it runs in.
//!
//! A run asks the operator four questions (name, featured stack, GitHub
//! repository, npm scripts), renders the entry's `index.ts` and
//! `modifier.ts` from the embedded templates, creates the entry directory,
//! and rebuilds the aggregate `index.ts` that lists every entry under the
//! boilerplates root.

pub mod answers;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod prompt;
pub mod templates;
pub mod writer;

use std::path::PathBuf;

use minijinja::{Value, context};

pub use crate::answers::AnswerSet;
pub use crate::config::Config;
pub use crate::error::AppError;
pub use crate::format::FormatOptions;
pub use crate::templates::{DirTemplates, EmbeddedTemplates, TemplateStore};

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    /// Name of the new entry, equal to its directory name under the root.
    pub name: String,
    /// Directory created for the entry.
    pub dir: PathBuf,
    /// Directory names the rebuilt aggregate index lists, in order.
    pub indexed: Vec<String>,
}

/// Run the interactive flow end to end in the current working directory.
pub fn run() -> Result<AddOutcome, AppError> {
    let config = Config::from_cwd()?;
    if !config.boilerplates_root.is_dir() {
        return Err(AppError::RootNotFound(config.boilerplates_root));
    }

    let answers = prompt::collect(&config)?;
    add_boilerplate(&config, &EmbeddedTemplates::new(), &answers)
}

/// Add a boilerplate from an already-validated answer set.
///
/// Both entry artifacts render before anything touches the filesystem, so a
/// missing or broken template cannot leave a partial entry behind. The
/// aggregate index is rebuilt after the entry directory exists and therefore
/// lists the new entry. The three file writes run concurrently.
pub fn add_boilerplate<T: TemplateStore>(
    config: &Config,
    templates: &T,
    answers: &AnswerSet,
) -> Result<AddOutcome, AppError> {
    let options = FormatOptions::default();

    let entry_index = templates::render(
        templates,
        templates::ENTRY_INDEX,
        &Value::from_serialize(answers),
        &options,
    )?;
    let entry_modifier = templates::render(
        templates,
        templates::ENTRY_MODIFIER,
        &context! { repo => &answers.repo },
        &options,
    )?;

    let dir = config.boilerplate_dir(&answers.name);
    writer::create_boilerplate_dir(&dir)?;

    let aggregate = index::build_index(&config.boilerplates_root, &options)?;
    let indexed = index::list_boilerplate_dirs(&config.boilerplates_root)?;

    writer::write_all(&[
        writer::RenderedFile::new(dir.join(templates::ENTRY_INDEX), entry_index),
        writer::RenderedFile::new(dir.join(templates::ENTRY_MODIFIER), entry_modifier),
        writer::RenderedFile::new(config.boilerplates_root.join(index::INDEX_FILE), aggregate),
    ])?;

    Ok(AddOutcome { name: answers.name.clone(), dir, indexed })
}
