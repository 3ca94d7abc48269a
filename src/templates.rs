//! Template storage and rendering for the generated entry files.

use std::fs;
use std::io;
use std::path::PathBuf;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, Value};

use crate::error::AppError;
use crate::format::{self, FormatOptions};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Template name of the per-entry index artifact.
pub const ENTRY_INDEX: &str = "index.ts";

/// Template name of the per-entry modifier artifact.
pub const ENTRY_MODIFIER: &str = "modifier.ts";

/// Suffix identifying template sources; stores key templates by the name of
/// the file they generate, without the suffix.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Read access to template sources, keyed by the artifact they generate.
pub trait TemplateStore {
    /// Load the template source that generates `name`.
    fn load(&self, name: &str) -> Result<String, AppError>;
}

/// Templates baked into the binary at compile time.
///
/// The template set travels inside the installed binary, so rendering never
/// depends on files next to the operator's working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, name: &str) -> Result<String, AppError> {
        let file = TEMPLATES_DIR
            .get_file(format!("{name}{TEMPLATE_SUFFIX}"))
            .ok_or_else(|| AppError::MissingTemplate(name.to_string()))?;
        let source = file.contents_utf8().ok_or_else(|| AppError::Render {
            name: name.to_string(),
            details: "template is not valid UTF-8".to_string(),
        })?;
        Ok(source.to_string())
    }
}

/// Templates loaded from a directory on disk.
///
/// Lets embedders and tests swap in their own template set without
/// recompiling.
#[derive(Debug, Clone)]
pub struct DirTemplates {
    root: PathBuf,
}

impl DirTemplates {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateStore for DirTemplates {
    fn load(&self, name: &str) -> Result<String, AppError> {
        let path = self.root.join(format!("{name}{TEMPLATE_SUFFIX}"));
        match fs::read_to_string(&path) {
            Ok(source) => Ok(source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(AppError::MissingTemplate(name.to_string()))
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }
}

/// Render the template for `name` with `context` and format the result.
///
/// A `js_escape` filter is registered for substitutions that land inside
/// double-quoted string literals; see [`format::escape_js_string`].
pub fn render<T: TemplateStore>(
    store: &T,
    name: &str,
    context: &Value,
    options: &FormatOptions,
) -> Result<String, AppError> {
    let source = store.load(name)?;

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_filter("js_escape", |value: String| format::escape_js_string(&value));
    env.add_template(name, &source).map_err(|e| AppError::Render {
        name: name.to_string(),
        details: format!("Failed to register template: {e}"),
    })?;

    let template = env.get_template(name).map_err(|e| AppError::Render {
        name: name.to_string(),
        details: format!("Failed to load template: {e}"),
    })?;

    let rendered = template.render(context).map_err(|e| AppError::Render {
        name: name.to_string(),
        details: format!("Failed to render: {e}"),
    })?;

    Ok(format::format_source(&rendered, options))
}
