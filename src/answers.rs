//! Answer validation and normalization for the four collected fields.
//!
//! The collector re-asks on a terminal until these checks pass; redirected
//! input turns the same failures into fatal errors. Either way, an
//! [`AnswerSet`] only ever holds normalized values.

use std::fs;
use std::path::Path;

use console::style;
use serde::Serialize;
use url::Url;

use crate::error::AppError;

/// Longest accepted featured-stack description, in characters.
pub const MAX_STACK_CHARS: usize = 100;

const GITHUB_HTTPS_PREFIX: &str = "https://github.com";

/// The four answers, validated and normalized.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerSet {
    /// Directory name for the new entry, kept exactly as entered.
    pub name: String,
    /// Featured stack description, lowercased.
    pub stack: String,
    /// Canonical HTTPS repository URL.
    pub repo: Url,
    /// Script names in the order they were entered.
    pub scripts: Vec<String>,
}

impl AnswerSet {
    /// Build a set from raw field values, normalizing as it goes.
    ///
    /// The name is checked for shape only; collision against existing
    /// entries needs a registry root and stays with the collector.
    pub fn new(name: &str, stack: &str, repo: &str, scripts: &str) -> Result<Self, AppError> {
        validate_name_shape(name)?;
        validate_stack(stack)?;
        validate_repo(repo)?;
        let repo = normalize_repo(repo)?;

        Ok(Self {
            name: name.to_string(),
            stack: stack.to_lowercase(),
            repo,
            scripts: parse_scripts(scripts),
        })
    }
}

/// Check that `name` can serve as a directory name for a new entry.
///
/// The name also has to camel-case into a usable import identifier for the
/// aggregate index, so it needs at least one letter or digit and the first
/// of those must be a letter.
pub fn validate_name_shape(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::validation("Boilerplate name cannot be empty."));
    }
    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(AppError::validation("Boilerplate name must be a single directory name."));
    }
    match name.chars().find(|c| c.is_alphanumeric()) {
        None => Err(AppError::validation("Boilerplate name must contain letters or numbers.")),
        Some(c) if c.is_numeric() => {
            Err(AppError::validation("Boilerplate name must not start with a number."))
        }
        Some(_) => Ok(()),
    }
}

/// Check `name` for shape and for collision with entries under `root`.
///
/// Collision is case-insensitive and considers every directory entry, not
/// just listed boilerplates, so a name that differs only in case from an
/// existing one is rejected even on a case-sensitive filesystem.
pub fn validate_name(name: &str, root: &Path) -> Result<(), AppError> {
    validate_name_shape(name)?;

    let wanted = name.to_lowercase();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().to_lowercase() == wanted {
            return Err(AppError::validation("This boilerplate name has been used."));
        }
    }
    Ok(())
}

/// Reject stack descriptions longer than [`MAX_STACK_CHARS`] characters.
pub fn validate_stack(stack: &str) -> Result<(), AppError> {
    if stack.chars().count() > MAX_STACK_CHARS {
        return Err(AppError::validation(format!(
            "Please briefly describe the stack, max {}.",
            style("100 characters").italic()
        )));
    }
    Ok(())
}

/// Reject SSH-style repository references up front.
///
/// Everything else is judged by whether [`normalize_repo`] can turn it into
/// a well-formed URL.
pub fn validate_repo(repo: &str) -> Result<(), AppError> {
    if repo.contains("git@github.com") {
        return Err(AppError::validation(repo_form_message()));
    }
    normalize_repo(repo).map(|_| ())
}

/// Canonicalize a repository reference into an HTTPS URL.
///
/// Shorthand like `user/repo` gets the `https://github.com/` host prepended;
/// a trailing `.git` is dropped. The result is a parsed [`Url`], so the
/// canonical form of an already canonical URL is itself.
pub fn normalize_repo(repo: &str) -> Result<Url, AppError> {
    let with_host = if repo.starts_with(GITHUB_HTTPS_PREFIX) {
        repo.to_string()
    } else {
        format!("{GITHUB_HTTPS_PREFIX}/{repo}")
    };
    let canonical = with_host.strip_suffix(".git").unwrap_or(&with_host);

    Url::parse(canonical).map_err(|_| AppError::validation(repo_form_message()))
}

fn repo_form_message() -> String {
    format!("Please use https url or format {}.", style("github-user/repo-name").bold())
}

/// Split a comma-separated script list, trimming items and dropping blanks.
pub fn parse_scripts(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|script| !script.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn accepts_plain_names() {
        assert!(validate_name_shape("my-boilerplate").is_ok());
        assert!(validate_name_shape("Nuxt3").is_ok());
        assert!(validate_name_shape("with space").is_ok());
    }

    #[test]
    fn rejects_empty_names() {
        assert!(validate_name_shape("").is_err());
    }

    #[test]
    fn rejects_path_like_names() {
        for name in [".", "..", "a/b", "a\\b"] {
            assert!(validate_name_shape(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn rejects_names_without_letters_or_numbers() {
        let err = validate_name_shape("--").unwrap_err();
        assert_eq!(err.to_string(), "Boilerplate name must contain letters or numbers.");
    }

    #[test]
    fn rejects_names_leading_with_a_number() {
        let err = validate_name_shape("3d-print").unwrap_err();
        assert_eq!(err.to_string(), "Boilerplate name must not start with a number.");
        assert!(validate_name_shape("-3d").is_err());
        assert!(validate_name_shape("x3d").is_ok());
    }

    #[test]
    fn rejects_used_names_case_insensitively() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("Alpha")).unwrap();

        let err = validate_name("alpha", temp.path()).unwrap_err();
        assert_eq!(err.to_string(), "This boilerplate name has been used.");
        assert!(validate_name("ALPHA", temp.path()).is_err());
        assert!(validate_name("gamma", temp.path()).is_ok());
    }

    #[test]
    fn rejects_names_taken_by_plain_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("taken"), "").unwrap();

        assert!(validate_name("TAKEN", temp.path()).is_err());
    }

    #[test]
    fn accepts_stack_at_the_limit() {
        assert!(validate_stack(&"x".repeat(MAX_STACK_CHARS)).is_ok());
        assert!(validate_stack(&"x".repeat(MAX_STACK_CHARS + 1)).is_err());
    }

    #[test]
    fn measures_stack_length_in_characters() {
        assert!(validate_stack(&"é".repeat(MAX_STACK_CHARS)).is_ok());
    }

    #[test]
    fn rejects_ssh_repository_references() {
        let err = validate_repo("git@github.com:foo/bar.git").unwrap_err();
        assert!(err.to_string().contains("Please use https url or format"));
    }

    #[test]
    fn expands_shorthand_repositories() {
        let url = normalize_repo("foo/bar").unwrap();
        assert_eq!(url.as_str(), "https://github.com/foo/bar");
    }

    #[test]
    fn strips_git_suffix() {
        let url = normalize_repo("foo/bar.git").unwrap();
        assert_eq!(url.as_str(), "https://github.com/foo/bar");

        let url = normalize_repo("https://github.com/foo/bar.git").unwrap();
        assert_eq!(url.as_str(), "https://github.com/foo/bar");
    }

    #[test]
    fn keeps_canonical_urls_unchanged() {
        let url = normalize_repo("https://github.com/foo/bar").unwrap();
        assert_eq!(url.as_str(), "https://github.com/foo/bar");
    }

    #[test]
    fn parses_scripts_in_order() {
        assert_eq!(parse_scripts("build, test ,lint"), vec!["build", "test", "lint"]);
    }

    #[test]
    fn drops_blank_script_items() {
        assert_eq!(parse_scripts(""), Vec::<String>::new());
        assert_eq!(parse_scripts("build,, ,test"), vec!["build", "test"]);
    }

    #[test]
    fn answer_set_normalizes_fields() {
        let answers = AnswerSet::new("gamma", "Node + TypeScript", "foo/bar.git", "build, test")
            .unwrap();

        assert_eq!(answers.name, "gamma");
        assert_eq!(answers.stack, "node + typescript");
        assert_eq!(answers.repo.as_str(), "https://github.com/foo/bar");
        assert_eq!(answers.scripts, vec!["build", "test"]);
    }

    #[test]
    fn answer_set_rejects_bad_fields() {
        assert!(AnswerSet::new("", "node", "foo/bar", "").is_err());
        assert!(AnswerSet::new("gamma", &"x".repeat(101), "foo/bar", "").is_err());
        assert!(AnswerSet::new("gamma", "node", "git@github.com:foo/bar.git", "").is_err());
    }

    proptest! {
        #[test]
        fn stack_validation_matches_character_count(stack in any::<String>()) {
            let result = validate_stack(&stack);
            if stack.chars().count() > MAX_STACK_CHARS {
                prop_assert!(result.is_err());
            } else {
                prop_assert!(result.is_ok());
            }
        }

        #[test]
        fn normalized_repos_are_fixed_points(input in "[A-Za-z0-9._/-]{1,40}") {
            if let Ok(url) = normalize_repo(&input) {
                // A canonical URL still carrying `.git` would lose it on the
                // next pass, so only suffix-free outputs are fixed points.
                prop_assume!(!url.as_str().ends_with(".git"));
                let again = normalize_repo(url.as_str()).unwrap();
                prop_assert_eq!(url.as_str(), again.as_str());
            }
        }

        #[test]
        fn accepted_names_derive_importable_identifiers(name in "[A-Za-z0-9 '._-]{0,12}") {
            prop_assume!(validate_name_shape(&name).is_ok());
            let identifier = crate::index::to_identifier(&name);
            prop_assert!(!identifier.is_empty());
            prop_assert!(!identifier.starts_with(|c: char| c.is_numeric()));
        }
    }
}
