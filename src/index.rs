//! Aggregate index generation for the boilerplates root.
//!
//! The root's `index.ts` is never edited by hand. Every run rebuilds it from
//! scratch by listing the entry directories, so manual edits and stale
//! imports are overwritten rather than patched around.

use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::format::{self, FormatOptions};

/// File name of the aggregate index at the boilerplates root.
pub const INDEX_FILE: &str = "index.ts";

const INDEX_NOTICE: &str = r"/**
 * DO NOT UPDATE THIS FILE MANUALLY!!!
 *
 * This file has been automatically generated. If you want to add a new
 * boilerplate, please run the command below and follow the instructions:
 *
 * ```
 * boilersmith
 * ```
 */
";

/// List the entry directories under `root`, sorted lexicographically.
///
/// Only directories count: the aggregate index file and any stray files are
/// ignored, and hidden directories stay out of the listing.
pub fn list_boilerplate_dirs(root: &Path) -> Result<Vec<String>, AppError> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        dirs.push(name);
    }
    dirs.sort();
    Ok(dirs)
}

/// Derive the camel-cased import identifier for a directory name.
///
/// Splits on every non-alphanumeric character, lowercases all-caps segments,
/// then joins with the first segment decapitalized and every later segment
/// capitalized: `my-boilerplate` becomes `myBoilerplate`, `FOO_bar` becomes
/// `fooBar`, `Nuxt3` becomes `nuxt3`.
pub fn to_identifier(dir_name: &str) -> String {
    let segments: Vec<String> = dir_name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let all_caps = segment.chars().count() > 1
                && segment.chars().all(|c| !c.is_lowercase());
            if all_caps { segment.to_lowercase() } else { segment.to_string() }
        })
        .collect();

    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else { continue };
        if i == 0 {
            out.extend(first.to_lowercase());
        } else {
            out.extend(first.to_uppercase());
        }
        out.push_str(chars.as_str());
    }
    out
}

/// Build the aggregate index source for the entries under `root`.
///
/// Output is fully determined by the directory listing: one import per entry
/// in sorted order, then a default export listing the same identifiers. The
/// result has already been through [`format::format_source`], so writing it
/// verbatim keeps the registry formatting uniform.
pub fn build_index(root: &Path, options: &FormatOptions) -> Result<String, AppError> {
    let dirs = list_boilerplate_dirs(root)?;

    let mut source = String::from(INDEX_NOTICE);
    for dir in &dirs {
        source.push_str(&format!(
            "import {} from \"./{}/index.js\";\n",
            to_identifier(dir),
            format::escape_js_string(dir)
        ));
    }
    source.push('\n');
    source.push_str(&export_list(&dirs, options));

    Ok(format::format_source(&source, options))
}

/// Render the `export default [...]` statement, wrapping once the inline
/// form would pass the print width.
fn export_list(dirs: &[String], options: &FormatOptions) -> String {
    let identifiers: Vec<String> = dirs.iter().map(|dir| to_identifier(dir)).collect();

    let inline = format!("export default [{}];", identifiers.join(", "));
    if inline.chars().count() <= options.print_width {
        return inline;
    }

    let mut out = String::from("export default [\n");
    for (i, identifier) in identifiers.iter().enumerate() {
        let last = i + 1 == identifiers.len();
        out.push('\t');
        out.push_str(identifier);
        if !last || options.trailing_comma {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("];");
    out
}
