//! Deterministic formatting for generated JavaScript and TypeScript sources.
//!
//! Every file this tool writes passes through [`format_source`] so that
//! hand-edited registries and freshly generated entries end up with the same
//! shape: single-quoted strings, tab indentation, no trailing whitespace, and
//! exactly one trailing newline. Semicolons are authored in the templates
//! rather than inserted here. All passes are idempotent, so re-running the
//! tool over its own output changes nothing.

/// Style knobs for [`format_source`].
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Rewrite double-quoted string literals to single quotes.
    pub single_quote: bool,
    /// Convert leading space indentation to tabs.
    pub use_tabs: bool,
    /// How many leading spaces collapse into one tab.
    pub tab_width: usize,
    /// Emit a trailing comma after the last element of multiline lists.
    pub trailing_comma: bool,
    /// Line length above which generated lists wrap onto multiple lines.
    pub print_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            single_quote: true,
            use_tabs: true,
            tab_width: 2,
            trailing_comma: true,
            print_width: 80,
        }
    }
}

/// Normalize `source` according to `options`.
///
/// Passes run in a fixed order: line endings, quote style, per-line trailing
/// whitespace and indentation, then blank-line shape (no leading blanks, runs
/// collapsed to one, exactly one trailing newline).
pub fn format_source(source: &str, options: &FormatOptions) -> String {
    let text = source.replace("\r\n", "\n").replace('\r', "\n");
    let text = if options.single_quote { requote(&text) } else { text };

    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            let line = line.trim_end();
            if options.use_tabs { retab(line, options.tab_width) } else { line.to_string() }
        })
        .collect();

    while lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.dedup_by(|current, previous| current.is_empty() && previous.is_empty());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Escape `value` for use inside a double-quoted JS string literal.
///
/// Backslashes and double quotes get a backslash prefix and line breaks
/// become escape sequences, so the literal always closes on its own line.
/// Apostrophes pass through untouched; [`format_source`] keeps literals
/// carrying one double-quoted instead of rewriting them.
pub fn escape_js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Rewrite double-quoted string literals to single quotes.
///
/// Skips line and block comments, single-quoted strings, and template
/// literals. A double-quoted literal whose body contains an apostrophe or a
/// backslash keeps its original form, since rewriting it would require
/// re-escaping. Unterminated constructs are copied through untouched.
fn requote(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    out.push(chars[i]);
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                out.push_str("/*");
                i += 2;
                while i < chars.len() {
                    if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                        out.push_str("*/");
                        i += 2;
                        break;
                    }
                    out.push(chars[i]);
                    i += 1;
                }
            }
            quote @ ('\'' | '`') => {
                out.push(quote);
                i += 1;
                while i < chars.len() {
                    let c = chars[i];
                    out.push(c);
                    i += 1;
                    if c == '\\' {
                        if i < chars.len() {
                            out.push(chars[i]);
                            i += 1;
                        }
                    } else if c == quote {
                        break;
                    }
                }
            }
            '"' => match closing_quote(&chars, i) {
                Some(end) => {
                    let body: String = chars[i + 1..end].iter().collect();
                    if body.contains('\'') || body.contains('\\') {
                        out.push('"');
                        out.push_str(&body);
                        out.push('"');
                    } else {
                        out.push('\'');
                        out.push_str(&body);
                        out.push('\'');
                    }
                    i = end + 1;
                }
                None => {
                    while i < chars.len() {
                        out.push(chars[i]);
                        i += 1;
                    }
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Index of the closing quote for the double-quoted literal opening at
/// `start`, or `None` if the literal never closes on this line.
fn closing_quote(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '"' => return Some(i),
            '\n' => return None,
            _ => i += 1,
        }
    }
    None
}

/// Convert leading space runs into tabs, `tab_width` spaces per tab.
///
/// Spaces left over after whole tabs stay as spaces, so block comment
/// continuation lines (`<tab> * ...`) keep their alignment. Lines whose
/// indentation is already pure tabs pass through unchanged.
fn retab(line: &str, tab_width: usize) -> String {
    if tab_width == 0 {
        return line.to_string();
    }

    let rest = line.trim_start_matches([' ', '\t']);
    let prefix = &line[..line.len() - rest.len()];
    if !prefix.contains(' ') {
        return line.to_string();
    }

    let mut out = String::new();
    let mut pending_spaces = 0;
    for c in prefix.chars() {
        if c == '\t' {
            flush_spaces(&mut out, &mut pending_spaces, tab_width);
            out.push('\t');
        } else {
            pending_spaces += 1;
        }
    }
    flush_spaces(&mut out, &mut pending_spaces, tab_width);
    out.push_str(rest);
    out
}

fn flush_spaces(out: &mut String, pending: &mut usize, tab_width: usize) {
    for _ in 0..*pending / tab_width {
        out.push('\t');
    }
    for _ in 0..*pending % tab_width {
        out.push(' ');
    }
    *pending = 0;
}
