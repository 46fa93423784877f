//! Pattern compiler.
//!
//! # Responsibilities
//! - Escape regex metacharacters that are literal in the pattern language
//! - Turn author-written `(...)` into optional, non-capturing groups
//! - Replace each `<name>` with one capturing group and record its name
//! - Anchor the result at both ends
//!
//! # Design Decisions
//! - The Nth capturing group of the generated regex is the Nth name. Every
//!   other group emitted (optional sections, demoted fragment groups) is
//!   non-capturing, and the count is checked after the regex is built.
//! - Group fragments are checked for balanced parentheses before splicing.
//! - Regex syntax errors are surfaced as-is from the `regex` crate.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::capture::error::{CaptureError, CaptureResult};

/// Per-group regex fragments, keyed by group name.
pub type SubPatterns = HashMap<String, String>;

/// Fragment used for a group with no caller-supplied sub-pattern:
/// anything that is not a slash, period, comma, semicolon, question mark, or newline.
pub const DEFAULT_GROUP_FRAGMENT: &str = r"[^/.,;?\n]+";

/// Characters that are regex operators but plain text in a pattern.
const LITERAL_METACHARS: &[char] = &['.', '*', '+', '?', '^', '$'];

static GROUP_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([-a-zA-Z0-9_ ]+)>").expect("group name regex is valid"));

/// A pattern compiled to an anchored regular expression.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    regex: Regex,
    names: Vec<String>,
}

impl CompiledPattern {
    /// The author-written pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The generated regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Group names in capture order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Compile `pattern` into an anchored regex, using `groups` to override the
/// fragment matched by individual named groups.
pub fn compile(pattern: &str, groups: &SubPatterns) -> CaptureResult<CompiledPattern> {
    let source = optional_sections(&escape_literals(pattern));

    let mut names: Vec<String> = Vec::new();
    let mut body = String::with_capacity(source.len() + 16);
    let mut last = 0;

    for caps in GROUP_NAME.captures_iter(&source) {
        let (Some(token), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();
        if names.iter().any(|seen| seen == name) {
            return Err(CaptureError::DuplicateGroup(name.to_string()));
        }

        body.push_str(&source[last..token.start()]);
        body.push('(');
        match groups.get(name) {
            Some(fragment) => body.push_str(&demote_groups(name, fragment)?),
            None => body.push_str(DEFAULT_GROUP_FRAGMENT),
        }
        body.push(')');

        names.push(name.to_string());
        last = token.end();
    }
    body.push_str(&source[last..]);

    for group in groups.keys() {
        if !names.contains(group) {
            tracing::warn!(pattern, group = %group, "Sub-pattern given for undeclared group, ignoring");
        }
    }

    let regex = Regex::new(&format!("^{}$", body))?;

    let found = regex.captures_len() - 1;
    if found != names.len() {
        return Err(CaptureError::GroupCountMismatch {
            expected: names.len(),
            found,
        });
    }

    tracing::debug!(pattern, regex = regex.as_str(), names = ?names, "Pattern compiled");

    Ok(CompiledPattern {
        pattern: pattern.to_string(),
        regex,
        names,
    })
}

fn escape_literals(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for ch in pattern.chars() {
        if LITERAL_METACHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// `(` becomes `(?:` and `)` becomes `)?`.
fn optional_sections(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for ch in pattern.chars() {
        match ch {
            '(' => out.push_str("(?:"),
            ')' => out.push_str(")?"),
            _ => out.push(ch),
        }
    }
    out
}

/// Rewrite the plain groups of a caller fragment as non-capturing groups.
///
/// Escaped parentheses and parentheses inside a character class are literal
/// and left alone, as are groups that already start with `(?`.
fn demote_groups(group: &str, fragment: &str) -> CaptureResult<String> {
    let unbalanced = || CaptureError::UnbalancedFragment {
        group: group.to_string(),
        fragment: fragment.to_string(),
    };

    let mut out = String::with_capacity(fragment.len() + 8);
    let mut depth = 0usize;
    let mut in_class = false;
    let mut chars = fragment.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                out.push(ch);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(ch);
                // `]` right after the opening bracket (or `[^`) is a literal member
                if chars.peek() == Some(&'^') {
                    out.push('^');
                    chars.next();
                }
                if chars.peek() == Some(&']') {
                    out.push(']');
                    chars.next();
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(ch);
            }
            '(' if !in_class => {
                depth += 1;
                out.push('(');
                if chars.peek() != Some(&'?') {
                    out.push_str("?:");
                }
            }
            ')' if !in_class => {
                depth = depth.checked_sub(1).ok_or_else(unbalanced)?;
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    if depth != 0 {
        return Err(unbalanced());
    }
    Ok(out)
}
