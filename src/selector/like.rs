//! LIKE-pattern compilation.
//!
//! A SQL LIKE pattern is translated to an anchored regular expression once
//! at compile time; the compiled regex is then reused for every message.

use regex::Regex;

use crate::selector::{Result, SelectorError};

/// A compiled LIKE pattern.
#[derive(Debug, Clone)]
pub struct LikePattern {
    regex_source: String,
    regex: Regex,
}

impl LikePattern {
    /// Translate `pattern` and compile it. `escape` is a single optional
    /// character that turns the immediately following `%` or `_` into a
    /// literal; the escape character itself never reaches the output.
    pub fn compile(pattern: &str, escape: Option<char>) -> Result<LikePattern> {
        let regex_source = to_regex(pattern, escape);
        let regex = Regex::new(&regex_source)
            .map_err(|_| SelectorError::parse(pattern, "invalid LIKE pattern"))?;
        Ok(LikePattern {
            regex_source,
            regex,
        })
    }

    pub fn matches(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    /// The translated regex text, used by the canonical rendering.
    pub fn regex_source(&self) -> &str {
        &self.regex_source
    }
}

impl PartialEq for LikePattern {
    fn eq(&self, other: &LikePattern) -> bool {
        self.regex_source == other.regex_source
    }
}

/// `%` becomes `.*` and `_` becomes `.`; the regex metacharacters
/// `\ ^ $ . * [` are backslash-escaped, while `]` and `-` get the
/// bracket-safe rewrites `[]]` and `[-]`. Anything else passes through
/// untouched.
fn to_regex(pattern: &str, escape: Option<char>) -> String {
    let mut regex = String::from("^");
    let mut escaped = false;
    for ch in pattern.chars() {
        if escape == Some(ch) {
            escaped = true;
            continue;
        }
        match ch {
            '%' if !escaped => regex.push_str(".*"),
            '_' if !escaped => regex.push('.'),
            '%' | '_' => regex.push(ch),
            ']' => regex.push_str("[]]"),
            '-' => regex.push_str("[-]"),
            '\\' | '^' | '$' | '.' | '*' | '[' => {
                regex.push('\\');
                regex.push(ch);
            }
            _ => regex.push(ch),
        }
        escaped = false;
    }
    regex.push('$');
    regex
}
