//! Quoting of object names for code submitted to the console.

use std::borrow::Cow;

// Keywords and built-in constants that cannot appear as bare names.
const RESERVED: &[&str] = &[
    "if",
    "else",
    "repeat",
    "while",
    "function",
    "for",
    "in",
    "next",
    "break",
    "TRUE",
    "FALSE",
    "NULL",
    "Inf",
    "NaN",
    "NA",
    "NA_integer_",
    "NA_real_",
    "NA_character_",
    "NA_complex_",
    "...",
];

/// Quote `name` so it can be spliced into code for the console.
///
/// Syntactically valid, non-reserved names pass through unchanged; everything
/// else is wrapped in backticks with embedded backslashes and backticks
/// escaped. The validity check is deliberately conservative (ASCII names
/// only): quoting a name that did not need it is harmless, while leaving an
/// invalid name bare produces code that does not parse.
pub fn to_symbol_name(name: &str) -> Cow<'_, str> {
    if is_valid_name(name) && !RESERVED.contains(&name) && !is_dot_dot_number(name) {
        return Cow::Borrowed(name);
    }

    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('`');
    for c in name.chars() {
        if c == '\\' || c == '`' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('`');
    Cow::Owned(quoted)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '.') {
        return false;
    }
    // a leading dot followed by a digit reads as a number, not a name
    if first == '.' {
        if let Some(second) = name.chars().nth(1) {
            if second.is_ascii_digit() {
                return false;
            }
        }
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
}

// `..1`, `..2`, ... are positional references, not assignable names.
fn is_dot_dot_number(name: &str) -> bool {
    name.strip_prefix("..")
        .map(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}
