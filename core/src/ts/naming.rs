#![deny(missing_docs)]

//! # Naming Transformer
//!
//! Identifier sanitization and case conversion for interface and field
//! names.

use regex::Regex;
use std::sync::OnceLock;

/// Wraps a name in quotes when it is not a legal bare identifier.
///
/// Only hyphens trigger quoting; other characters pass through untouched.
pub fn sanitize(name: &str) -> String {
    if name.contains('-') {
        format!("'{}'", name)
    } else {
        name.to_string()
    }
}

/// Collapses runs of `-`/`_`/`.`/whitespace followed by a character into
/// that character upper-cased, dropping the separators.
///
/// Characters outside separator runs keep their case, so an already
/// capitalized name stays capitalized.
pub fn camel_case(name: &str) -> String {
    static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
    let separator_re =
        SEPARATOR_RE.get_or_init(|| Regex::new(r"[-_.\s]+\w").expect("Invalid regex"));

    separator_re
        .replace_all(name, |caps: &regex::Captures<'_>| {
            caps[0]
                .to_uppercase()
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .into_owned()
}

/// Upper-cases the first character only; used to build nested interface
/// names from field names.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
