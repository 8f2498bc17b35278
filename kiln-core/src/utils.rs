//! Shared text utilities for name derivation.

/// Uppercase the first letter of a word (e.g., "person" -> "Person").
///
/// Only the first character is touched; the rest of the word is kept as is.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a delimited string to PascalCase (e.g., "person-class" -> "PersonClass")
pub fn pascalize(words: &str, delimiter: char) -> String {
    words.split(delimiter).map(capitalize).collect()
}
