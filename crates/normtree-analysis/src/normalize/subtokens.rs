//! Subtoken splitting and token canonicalization.
//!
//! Pure text functions: no state, deterministic.

use once_cell::sync::Lazy;
use regex::Regex;

/// A literal backslash followed by `n`.
static ESCAPED_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\n").unwrap());

/// Two slashes followed by a run of `s`.
static SLASHES_S: Lazy<Regex> = Lazy::new(|| Regex::new(r"//s+").unwrap());

static QUOTES_AND_COMMAS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["',]"#).unwrap());

/// Anything outside printable ASCII.
static NON_PRINTABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x20-\x7E]").unwrap());

static NON_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z]").unwrap());

/// Canonicalize a raw token.
///
/// Lowercases, strips escaped newlines, quotes, commas and non-printable characters, then
/// keeps only letters. When no letters remain, the cleaned text with spaces turned into `_`
/// is used; when that is empty too, `empty_token` is returned.
pub fn normalize_token(token: &str, empty_token: &str) -> String {
    let lower = token.to_lowercase();
    let clean = ESCAPED_NEWLINE.replace_all(&lower, "");
    let clean = SLASHES_S.replace_all(&clean, "");
    let clean = QUOTES_AND_COMMAS.replace_all(&clean, "");
    let clean = NON_PRINTABLE.replace_all(&clean, "");

    let stripped = NON_LETTERS.replace_all(&clean, "");
    if !stripped.is_empty() {
        return stripped.into_owned();
    }
    let careful = clean.replace(' ', "_");
    if careful.is_empty() {
        empty_token.to_string()
    } else {
        careful
    }
}

/// Split an identifier-like token into normalized subtokens.
///
/// Boundaries: lower-to-upper case changes (`fooBar`), the last capital of an acronym
/// before a capitalized word (`HTTPServer`), underscores, digits and whitespace. Digits and
/// separators are dropped; empty pieces are discarded.
pub fn split_to_subtokens(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.trim().chars().collect();
    let mut pieces: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c.is_ascii_digit() || c.is_ascii_whitespace() {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            let prev = chars[i - 1];
            let camel = prev.is_ascii_lowercase() && c.is_ascii_uppercase();
            let acronym_end = prev.is_ascii_uppercase()
                && c.is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if camel || acronym_end {
                pieces.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
        .iter()
        .map(|piece| normalize_token(piece, ""))
        .filter(|piece| !piece.is_empty())
        .collect()
}
