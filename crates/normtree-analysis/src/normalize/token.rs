//! Token normalizer for leaves of the normalized tree.

use normtree_core::config::TreeConfig;
use normtree_core::constants::{EMPTY_TOKEN, NUMBER_LITERAL, NUMBER_WHITELIST, SUBTOKEN_SEPARATOR};

use super::subtokens::{normalize_token, split_to_subtokens};
use crate::syntax::Category;

/// Produce the token written into a leaf. First matching rule wins:
///
/// 1. numeric literals under `normalize_literals`: whitelisted values verbatim, else `<NUM>`;
/// 2. `split_names` with a non-empty split: subtokens joined by `|`;
/// 3. `normalize_tokens`: canonicalized text, `<E>` when nothing survives;
/// 4. the escaped raw text.
pub fn normalize(text: &str, category: &Category, config: &TreeConfig) -> String {
    if config.normalize_literals && category.class().is_numeric_literal() {
        return if NUMBER_WHITELIST.contains(&text) {
            text.to_string()
        } else {
            NUMBER_LITERAL.to_string()
        };
    }
    if config.split_names {
        let subtokens = split_to_subtokens(text);
        if !subtokens.is_empty() {
            return subtokens.join(SUBTOKEN_SEPARATOR);
        }
    }
    if config.normalize_tokens {
        return normalize_token(text, EMPTY_TOKEN);
    }
    escape_token(text)
}

/// Escape backslash, backspace, CR, LF and double quote; expand tabs to four spaces.
pub fn escape_token(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\u{8}' => escaped.push_str("\\b"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            '"' => escaped.push_str("\\\""),
            '\t' => escaped.push_str("    "),
            _ => escaped.push(c),
        }
    }
    escaped
}
