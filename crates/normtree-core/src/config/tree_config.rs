//! Tree normalization configuration.

use serde::{Deserialize, Serialize};

/// Switches controlling how a raw syntax tree is normalized.
///
/// The set of options is closed: unknown keys are rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    /// Annotate nodes with a resolved type signature. Default: true.
    pub resolve_types: bool,
    /// Canonicalize leaf tokens. Default: true.
    pub normalize_tokens: bool,
    /// Replace numeric literals outside the whitelist with a placeholder. Default: true.
    pub normalize_literals: bool,
    /// Split leaf tokens into `|`-joined subtokens. Default: false.
    pub split_names: bool,
    /// Drop keyword tokens. Default: false.
    pub remove_keyword: bool,
    /// Drop operator tokens and record them on the parent expression. Default: false.
    pub compress_operators: bool,
    /// Drop whitespace. Default: true.
    pub remove_white_spaces: bool,
    /// Drop non-doc comments. Default: true.
    pub remove_comments: bool,
    /// Drop documentation comments. Default: true.
    pub remove_java_doc: bool,
    /// Drop leading asterisks inside documentation comments. Default: true.
    pub remove_asterisks: bool,
    /// Drop braces, brackets, parentheses, separators and annotation markers. Default: true.
    pub remove_printable_symbols: bool,
    /// Drop list nodes that are empty or exactly `()`. Default: true.
    pub remove_empty_lists: bool,
    /// Collapse unary chains after building. Default: false.
    pub compress_tree: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            resolve_types: true,
            normalize_tokens: true,
            normalize_literals: true,
            split_names: false,
            remove_keyword: false,
            compress_operators: false,
            remove_white_spaces: true,
            remove_comments: true,
            remove_java_doc: true,
            remove_asterisks: true,
            remove_printable_symbols: true,
            remove_empty_lists: true,
            compress_tree: false,
        }
    }
}

impl TreeConfig {
    /// A configuration with every filter and rewrite switched off.
    ///
    /// The built tree then mirrors the raw tree node for node and carries escaped raw text.
    pub fn verbatim() -> Self {
        Self {
            resolve_types: false,
            normalize_tokens: false,
            normalize_literals: false,
            split_names: false,
            remove_keyword: false,
            compress_operators: false,
            remove_white_spaces: false,
            remove_comments: false,
            remove_java_doc: false,
            remove_asterisks: false,
            remove_printable_symbols: false,
            remove_empty_lists: false,
            compress_tree: false,
        }
    }

    /// Look up a flag by its option name. Accepts snake_case and the camelCase spelling.
    pub fn flag_mut(&mut self, name: &str) -> Option<&mut bool> {
        let flag = match name {
            "resolve_types" | "resolveTypes" => &mut self.resolve_types,
            "normalize_tokens" | "normalizeTokens" => &mut self.normalize_tokens,
            "normalize_literals" | "normalizeLiterals" => &mut self.normalize_literals,
            "split_names" | "splitNames" => &mut self.split_names,
            "remove_keyword" | "removeKeyword" => &mut self.remove_keyword,
            "compress_operators" | "compressOperators" => &mut self.compress_operators,
            "remove_white_spaces" | "removeWhiteSpaces" => &mut self.remove_white_spaces,
            "remove_comments" | "removeComments" => &mut self.remove_comments,
            "remove_java_doc" | "removeJavaDoc" => &mut self.remove_java_doc,
            "remove_asterisks" | "removeAsterisks" => &mut self.remove_asterisks,
            "remove_printable_symbols" | "removePrintableSymbols" => {
                &mut self.remove_printable_symbols
            }
            "remove_empty_lists" | "removeEmptyLists" => &mut self.remove_empty_lists,
            "compress_tree" | "compressTree" => &mut self.compress_tree,
            _ => return None,
        };
        Some(flag)
    }

    /// All option names in snake_case, in declaration order.
    pub const FLAG_NAMES: [&'static str; 13] = [
        "resolve_types",
        "normalize_tokens",
        "normalize_literals",
        "split_names",
        "remove_keyword",
        "compress_operators",
        "remove_white_spaces",
        "remove_comments",
        "remove_java_doc",
        "remove_asterisks",
        "remove_printable_symbols",
        "remove_empty_lists",
        "compress_tree",
    ];
}
