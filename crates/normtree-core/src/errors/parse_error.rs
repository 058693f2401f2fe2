//! Front-end parse errors.

use std::path::PathBuf;

/// Errors raised while turning source text into a raw syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar could not be loaded for {language}: {message}")]
    GrammarNotLoaded { language: String, message: String },

    #[error("Tree-sitter produced no tree for {path}")]
    NoTree { path: PathBuf },

    #[error("Source of {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}
