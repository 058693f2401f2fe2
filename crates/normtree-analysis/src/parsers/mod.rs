//! Front-end adapters: source text to raw syntax trees.

pub mod error_tolerant;
pub mod java;
pub mod traits;

pub use java::JavaParser;
pub use traits::{LanguageParser, ParsedSource};
