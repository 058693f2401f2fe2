//! LanguageParser trait: the contract every front-end adapter implements.

use std::path::Path;

use normtree_core::errors::ParseError;

use crate::resolve::{NoTypeResolver, TypeResolver};
use crate::syntax::RawTree;

/// Output of a front-end: the raw tree plus parse diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub raw: RawTree,
    /// ERROR and MISSING nodes reported by the parser.
    pub error_count: u32,
    pub parse_time_us: u64,
}

impl ParsedSource {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

pub trait LanguageParser: Send + Sync {
    /// Language name, e.g. `"java"`.
    fn language(&self) -> &'static str;

    /// File extensions this parser handles.
    fn extensions(&self) -> &[&str];

    fn parse(&self, source: &[u8], path: &Path) -> Result<ParsedSource, ParseError>;

    /// Type resolver suited to trees from this parser.
    fn type_resolver(&self, _tree: &RawTree) -> Box<dyn TypeResolver> {
        Box::new(NoTypeResolver)
    }
}
