//! Parallel batch runner: parse and build many source units with rayon.

use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use normtree_core::config::NormtreeConfig;
use normtree_core::errors::{PipelineError, PipelineResult};
use normtree_core::traits::{Cancellable, CancellationToken};

use super::builder::TreeBuilder;
use crate::parsers::LanguageParser;
use crate::resolve::{NoTypeResolver, TypeResolver};
use crate::tree::NormalizedTree;

/// One in-memory source file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub source: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Normalized tree of one source unit.
#[derive(Debug, Clone)]
pub struct FileTree {
    pub path: PathBuf,
    pub tree: NormalizedTree,
    /// Syntax errors the front-end recovered from.
    pub error_count: u32,
}

/// Runs parse + build over source units in parallel.
///
/// Units are processed in chunks of `batch.batch_size`; the cancellation token is checked
/// before each unit. Output order follows input order.
pub struct TreeBatch<'a, P: LanguageParser> {
    parser: P,
    config: &'a NormtreeConfig,
    cancel: CancellationToken,
}

impl<'a, P: LanguageParser> TreeBatch<'a, P> {
    pub fn new(parser: P, config: &'a NormtreeConfig) -> Self {
        Self {
            parser,
            config,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn run(&self, units: &[SourceUnit]) -> PipelineResult<Vec<FileTree>> {
        if let Err(e) = self.config.validate() {
            let mut result = PipelineResult::default();
            result.add_error(e.into());
            return result;
        }

        match self.config.batch.threads {
            Some(threads) => {
                match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                    Ok(pool) => pool.install(|| self.run_chunks(units)),
                    Err(e) => {
                        let mut result = PipelineResult::default();
                        result.add_error(PipelineError::ThreadPool(e.to_string()));
                        result
                    }
                }
            }
            None => self.run_chunks(units),
        }
    }

    fn run_chunks(&self, units: &[SourceUnit]) -> PipelineResult<Vec<FileTree>> {
        let start = Instant::now();
        let mut result = PipelineResult::new(Vec::with_capacity(units.len()));
        let mut skipped = 0usize;

        for chunk in units.chunks(self.config.batch.batch_size.max(1)) {
            let outcomes: Vec<Option<Result<FileTree, PipelineError>>> = chunk
                .par_iter()
                .map(|unit| {
                    if self.cancel.is_cancelled() {
                        None
                    } else {
                        Some(self.process(unit))
                    }
                })
                .collect();

            for outcome in outcomes {
                match outcome {
                    Some(Ok(file)) => result.data.push(file),
                    Some(Err(e)) => result.add_error(e),
                    None => skipped += 1,
                }
            }
        }

        if skipped > 0 {
            tracing::info!(skipped, "batch cancelled before all units were built");
            result.add_error(PipelineError::Cancelled);
        }
        tracing::debug!(
            units = units.len(),
            built = result.data.len(),
            errors = result.error_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "batch finished"
        );
        result
    }

    /// Parse and build a single unit.
    pub fn process(&self, unit: &SourceUnit) -> Result<FileTree, PipelineError> {
        let parsed = self.parser.parse(unit.source.as_bytes(), &unit.path)?;
        let resolver: Box<dyn TypeResolver> = if self.config.tree.resolve_types {
            self.parser.type_resolver(&parsed.raw)
        } else {
            Box::new(NoTypeResolver)
        };
        let tree = TreeBuilder::with_resolver(&self.config.tree, resolver.as_ref()).build(&parsed.raw);

        if self.config.debug.print_trees {
            tracing::debug!(path = %unit.path.display(), "normalized tree:\n{tree}");
        }

        Ok(FileTree {
            path: unit.path.clone(),
            tree,
            error_count: parsed.error_count,
        })
    }
}
