//! Tree builder: depth-first conversion of a raw tree into a normalized tree.

use normtree_core::config::TreeConfig;
use smallvec::SmallVec;

use super::compressor::compress;
use super::filter::should_drop;
use super::printable::derive_printable_type;
use crate::normalize::normalize;
use crate::resolve::{NoTypeResolver, TypeResolver};
use crate::syntax::{RawId, RawTree};
use crate::tree::{NodeId, NormalizedNode, NormalizedTree};

static NO_TYPES: NoTypeResolver = NoTypeResolver;

/// Builds normalized trees under one configuration.
///
/// Each raw node is visited once. A node is a leaf exactly when none of its raw children
/// survive the filter; only leaves get a token.
pub struct TreeBuilder<'a> {
    config: &'a TreeConfig,
    resolver: &'a dyn TypeResolver,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(config: &'a TreeConfig) -> Self {
        Self {
            config,
            resolver: &NO_TYPES,
        }
    }

    pub fn with_resolver(config: &'a TreeConfig, resolver: &'a dyn TypeResolver) -> Self {
        Self { config, resolver }
    }

    /// Convert `raw`, compressing unary chains when `compress_tree` is set.
    pub fn build(&self, raw: &RawTree) -> NormalizedTree {
        let mut tree = NormalizedTree::empty();
        if raw.is_empty() {
            return tree;
        }
        self.convert(raw, &mut tree);

        tracing::debug!(
            raw_nodes = raw.len(),
            nodes = tree.len(),
            compress = self.config.compress_tree,
            "built normalized tree"
        );

        if self.config.compress_tree {
            compress(&tree)
        } else {
            tree
        }
    }

    /// Depth-first conversion with an explicit stack; nodes land in pre-order.
    fn convert(&self, raw: &RawTree, out: &mut NormalizedTree) {
        let mut stack: Vec<(RawId, Option<NodeId>)> = vec![(raw.root(), None)];
        while let Some((id, parent)) = stack.pop() {
            let category = raw.category(id);
            let resolved_type = self.resolve_type(raw, id);
            let printable_type = derive_printable_type(raw, id, self.config);
            let current = out.push(NormalizedNode::new(
                category.label().to_string(),
                resolved_type,
                printable_type,
                parent,
            ));
            if let Some(parent) = parent {
                out.node_mut(parent).children.push(current);
            }

            let kept: SmallVec<[RawId; 4]> = raw
                .children(id)
                .iter()
                .copied()
                .filter(|&child| !should_drop(raw, child, self.config))
                .collect();
            if kept.is_empty() {
                out.node_mut(current).token = Some(normalize(raw.text(id), category, self.config));
            }
            stack.extend(kept.into_iter().rev().map(|child| (child, Some(current))));
        }
    }

    fn resolve_type(&self, raw: &RawTree, id: RawId) -> Option<String> {
        if !self.config.resolve_types {
            return None;
        }
        self.resolver.resolve(raw, id).unwrap_or_else(|error| {
            tracing::trace!(node = id.index(), %error, "type resolution failed");
            None
        })
    }
}

/// Build a normalized tree without type information.
pub fn build(raw: &RawTree, config: &TreeConfig) -> NormalizedTree {
    TreeBuilder::new(config).build(raw)
}

/// Build a normalized tree, resolving node types through `resolver`.
pub fn build_with_resolver(
    raw: &RawTree,
    config: &TreeConfig,
    resolver: &dyn TypeResolver,
) -> NormalizedTree {
    TreeBuilder::with_resolver(config, resolver).build(raw)
}
