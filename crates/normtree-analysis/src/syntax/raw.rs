//! Raw syntax tree: the read-only input of the normalization pipeline.
//!
//! Nodes live in a flat arena and refer to each other by `RawId`. Node text is a byte
//! range into the tree's source buffer.

use std::ops::Range;

use smallvec::SmallVec;

use super::category::Category;

/// Index of a node in a `RawTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawId(pub(crate) usize);

impl RawId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RawNode {
    category: Category,
    span: Range<usize>,
    children: SmallVec<[RawId; 4]>,
    parent: Option<RawId>,
}

impl RawNode {
    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn children(&self) -> &[RawId] {
        &self.children
    }

    pub fn parent(&self) -> Option<RawId> {
        self.parent
    }
}

/// Arena-backed raw syntax tree. Immutable once built.
#[derive(Debug, Clone)]
pub struct RawTree {
    source: String,
    nodes: Vec<RawNode>,
    root: RawId,
}

impl RawTree {
    /// Start a tree over `source`; the adapter adds nodes top-down.
    pub(crate) fn with_source(source: String) -> Self {
        Self {
            source,
            nodes: Vec::new(),
            root: RawId(0),
        }
    }

    pub(crate) fn push(
        &mut self,
        category: Category,
        span: Range<usize>,
        parent: Option<RawId>,
    ) -> RawId {
        let id = RawId(self.nodes.len());
        self.nodes.push(RawNode {
            category,
            span,
            children: SmallVec::new(),
            parent,
        });
        id
    }

    pub(crate) fn set_children(&mut self, id: RawId, children: SmallVec<[RawId; 4]>) {
        self.nodes[id.0].children = children;
    }

    pub(crate) fn set_root(&mut self, root: RawId) {
        self.root = root;
    }

    pub fn root(&self) -> RawId {
        self.root
    }

    pub fn node(&self, id: RawId) -> &RawNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: RawId) -> Option<&RawNode> {
        self.nodes.get(id.0)
    }

    pub fn category(&self, id: RawId) -> &Category {
        &self.nodes[id.0].category
    }

    /// Literal source text of a node.
    pub fn text(&self, id: RawId) -> &str {
        &self.source[self.nodes[id.0].span.clone()]
    }

    pub fn children(&self, id: RawId) -> &[RawId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: RawId) -> Option<RawId> {
        self.nodes[id.0].parent
    }

    /// Iterate over the strict ancestors of a node, nearest first.
    pub fn ancestors(&self, id: RawId) -> impl Iterator<Item = RawId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in arena order.
    pub fn ids(&self) -> impl Iterator<Item = RawId> {
        (0..self.nodes.len()).map(RawId)
    }
}

/// Bottom-up builder for raw trees, for front-ends that do not go through tree-sitter.
///
/// Nodes must be created in source order: a node's text is the span from its first
/// child's start to its last child's end.
#[derive(Debug, Default)]
pub struct RawTreeBuilder {
    source: String,
    nodes: Vec<RawNode>,
}

impl RawTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token node carrying `text`.
    pub fn leaf(&mut self, category: Category, text: &str) -> RawId {
        let start = self.source.len();
        self.source.push_str(text);
        self.push(category, start..self.source.len(), SmallVec::new())
    }

    /// Add a composite node over already-built children.
    pub fn node(&mut self, category: Category, children: impl IntoIterator<Item = RawId>) -> RawId {
        let children: SmallVec<[RawId; 4]> = children.into_iter().collect();
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => {
                self.nodes[first.0].span.start..self.nodes[last.0].span.end
            }
            _ => self.source.len()..self.source.len(),
        };
        let id = RawId(self.nodes.len());
        for child in &children {
            self.nodes[child.0].parent = Some(id);
        }
        self.push(category, span, children)
    }

    /// Finish the tree with `root` as its root.
    pub fn finish(self, root: RawId) -> RawTree {
        RawTree {
            source: self.source,
            nodes: self.nodes,
            root,
        }
    }

    fn push(
        &mut self,
        category: Category,
        span: Range<usize>,
        children: SmallVec<[RawId; 4]>,
    ) -> RawId {
        let id = RawId(self.nodes.len());
        self.nodes.push(RawNode {
            category,
            span,
            children,
            parent: None,
        });
        id
    }
}
