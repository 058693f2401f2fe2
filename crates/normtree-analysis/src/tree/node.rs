//! Normalized tree: the pipeline's output.

use smallvec::SmallVec;

/// Index of a node in a `NormalizedTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNode {
    pub(crate) type_label: String,
    pub(crate) resolved_type: Option<String>,
    pub(crate) printable_type: Option<String>,
    pub(crate) token: Option<String>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
    pub(crate) parent: Option<NodeId>,
}

impl NormalizedNode {
    pub(crate) fn new(
        type_label: String,
        resolved_type: Option<String>,
        printable_type: Option<String>,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            type_label,
            resolved_type,
            printable_type,
            token: None,
            children: SmallVec::new(),
            parent,
        }
    }

    /// Syntactic category label; compound (`A|B`) after compression.
    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn resolved_type(&self) -> Option<&str> {
        self.resolved_type.as_deref()
    }

    /// Operator-aware label, e.g. `BINARY_EXPRESSION:PLUS`.
    pub fn printable_type(&self) -> Option<&str> {
        self.printable_type.as_deref()
    }

    /// Label shown for this node: the printable type when present.
    pub fn display_label(&self) -> &str {
        self.printable_type.as_deref().unwrap_or(&self.type_label)
    }

    /// Present iff the node is a leaf.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed normalized tree. Nodes are stored in depth-first pre-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTree {
    pub(crate) nodes: Vec<NormalizedNode>,
    pub(crate) root: NodeId,
}

impl NormalizedTree {
    pub(crate) fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            root: NodeId(0),
        }
    }

    pub(crate) fn push(&mut self, node: NormalizedNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NormalizedNode {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &NormalizedNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in pre-order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NormalizedNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Leaf tokens in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| n.token())
    }
}
