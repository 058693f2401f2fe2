use normtree_analysis::pipeline::{build, compress};
use normtree_analysis::syntax::{
    Category, ExpressionShape, NodeClass, Punctuation, RawId, RawTree, RawTreeBuilder,
};
use normtree_analysis::tree::NormalizedTree;
use normtree_core::config::TreeConfig;
use proptest::prelude::*;

/// Generated raw tree shape: leaves carry text, inner nodes carry children.
#[derive(Debug, Clone)]
enum Shape {
    Leaf(usize, String),
    Node(usize, Vec<Shape>),
}

fn category(kind: usize) -> Category {
    match kind % 11 {
        0 => Category::other("IDENTIFIER"),
        1 => Category::new("WHITE_SPACE", NodeClass::Whitespace),
        2 => Category::punctuation(Punctuation::Semicolon),
        3 => Category::new("RETURN_KEYWORD", NodeClass::Keyword),
        4 => Category::new("PLUS", NodeClass::Operator),
        5 => Category::new("END_OF_LINE_COMMENT", NodeClass::Comment),
        6 => Category::new("DOC_COMMENT", NodeClass::DocComment),
        7 => Category::new("DECIMAL_INTEGER_LITERAL", NodeClass::IntegerLiteral),
        8 => Category::new("ARGUMENT_LIST", NodeClass::List),
        9 => Category::new(
            "BINARY_EXPRESSION",
            NodeClass::Expression(ExpressionShape::Binary),
        ),
        _ => Category::other("BLOCK"),
    }
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = (0..11usize, "[a-zA-Z0-9_ ;+]{0,8}").prop_map(|(k, t)| Shape::Leaf(k, t));
    leaf.prop_recursive(4, 64, 5, |inner| {
        (0..11usize, prop::collection::vec(inner, 1..5)).prop_map(|(k, c)| Shape::Node(k, c))
    })
}

fn config() -> impl Strategy<Value = TreeConfig> {
    any::<[bool; 13]>().prop_map(|flags| {
        let mut config = TreeConfig::verbatim();
        for (name, on) in TreeConfig::FLAG_NAMES.iter().zip(flags) {
            if let Some(flag) = config.flag_mut(name) {
                *flag = on;
            }
        }
        config
    })
}

fn add(b: &mut RawTreeBuilder, shape: &Shape) -> RawId {
    match shape {
        Shape::Leaf(kind, text) => b.leaf(category(*kind), text),
        Shape::Node(kind, children) => {
            let ids: Vec<RawId> = children.iter().map(|c| add(b, c)).collect();
            b.node(category(*kind), ids)
        }
    }
}

fn raw_tree(shape: &Shape) -> RawTree {
    let mut b = RawTreeBuilder::new();
    let root = add(&mut b, shape);
    b.finish(root)
}

fn parents_consistent(tree: &NormalizedTree) -> bool {
    tree.iter().all(|(id, node)| {
        node.children()
            .iter()
            .all(|&child| tree.parent(child) == Some(id))
    })
}

proptest! {
    #[test]
    fn leaf_iff_token(s in shape(), config in config()) {
        let tree = build(&raw_tree(&s), &config);
        for (_, node) in tree.iter() {
            prop_assert_eq!(node.is_leaf(), node.token().is_some());
        }
        prop_assert!(parents_consistent(&tree));
    }

    #[test]
    fn build_is_deterministic(s in shape(), config in config()) {
        let raw = raw_tree(&s);
        prop_assert_eq!(build(&raw, &config), build(&raw, &config));
    }

    #[test]
    fn verbatim_keeps_every_node(s in shape()) {
        let raw = raw_tree(&s);
        let tree = build(&raw, &TreeConfig::verbatim());
        prop_assert_eq!(tree.len(), raw.len());
    }

    #[test]
    fn whitespace_never_below_root(s in shape(), config in config()) {
        let mut config = config;
        config.remove_white_spaces = true;
        config.compress_tree = false;
        let tree = build(&raw_tree(&s), &config);
        for (id, node) in tree.iter() {
            if id != tree.root() {
                prop_assert_ne!(node.type_label(), "WHITE_SPACE");
            }
        }
    }

    #[test]
    fn compressed_tree_has_no_unary_nodes(s in shape(), config in config()) {
        let mut config = config;
        config.compress_tree = true;
        let tree = build(&raw_tree(&s), &config);
        prop_assert!(tree.iter().all(|(_, n)| n.children().len() != 1));
        prop_assert!(parents_consistent(&tree));
    }

    #[test]
    fn compression_is_idempotent(s in shape(), config in config()) {
        let mut config = config;
        config.compress_tree = true;
        let tree = build(&raw_tree(&s), &config);
        prop_assert_eq!(compress(&tree), tree);
    }

    #[test]
    fn compression_keeps_leaf_tokens(s in shape(), config in config()) {
        let mut config = config;
        config.compress_tree = false;
        let raw = raw_tree(&s);
        let plain = build(&raw, &config);
        let compressed = compress(&plain);
        let before: Vec<_> = plain.tokens().collect();
        let after: Vec<_> = compressed.tokens().collect();
        prop_assert_eq!(before, after);
    }
}
