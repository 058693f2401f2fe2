//! Java front-end: tree-sitter-java parse trees adapted into raw trees.
//!
//! Every child, named or anonymous, becomes a raw node. Whitespace between tokens becomes
//! `WHITE_SPACE` nodes, documentation comments are split into their parts, and each node's
//! class is resolved here once.

use std::cell::RefCell;
use std::ops::Range;
use std::path::Path;
use std::time::Instant;

use smallvec::SmallVec;
use tree_sitter::{Node, Parser};

use normtree_core::errors::ParseError;

use super::error_tolerant::count_errors;
use super::traits::{LanguageParser, ParsedSource};
use crate::resolve::{DeclaredTypeResolver, TypeResolver};
use crate::syntax::{Category, ExpressionShape, NodeClass, Punctuation, RawId, RawTree};

thread_local! {
    static PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

/// Nodes kept whole: their inner tokens never reach the raw tree.
const ATOMIC_KINDS: &[&str] = &["string_literal", "character_literal", "text_block"];

const LIST_KINDS: &[&str] = &[
    "argument_list",
    "formal_parameters",
    "modifiers",
    "type_parameters",
    "type_arguments",
    "super_interfaces",
    "extends_interfaces",
    "throws",
    "permits",
    "annotation_argument_list",
];

const INTEGER_KINDS: &[&str] = &[
    "decimal_integer_literal",
    "hex_integer_literal",
    "octal_integer_literal",
    "binary_integer_literal",
];

const REAL_KINDS: &[&str] = &["decimal_floating_point_literal", "hex_floating_point_literal"];

/// Java parser backed by tree-sitter. Parsers are kept per thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaParser;

impl JavaParser {
    pub fn new() -> Self {
        Self
    }

    /// Run `f` with this thread's parser, creating it on first use.
    fn with_parser<T>(f: impl FnOnce(&mut Parser) -> T) -> Result<T, ParseError> {
        PARSER.with(|cell| {
            let mut slot = cell.borrow_mut();
            let mut parser = match slot.take() {
                Some(parser) => parser,
                None => new_parser()?,
            };
            let result = f(&mut parser);
            *slot = Some(parser);
            Ok(result)
        })
    }
}

fn new_parser() -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .map_err(|e| ParseError::GrammarNotLoaded {
            language: "java".to_string(),
            message: e.to_string(),
        })?;
    Ok(parser)
}

impl LanguageParser for JavaParser {
    fn language(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &[&str] {
        &["java"]
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<ParsedSource, ParseError> {
        let start = Instant::now();
        let text = std::str::from_utf8(source)
            .map_err(|_| ParseError::InvalidUtf8 {
                path: path.to_path_buf(),
            })?
            .to_string();

        let tree = Self::with_parser(|parser| parser.parse(&text, None))?.ok_or_else(|| {
            ParseError::NoTree {
                path: path.to_path_buf(),
            }
        })?;
        let root = tree.root_node();

        let error_count = count_errors(root);
        if error_count > 0 {
            tracing::warn!(path = %path.display(), error_count, "java source parsed with errors");
        }

        let raw = adapt(root, text);
        Ok(ParsedSource {
            raw,
            error_count,
            parse_time_us: start.elapsed().as_micros() as u64,
        })
    }

    fn type_resolver(&self, tree: &RawTree) -> Box<dyn TypeResolver> {
        Box::new(DeclaredTypeResolver::index(tree))
    }
}

/// Adapt a tree-sitter tree over `source` into a raw tree.
///
/// The walk keeps its own stack, so nesting depth is bounded by memory, not by the thread stack.
pub fn adapt(root: Node<'_>, source: String) -> RawTree {
    let mut adapter = Adapter {
        tree: RawTree::with_source(source),
        stack: Vec::new(),
    };
    let (id, frame) = adapter.open(root, None);
    adapter.stack.extend(frame);
    adapter.run();
    adapter.tree.set_root(id);
    adapter.tree
}

/// A composite node whose children are still being adapted.
struct Frame<'t> {
    id: RawId,
    pos: usize,
    end: usize,
    kids: std::vec::IntoIter<Node<'t>>,
    children: SmallVec<[RawId; 4]>,
}

struct Adapter<'t> {
    tree: RawTree,
    stack: Vec<Frame<'t>>,
}

impl<'t> Adapter<'t> {
    /// Push `node` into the raw tree. Composite nodes come back with a frame; their children
    /// are added by `run`.
    fn open(&mut self, node: Node<'t>, parent: Option<RawId>) -> (RawId, Option<Frame<'t>>) {
        let span = node.start_byte()..node.end_byte();
        let category = classify(node, &self.tree.source()[span.clone()]);
        let class = category.class();
        let id = self.tree.push(category, span.clone(), parent);

        if class == NodeClass::DocComment {
            let children = self.doc_comment_children(id, span);
            self.tree.set_children(id, children);
            return (id, None);
        }
        if ATOMIC_KINDS.contains(&node.kind()) || node.child_count() == 0 {
            return (id, None);
        }
        let mut cursor = node.walk();
        let kids: Vec<Node<'t>> = node.children(&mut cursor).collect();
        let frame = Frame {
            id,
            pos: span.start,
            end: span.end,
            kids: kids.into_iter(),
            children: SmallVec::new(),
        };
        (id, Some(frame))
    }

    fn run(&mut self) {
        while let Some(frame) = self.stack.last_mut() {
            let parent = frame.id;
            match frame.kids.next() {
                Some(kid) if kid.is_missing() => {}
                Some(kid) => {
                    let gap = frame.pos..kid.start_byte();
                    frame.pos = frame.pos.max(kid.end_byte());
                    if !gap.is_empty() {
                        self.push_gap(gap, parent);
                    }
                    let (id, child_frame) = self.open(kid, Some(parent));
                    if let Some(top) = self.stack.last_mut() {
                        top.children.push(id);
                    }
                    self.stack.extend(child_frame);
                }
                None => {
                    let gap = frame.pos..frame.end;
                    if !gap.is_empty() {
                        self.push_gap(gap, parent);
                    }
                    if let Some(done) = self.stack.pop() {
                        self.tree.set_children(done.id, done.children);
                    }
                }
            }
        }
    }

    /// Emit a `WHITE_SPACE` node for a whitespace-only gap between tokens.
    fn push_gap(&mut self, gap: Range<usize>, parent: RawId) {
        if self.tree.source()[gap.clone()].trim().is_empty() {
            let id = self.tree.push(white_space(), gap, Some(parent));
            if let Some(frame) = self.stack.last_mut() {
                frame.children.push(id);
            }
        }
    }

    fn doc_comment_children(&mut self, id: RawId, span: Range<usize>) -> SmallVec<[RawId; 4]> {
        let parts = doc_comment_parts(&self.tree.source()[span.clone()]);
        parts
            .into_iter()
            .map(|(category, range)| {
                let range = span.start + range.start..span.start + range.end;
                self.tree.push(category, range, Some(id))
            })
            .collect()
    }
}

fn white_space() -> Category {
    Category::new("WHITE_SPACE", NodeClass::Whitespace)
}

/// Split a `/** ... */` comment into start, data, leading-asterisk, whitespace and end parts.
/// Ranges are relative to `text`.
fn doc_comment_parts(text: &str) -> Vec<(Category, Range<usize>)> {
    let bytes = text.as_bytes();
    let mut parts = vec![(Category::other("DOC_COMMENT_START"), 0..3)];
    let end = if text.len() >= 5 && text.ends_with("*/") {
        text.len() - 2
    } else {
        text.len()
    };

    let mut i = 3;
    let mut line_start = false;
    while i < end {
        let c = bytes[i];
        if c.is_ascii_whitespace() {
            let mut j = i;
            while j < end && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if bytes[i..j].contains(&b'\n') {
                line_start = true;
            }
            parts.push((white_space(), i..j));
            i = j;
        } else if c == b'*' && line_start {
            let mut j = i;
            while j < end && bytes[j] == b'*' {
                j += 1;
            }
            parts.push((
                Category::new("DOC_COMMENT_LEADING_ASTERISKS", NodeClass::DocAsterisks),
                i..j,
            ));
            line_start = false;
            i = j;
        } else {
            let mut j = i;
            while j < end && bytes[j] != b'\n' {
                j += 1;
            }
            while j > i && bytes[j - 1].is_ascii_whitespace() {
                j -= 1;
            }
            parts.push((Category::other("DOC_COMMENT_DATA"), i..j));
            line_start = false;
            i = j;
        }
    }
    if end < text.len() {
        parts.push((Category::other("DOC_COMMENT_END"), end..text.len()));
    }
    parts
}

fn classify(node: Node, text: &str) -> Category {
    let kind = node.kind();
    if !node.is_named() {
        return classify_token(kind);
    }
    match kind {
        "line_comment" => Category::new("END_OF_LINE_COMMENT", NodeClass::Comment),
        "block_comment" if text.starts_with("/**") && text != "/**/" => {
            Category::new("DOC_COMMENT", NodeClass::DocComment)
        }
        "block_comment" => Category::new("C_STYLE_COMMENT", NodeClass::Comment),
        "binary_expression" => expression("BINARY_EXPRESSION", ExpressionShape::Binary),
        "assignment_expression" => expression("ASSIGNMENT_EXPRESSION", ExpressionShape::Assignment),
        "unary_expression" => expression("PREFIX_EXPRESSION", ExpressionShape::Prefix),
        "update_expression" if operator_comes_first(node) => {
            expression("PREFIX_EXPRESSION", ExpressionShape::Prefix)
        }
        "update_expression" => expression("POSTFIX_EXPRESSION", ExpressionShape::Postfix),
        k if INTEGER_KINDS.contains(&k) => {
            Category::new(k.to_ascii_uppercase(), NodeClass::IntegerLiteral)
        }
        k if REAL_KINDS.contains(&k) => Category::new(k.to_ascii_uppercase(), NodeClass::RealLiteral),
        k if LIST_KINDS.contains(&k) => Category::new(k.to_ascii_uppercase(), NodeClass::List),
        k => Category::other(k.to_ascii_uppercase()),
    }
}

fn expression(label: &str, shape: ExpressionShape) -> Category {
    Category::new(label, NodeClass::Expression(shape))
}

fn operator_comes_first(node: Node) -> bool {
    node.child(0)
        .is_some_and(|first| matches!(first.kind(), "++" | "--"))
}

/// Classify an anonymous token by its literal text.
fn classify_token(kind: &str) -> Category {
    if let Some(punct) = Punctuation::from_symbol(kind) {
        return Category::punctuation(punct);
    }
    if let Some(label) = operator_label(kind) {
        return Category::new(label, NodeClass::Operator);
    }
    if kind == "@interface" {
        return Category::new("AT_INTERFACE_KEYWORD", NodeClass::Keyword);
    }
    if !kind.is_empty() && kind.bytes().all(|b| b.is_ascii_lowercase() || b == b'-') {
        let label = format!("{}_KEYWORD", kind.to_ascii_uppercase().replace('-', "_"));
        return Category::new(label, NodeClass::Keyword);
    }
    let label = match kind {
        "?" => "QUEST",
        ":" => "COLON",
        "->" => "ARROW",
        "::" => "DOUBLE_COLON",
        other => other,
    };
    Category::other(label)
}

fn operator_label(symbol: &str) -> Option<&'static str> {
    let label = match symbol {
        "=" => "EQ",
        "==" => "EQEQ",
        "!=" => "NE",
        "<" => "LT",
        ">" => "GT",
        "<=" => "LE",
        ">=" => "GE",
        "!" => "EXCL",
        "~" => "TILDE",
        "&&" => "ANDAND",
        "||" => "OROR",
        "++" => "PLUSPLUS",
        "--" => "MINUSMINUS",
        "+" => "PLUS",
        "-" => "MINUS",
        "*" => "ASTERISK",
        "/" => "DIV",
        "%" => "PERC",
        "&" => "AND",
        "|" => "OR",
        "^" => "XOR",
        "<<" => "LTLT",
        ">>" => "GTGT",
        ">>>" => "GTGTGT",
        "+=" => "PLUSEQ",
        "-=" => "MINUSEQ",
        "*=" => "ASTERISKEQ",
        "/=" => "DIVEQ",
        "%=" => "PERCEQ",
        "&=" => "ANDEQ",
        "|=" => "OREQ",
        "^=" => "XOREQ",
        "<<=" => "LTLTEQ",
        ">>=" => "GTGTEQ",
        ">>>=" => "GTGTGTEQ",
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParsedSource {
        JavaParser::new()
            .parse(source.as_bytes(), Path::new("Test.java"))
            .unwrap()
    }

    fn find(tree: &RawTree, label: &str) -> Option<RawId> {
        tree.ids().find(|&id| tree.category(id).label() == label)
    }

    #[test]
    fn test_language_identity() {
        let parser = JavaParser::new();
        assert_eq!(parser.language(), "java");
        assert_eq!(parser.extensions(), &["java"]);
    }

    #[test]
    fn test_doc_comment_parts() {
        let text = "/**\n * Adds.\n */";
        let parts = doc_comment_parts(text);
        let labels: Vec<_> = parts.iter().map(|(c, _)| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "DOC_COMMENT_START",
                "WHITE_SPACE",
                "DOC_COMMENT_LEADING_ASTERISKS",
                "WHITE_SPACE",
                "DOC_COMMENT_DATA",
                "WHITE_SPACE",
                "DOC_COMMENT_END",
            ]
        );
        let data = &parts[4].1;
        assert_eq!(&text[data.clone()], "Adds.");
    }

    #[test]
    fn test_token_classes() {
        assert_eq!(classify_token("+").class(), NodeClass::Operator);
        assert_eq!(classify_token("+").label(), "PLUS");
        assert_eq!(classify_token(";").label(), "SEMICOLON");
        assert_eq!(classify_token("return").label(), "RETURN_KEYWORD");
        assert_eq!(classify_token("non-sealed").label(), "NON_SEALED_KEYWORD");
        assert_eq!(classify_token("->").class(), NodeClass::Other);
    }

    #[test]
    fn test_raw_text_round_trips_through_leaves() {
        let source = "class A { int f(int x) { return x + 1; } }";
        let parsed = parse(source);
        assert!(!parsed.has_errors());
        let raw = &parsed.raw;
        let leaves: String = raw
            .ids()
            .filter(|&id| raw.children(id).is_empty())
            .map(|id| raw.text(id))
            .collect();
        assert_eq!(leaves, source);
    }

    #[test]
    fn test_expression_shapes() {
        let parsed = parse("class A { void f() { i++; --j; k = -i; } }");
        let raw = &parsed.raw;
        assert!(find(raw, "POSTFIX_EXPRESSION").is_some());
        assert!(find(raw, "ASSIGNMENT_EXPRESSION").is_some());
        let prefixes = raw
            .ids()
            .filter(|&id| raw.category(id).label() == "PREFIX_EXPRESSION")
            .count();
        assert_eq!(prefixes, 2);
    }

    #[test]
    fn test_comment_classes() {
        let parsed = parse("/** Doc. */\nclass A {\n  // line\n  /* block */\n}");
        let raw = &parsed.raw;
        let doc = find(raw, "DOC_COMMENT").unwrap();
        assert_eq!(raw.category(doc).class(), NodeClass::DocComment);
        assert!(!raw.children(doc).is_empty());
        assert!(find(raw, "END_OF_LINE_COMMENT").is_some());
        assert!(find(raw, "C_STYLE_COMMENT").is_some());
    }

    #[test]
    fn test_syntax_errors_are_counted() {
        let parsed = parse("class A { void f( { }");
        assert!(parsed.has_errors());
    }
}
