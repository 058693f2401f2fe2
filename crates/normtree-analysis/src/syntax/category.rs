//! Syntactic categories of raw nodes.
//!
//! A front-end adapter resolves each node's class once, when it builds the raw tree.
//! Everything downstream matches on `NodeClass` instead of re-inspecting node kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural symbols dropped by `remove_printable_symbols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Punctuation {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Semicolon,
    Comma,
    Dot,
    Ellipsis,
    At,
}

impl Punctuation {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let punct = match symbol {
            "{" => Self::LBrace,
            "}" => Self::RBrace,
            "[" => Self::LBracket,
            "]" => Self::RBracket,
            "(" => Self::LParen,
            ")" => Self::RParen,
            ";" => Self::Semicolon,
            "," => Self::Comma,
            "." => Self::Dot,
            "..." => Self::Ellipsis,
            "@" => Self::At,
            _ => return None,
        };
        Some(punct)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::LParen => "LPARENTH",
            Self::RParen => "RPARENTH",
            Self::Semicolon => "SEMICOLON",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Ellipsis => "ELLIPSIS",
            Self::At => "AT",
        }
    }
}

/// Expression shapes that carry an operator child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionShape {
    Binary,
    Prefix,
    Postfix,
    Assignment,
}

/// Closed classification of a raw node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeClass {
    Punctuation(Punctuation),
    Whitespace,
    /// Leading `*` run on a documentation comment line.
    DocAsterisks,
    Keyword,
    Operator,
    /// Line or block comment that is not documentation.
    Comment,
    DocComment,
    IntegerLiteral,
    RealLiteral,
    /// Argument, parameter, modifier, type-parameter and similar bracketed lists.
    List,
    Expression(ExpressionShape),
    Other,
}

impl NodeClass {
    pub fn is_numeric_literal(self) -> bool {
        matches!(self, Self::IntegerLiteral | Self::RealLiteral)
    }

    pub fn expression_shape(self) -> Option<ExpressionShape> {
        match self {
            Self::Expression(shape) => Some(shape),
            _ => None,
        }
    }
}

/// A node's category: the label written into the normalized tree plus its class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    label: String,
    class: NodeClass,
}

impl Category {
    pub fn new(label: impl Into<String>, class: NodeClass) -> Self {
        Self {
            label: label.into(),
            class,
        }
    }

    /// Category with no special class.
    pub fn other(label: impl Into<String>) -> Self {
        Self::new(label, NodeClass::Other)
    }

    pub fn punctuation(punct: Punctuation) -> Self {
        Self::new(punct.label(), NodeClass::Punctuation(punct))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn class(&self) -> NodeClass {
        self.class
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
