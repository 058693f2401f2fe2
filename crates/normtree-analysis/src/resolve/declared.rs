//! Syntactic type resolver for trees produced by the Java adapter.
//!
//! Resolves literals to their Java types, declarations to their declared type, and
//! identifiers to the declared type of the nearest enclosing local, parameter or field
//! with the same name. No inference is attempted: anything else is unknown.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use normtree_core::errors::ResolveError;

use super::traits::{TypeResolver, TypeSignature};
use crate::syntax::{NodeClass, RawId, RawTree};

/// Nodes that open a scope for the declarations beneath them.
const SCOPE_LABELS: &[&str] = &[
    "PROGRAM",
    "CLASS_BODY",
    "INTERFACE_BODY",
    "ENUM_BODY",
    "RECORD_DECLARATION",
    "METHOD_DECLARATION",
    "CONSTRUCTOR_DECLARATION",
    "LAMBDA_EXPRESSION",
    "BLOCK",
    "FOR_STATEMENT",
    "ENHANCED_FOR_STATEMENT",
    "CATCH_CLAUSE",
    "TRY_WITH_RESOURCES_STATEMENT",
    "SWITCH_BLOCK_STATEMENT_GROUP",
];

const TYPE_LABELS: &[&str] = &[
    "TYPE_IDENTIFIER",
    "SCOPED_TYPE_IDENTIFIER",
    "GENERIC_TYPE",
    "ARRAY_TYPE",
    "INTEGRAL_TYPE",
    "FLOATING_POINT_TYPE",
    "BOOLEAN_TYPE",
    "VOID_TYPE",
    "CATCH_TYPE",
];

/// Declarations whose names sit in `VARIABLE_DECLARATOR` children.
const DECLARATOR_LABELS: &[&str] = &[
    "LOCAL_VARIABLE_DECLARATION",
    "FIELD_DECLARATION",
    "CONSTANT_DECLARATION",
    "SPREAD_PARAMETER",
];

/// Declarations whose name is a direct `IDENTIFIER` child.
const DIRECT_LABELS: &[&str] = &[
    "FORMAL_PARAMETER",
    "CATCH_FORMAL_PARAMETER",
    "RESOURCE",
    "ENHANCED_FOR_STATEMENT",
];

#[derive(Debug, Clone)]
struct Binding {
    scope: RawId,
    signature: TypeSignature,
}

/// Declaration index over one raw tree.
#[derive(Debug, Clone, Default)]
pub struct DeclaredTypeResolver {
    bindings: FxHashMap<String, SmallVec<[Binding; 2]>>,
    declarations: FxHashMap<RawId, TypeSignature>,
    node_count: usize,
}

impl DeclaredTypeResolver {
    /// Index every typed declaration in `tree`.
    pub fn index(tree: &RawTree) -> Self {
        let mut resolver = Self {
            node_count: tree.len(),
            ..Self::default()
        };

        for id in tree.ids() {
            let label = tree.category(id).label();
            let declarator = DECLARATOR_LABELS.contains(&label);
            let direct = DIRECT_LABELS.contains(&label);
            if !declarator && !direct {
                continue;
            }
            let Some(signature) = declared_type(tree, id) else {
                continue;
            };
            resolver.declarations.insert(id, signature.clone());

            let scope = if label == "ENHANCED_FOR_STATEMENT" {
                Some(id)
            } else {
                tree.ancestors(id)
                    .find(|&a| SCOPE_LABELS.contains(&tree.category(a).label()))
            };
            let Some(scope) = scope else {
                continue;
            };

            let names: SmallVec<[RawId; 2]> = if declarator {
                tree.children(id)
                    .iter()
                    .filter(|&&c| tree.category(c).label() == "VARIABLE_DECLARATOR")
                    .filter_map(|&c| first_identifier(tree, c))
                    .collect()
            } else {
                first_identifier(tree, id).into_iter().collect()
            };

            for name in names {
                resolver
                    .bindings
                    .entry(tree.text(name).to_string())
                    .or_default()
                    .push(Binding {
                        scope,
                        signature: signature.clone(),
                    });
            }
        }

        resolver
    }

    fn resolve_identifier(&self, tree: &RawTree, node: RawId) -> Option<TypeSignature> {
        if names_member(tree, node) {
            return None;
        }
        let bindings = self.bindings.get(tree.text(node))?;
        tree.ancestors(node).find_map(|ancestor| {
            bindings
                .iter()
                .find(|b| b.scope == ancestor)
                .map(|b| b.signature.clone())
        })
    }
}

impl TypeResolver for DeclaredTypeResolver {
    fn resolve(&self, tree: &RawTree, node: RawId) -> Result<Option<TypeSignature>, ResolveError> {
        if node.index() >= self.node_count || tree.get(node).is_none() {
            return Err(ResolveError::UnknownNode { node: node.index() });
        }
        if let Some(signature) = self.declarations.get(&node) {
            return Ok(Some(signature.clone()));
        }

        let category = tree.category(node);
        let text = tree.text(node);
        let resolved = match category.class() {
            NodeClass::IntegerLiteral => Some(if text.ends_with(['l', 'L']) { "long" } else { "int" }),
            NodeClass::RealLiteral => Some(if text.ends_with(['f', 'F']) { "float" } else { "double" }),
            _ => match category.label() {
                "STRING_LITERAL" | "TEXT_BLOCK" => Some("java.lang.String"),
                "CHARACTER_LITERAL" => Some("char"),
                "TRUE" | "FALSE" => Some("boolean"),
                "IDENTIFIER" => return Ok(self.resolve_identifier(tree, node)),
                _ => None,
            },
        };
        Ok(resolved.map(str::to_string))
    }
}

fn declared_type(tree: &RawTree, declaration: RawId) -> Option<TypeSignature> {
    let ty = tree
        .children(declaration)
        .iter()
        .copied()
        .find(|&c| TYPE_LABELS.contains(&tree.category(c).label()))?;
    let signature = tree.text(ty).split_whitespace().collect::<Vec<_>>().join(" ");
    // `var` carries no declared type.
    (signature != "var" && !signature.is_empty()).then_some(signature)
}

/// True when `node` names a field or method rather than a variable in scope: the member of a
/// field access, the name of an invoked method, or a method's declared name.
fn names_member(tree: &RawTree, node: RawId) -> bool {
    let Some(parent) = tree.parent(node) else {
        return false;
    };
    let siblings = tree.children(parent);
    match tree.category(parent).label() {
        "FIELD_ACCESS" => siblings.first() != Some(&node),
        "METHOD_INVOCATION" => siblings
            .iter()
            .skip_while(|&&s| s != node)
            .skip(1)
            .find(|&&s| {
                !matches!(
                    tree.category(s).class(),
                    NodeClass::Whitespace | NodeClass::Comment | NodeClass::DocComment
                )
            })
            .is_some_and(|&s| tree.category(s).label() == "ARGUMENT_LIST"),
        "METHOD_DECLARATION" => true,
        _ => false,
    }
}

fn first_identifier(tree: &RawTree, node: RawId) -> Option<RawId> {
    tree.children(node)
        .iter()
        .copied()
        .find(|&c| tree.category(c).label() == "IDENTIFIER")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parsers::{JavaParser, LanguageParser};
    use crate::syntax::{Category, RawTreeBuilder};

    /// `{ int count = 0; count }` with a nested `{ String count; count }` block.
    fn shadowing_tree() -> (RawTree, RawId, RawId, RawId) {
        let mut b = RawTreeBuilder::new();
        let ty = b.leaf(Category::other("INTEGRAL_TYPE"), "int");
        let name = b.leaf(Category::other("IDENTIFIER"), "count");
        let zero = b.leaf(Category::new("DECIMAL_INTEGER_LITERAL", NodeClass::IntegerLiteral), "0");
        let declarator = b.node(Category::other("VARIABLE_DECLARATOR"), [name, zero]);
        let decl = b.node(Category::other("LOCAL_VARIABLE_DECLARATION"), [ty, declarator]);
        let outer_use = b.leaf(Category::other("IDENTIFIER"), "count");

        let inner_ty = b.leaf(Category::other("TYPE_IDENTIFIER"), "String");
        let inner_name = b.leaf(Category::other("IDENTIFIER"), "count");
        let inner_declarator = b.node(Category::other("VARIABLE_DECLARATOR"), [inner_name]);
        let inner_decl = b.node(
            Category::other("LOCAL_VARIABLE_DECLARATION"),
            [inner_ty, inner_declarator],
        );
        let inner_use = b.leaf(Category::other("IDENTIFIER"), "count");
        let inner = b.node(Category::other("BLOCK"), [inner_decl, inner_use]);

        let outer = b.node(Category::other("BLOCK"), [decl, outer_use, inner]);
        (b.finish(outer), outer_use, inner_use, zero)
    }

    #[test]
    fn test_nearest_declaration_wins() {
        let (tree, outer_use, inner_use, _) = shadowing_tree();
        let resolver = DeclaredTypeResolver::index(&tree);
        assert_eq!(resolver.resolve(&tree, outer_use).unwrap().as_deref(), Some("int"));
        assert_eq!(resolver.resolve(&tree, inner_use).unwrap().as_deref(), Some("String"));
    }

    #[test]
    fn test_literal_types() {
        let (tree, _, _, zero) = shadowing_tree();
        let resolver = DeclaredTypeResolver::index(&tree);
        assert_eq!(resolver.resolve(&tree, zero).unwrap().as_deref(), Some("int"));
    }

    #[test]
    fn test_unknown_identifier_is_none() {
        let mut b = RawTreeBuilder::new();
        let name = b.leaf(Category::other("IDENTIFIER"), "missing");
        let block = b.node(Category::other("BLOCK"), [name]);
        let tree = b.finish(block);
        let resolver = DeclaredTypeResolver::index(&tree);
        assert_eq!(resolver.resolve(&tree, name).unwrap(), None);
    }

    #[test]
    fn test_member_names_are_not_variables() {
        let source = "class A { String count; \
                      void f(B other) { int count = 0; other.count.length(); count(); } }";
        let parsed = JavaParser::new()
            .parse(source.as_bytes(), Path::new("A.java"))
            .unwrap();
        let tree = &parsed.raw;
        let resolver = DeclaredTypeResolver::index(tree);

        let by_parent = |label: &str| -> Vec<RawId> {
            tree.ids()
                .filter(|&id| tree.category(id).label() == "IDENTIFIER")
                .filter(|&id| tree.text(id) == "count" || tree.text(id) == "other")
                .filter(|&id| tree.parent(id).is_some_and(|p| tree.category(p).label() == label))
                .collect()
        };

        let access = by_parent("FIELD_ACCESS");
        let member: Vec<_> = access.iter().filter(|&&id| tree.text(id) == "count").collect();
        let object: Vec<_> = access.iter().filter(|&&id| tree.text(id) == "other").collect();
        assert_eq!(member.len(), 1);
        assert_eq!(resolver.resolve(tree, *member[0]).unwrap(), None);
        assert_eq!(object.len(), 1);
        assert_eq!(resolver.resolve(tree, *object[0]).unwrap().as_deref(), Some("B"));

        let call = by_parent("METHOD_INVOCATION");
        assert_eq!(call.len(), 1);
        assert_eq!(resolver.resolve(tree, call[0]).unwrap(), None);

        let declared = by_parent("VARIABLE_DECLARATOR");
        let local: Vec<_> = declared
            .iter()
            .filter(|&&id| tree.ancestors(id).any(|a| tree.category(a).label() == "BLOCK"))
            .collect();
        assert_eq!(local.len(), 1);
        assert_eq!(resolver.resolve(tree, *local[0]).unwrap().as_deref(), Some("int"));
    }

    #[test]
    fn test_method_name_is_not_a_variable() {
        let mut b = RawTreeBuilder::new();
        let ty = b.leaf(Category::other("INTEGRAL_TYPE"), "int");
        let name = b.leaf(Category::other("IDENTIFIER"), "size");
        let declarator = b.node(Category::other("VARIABLE_DECLARATOR"), [name]);
        let decl = b.node(Category::other("FIELD_DECLARATION"), [ty, declarator]);
        let method = b.leaf(Category::other("IDENTIFIER"), "size");
        let params = b.leaf(Category::new("FORMAL_PARAMETERS", NodeClass::List), "()");
        let method_decl = b.node(Category::other("METHOD_DECLARATION"), [method, params]);
        let body = b.node(Category::other("CLASS_BODY"), [decl, method_decl]);
        let tree = b.finish(body);
        let resolver = DeclaredTypeResolver::index(&tree);
        assert_eq!(resolver.resolve(&tree, name).unwrap().as_deref(), Some("int"));
        assert_eq!(resolver.resolve(&tree, method).unwrap(), None);
    }

    #[test]
    fn test_foreign_node_is_an_error() {
        let (tree, ..) = shadowing_tree();
        let resolver = DeclaredTypeResolver::index(&tree);
        assert!(resolver.resolve(&tree, RawId(10_000)).is_err());
    }
}
