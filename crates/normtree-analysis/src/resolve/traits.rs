//! TypeResolver trait: semantic type lookup for raw nodes.

use normtree_core::errors::ResolveError;

use crate::syntax::{RawId, RawTree};

/// Resolved type signature, e.g. `int` or `java.util.List<String>`.
pub type TypeSignature = String;

/// Looks up the semantic type of a raw node.
///
/// `Ok(None)` means the type is unknown. Errors are never fatal: the builder logs them and
/// records an unknown type.
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, tree: &RawTree, node: RawId) -> Result<Option<TypeSignature>, ResolveError>;
}

/// Resolver that never knows a type.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTypeResolver;

impl TypeResolver for NoTypeResolver {
    fn resolve(&self, _tree: &RawTree, _node: RawId) -> Result<Option<TypeSignature>, ResolveError> {
        Ok(None)
    }
}

impl<R: TypeResolver + ?Sized> TypeResolver for Box<R> {
    fn resolve(&self, tree: &RawTree, node: RawId) -> Result<Option<TypeSignature>, ResolveError> {
        (**self).resolve(tree, node)
    }
}
