//! Type resolution capability consumed by the tree builder.

pub mod declared;
pub mod traits;

pub use declared::DeclaredTypeResolver;
pub use traits::{NoTypeResolver, TypeResolver, TypeSignature};
