//! Leaf token normalization.

pub mod subtokens;
pub mod token;

pub use subtokens::{normalize_token, split_to_subtokens};
pub use token::{escape_token, normalize};
