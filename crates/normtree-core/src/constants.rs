//! Shared constants for the normtree pipeline.

/// Placeholder written in place of numeric literals outside the whitelist.
pub const NUMBER_LITERAL: &str = "<NUM>";

/// Numeric literals that survive literal normalization verbatim.
pub const NUMBER_WHITELIST: [&str; 4] = ["0", "1", "32", "64"];

/// Sentinel for tokens that canonicalize to nothing.
pub const EMPTY_TOKEN: &str = "<E>";

/// Separator between subtokens of a split name.
pub const SUBTOKEN_SEPARATOR: &str = "|";

/// Separator between type labels of a compressed unary chain.
pub const CHAIN_SEPARATOR: &str = "|";

/// Separator between an expression label and its operator label.
pub const OPERATOR_SEPARATOR: &str = ":";

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "normtree.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "NORMTREE_LOG";

/// Prefix shared by all environment overrides.
pub const ENV_PREFIX: &str = "NORMTREE_";

/// Default number of source units handed to the worker pool at once.
pub const DEFAULT_BATCH_SIZE: usize = 1000;
