//! Type aliases for hashed collections.

/// `HashMap` and `HashSet` using the aHash hasher.
pub mod ahash_map;
