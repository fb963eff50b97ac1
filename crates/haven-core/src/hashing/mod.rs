//! Canonicalización JSON y hashing (fingerprints de definiciones y envíos).

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::hash_value;
