//! Content hashing and byte comparison of files.

pub mod compare;
pub mod cryptographic;

pub use compare::files_identical;
pub use cryptographic::{compute_digest, short_digest};

/// Chunk size used when streaming file contents
pub const CHUNK_SIZE: usize = 8192;
