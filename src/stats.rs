//! Stats module for computing file statistics
//!
//! This module provides the single-pass engine that derives byte, line,
//! word, and character counts from a file's contents.

mod compute;
mod types;

// Re-export public types
pub use compute::compute_stats;
pub use types::FileStats;
