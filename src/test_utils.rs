//! Shared test utilities for iwc
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::stats::{FileStats, compute_stats};

    /// Write `content` to a fresh temp file and return its handle
    ///
    /// The file is deleted when the handle drops, so keep it in scope for
    /// as long as the path is in use.
    pub fn temp_file_with(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content).expect("write temp file");
        file.flush().expect("flush temp file");
        file
    }

    /// Stats for a throwaway file holding `content`
    pub fn stats_for(content: &[u8]) -> FileStats {
        let file = temp_file_with(content);
        compute_stats(file.path()).expect("compute stats")
    }
}
