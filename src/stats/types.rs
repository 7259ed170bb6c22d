//! Type definitions for file statistics

/// Counts computed for a single file
///
/// Built once per engine invocation and never mutated afterwards. The byte
/// count comes from filesystem metadata; the other three come from the
/// decoded read pass, so `bytes >= chars` holds for multi-byte content and
/// `chars >= lines` always (each newline is itself a character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStats {
    /// Total file size in bytes, from metadata rather than reading
    pub bytes: u64,
    /// Number of `\n` characters encountered
    pub lines: u64,
    /// Number of maximal whitespace-delimited runs of non-whitespace
    pub words: u64,
    /// Number of decoded characters read
    pub chars: u64,
}
