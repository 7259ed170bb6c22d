//! The single-pass statistics engine
//!
//! One metadata query for the byte count, then one buffered read pass that
//! decodes the content as UTF-8 and counts characters, newlines, and word
//! boundaries as they stream by.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::IwcError;
use crate::stats::types::FileStats;

/// Read buffer size for the decode pass
const READ_CHUNK: usize = 64 * 1024;

/// Compute line, word, character, and byte counts for the file at `path`
///
/// The byte count is taken from filesystem metadata, never by reading.
/// The remaining counts come from a single sequential pass over the
/// decoded content. Malformed UTF-8 decodes to U+FFFD (one replacement
/// per rejected sequence), so binary input degrades to a best-effort
/// character count instead of failing.
///
/// The file handle is scoped to this call and released on every exit
/// path, including read errors.
///
/// # Arguments
/// * `path` - Path to an existing, readable file
///
/// # Returns
/// * `Ok(FileStats)` - All four counts
/// * `Err(IwcError::Io)` - Metadata, open, or read failure, tagged with the path
pub fn compute_stats(path: &Path) -> Result<FileStats, IwcError> {
    let bytes = fs::metadata(path)
        .map_err(|e| IwcError::io(path, e))?
        .len();

    let file = File::open(path).map_err(|e| IwcError::io(path, e))?;
    let mut reader = BufReader::with_capacity(READ_CHUNK, file);

    let mut scan = Scan::default();
    // Bytes of a multi-byte sequence split across a chunk boundary
    let mut pending: Vec<u8> = Vec::new();

    loop {
        let chunk = reader.fill_buf().map_err(|e| IwcError::io(path, e))?;
        if chunk.is_empty() {
            break;
        }
        let consumed = chunk.len();

        if pending.is_empty() {
            let tail = scan.feed(chunk);
            pending.extend_from_slice(&chunk[consumed - tail..]);
        } else {
            pending.extend_from_slice(chunk);
            let tail = scan.feed(&pending);
            let decoded = pending.len() - tail;
            pending.drain(..decoded);
        }

        reader.consume(consumed);
    }

    // A sequence still incomplete at end of file is malformed
    if !pending.is_empty() {
        scan.observe(char::REPLACEMENT_CHARACTER);
    }

    let stats = scan.finish(bytes);

    #[cfg(debug_assertions)]
    log::debug!("scanned {:?}: {:?}", path, stats);

    Ok(stats)
}

/// Streaming state for one scan
#[derive(Debug, Default)]
struct Scan {
    lines: u64,
    words: u64,
    chars: u64,
    in_word: bool,
}

impl Scan {
    /// Decode the valid UTF-8 prefix of `bytes`, observing every character
    ///
    /// Malformed sequences are observed as U+FFFD and skipped. Returns the
    /// number of trailing bytes that form an incomplete sequence and must
    /// be fed again once more input arrives.
    fn feed(&mut self, bytes: &[u8]) -> usize {
        let mut input = bytes;
        loop {
            match std::str::from_utf8(input) {
                Ok(text) => {
                    self.observe_str(text);
                    return 0;
                }
                Err(err) => {
                    let (valid, rest) = input.split_at(err.valid_up_to());
                    // The prefix below valid_up_to() is known-valid
                    if let Ok(text) = std::str::from_utf8(valid) {
                        self.observe_str(text);
                    }
                    match err.error_len() {
                        Some(bad) => {
                            self.observe(char::REPLACEMENT_CHARACTER);
                            input = &rest[bad..];
                        }
                        // Sequence cut off at the end of the chunk
                        None => return rest.len(),
                    }
                }
            }
        }
    }

    fn observe_str(&mut self, text: &str) {
        for c in text.chars() {
            self.observe(c);
        }
    }

    /// Advance the counters for one decoded character
    fn observe(&mut self, c: char) {
        self.chars += 1;

        // Standard `wc -l` counts newline characters only
        if c == '\n' {
            self.lines += 1;
        }

        if c.is_whitespace() {
            self.in_word = false;
        } else if !self.in_word {
            self.words += 1;
            self.in_word = true;
        }
    }

    fn finish(self, bytes: u64) -> FileStats {
        FileStats {
            bytes,
            lines: self.lines,
            words: self.words,
            chars: self.chars,
        }
    }
}

#[cfg(test)]
#[path = "compute_tests.rs"]
mod compute_tests;
