//! Output rendering for file statistics
//!
//! Pure formatting. The engine always produces all four counts; this
//! module prints only what the command's mode selects, right-aligned the
//! way `wc` does.

use std::path::Path;

use crate::command::Mode;
use crate::stats::FileStats;

/// Render the counts `mode` selects, followed by the file's display name
///
/// Counts are right-aligned to at least `width` columns. `All` prints the
/// lines, words, and bytes triple.
pub fn render(stats: &FileStats, mode: Mode, name: &str, width: usize) -> String {
    match mode {
        Mode::Bytes => format!("{:>width$} {name}", stats.bytes),
        Mode::Lines => format!("{:>width$} {name}", stats.lines),
        Mode::Words => format!("{:>width$} {name}", stats.words),
        Mode::Chars => format!("{:>width$} {name}", stats.chars),
        Mode::All => format!(
            "{:>width$} {:>width$} {:>width$} {name}",
            stats.lines, stats.words, stats.bytes
        ),
    }
}

/// The name shown next to the counts: the path's final component
///
/// Falls back to the full path when there is no final component (`..`, `/`).
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileStats {
        FileStats {
            bytes: 12,
            lines: 1,
            words: 2,
            chars: 12,
        }
    }

    #[test]
    fn test_single_modes_render_one_count() {
        let stats = sample();
        assert_eq!(render(&stats, Mode::Bytes, "a.txt", 8), "      12 a.txt");
        assert_eq!(render(&stats, Mode::Lines, "a.txt", 8), "       1 a.txt");
        assert_eq!(render(&stats, Mode::Words, "a.txt", 8), "       2 a.txt");
        assert_eq!(render(&stats, Mode::Chars, "a.txt", 8), "      12 a.txt");
    }

    #[test]
    fn test_all_renders_lines_words_bytes() {
        let line = render(&sample(), Mode::All, "a.txt", 8);
        assert_eq!(line, "       1        2       12 a.txt");
    }

    #[test]
    fn test_width_is_a_minimum() {
        let stats = FileStats {
            bytes: 123_456_789,
            lines: 0,
            words: 0,
            chars: 0,
        };
        assert_eq!(render(&stats, Mode::Bytes, "big", 4), "123456789 big");
    }

    #[test]
    fn test_display_name_is_final_component() {
        assert_eq!(display_name(Path::new("/tmp/dir/a.txt")), "a.txt");
        assert_eq!(display_name(Path::new("a.txt")), "a.txt");
    }

    #[test]
    fn test_display_name_falls_back_to_full_path() {
        assert_eq!(display_name(Path::new("..")), "..");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
