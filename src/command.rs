//! Shell command model
//!
//! A parsed line of shell input: an optional mode flag followed by a file
//! path. Parsing is one rule with no positional inference — everything
//! after the flag is the path, so paths containing spaces survive intact.

use std::path::PathBuf;

use crate::error::IwcError;

/// Which count(s) a command selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `-c`, the byte count
    Bytes,
    /// `-l`, the line count
    Lines,
    /// `-w`, the word count
    Words,
    /// `-m`, the character count
    Chars,
    /// No flag: the lines, words, and bytes triple
    #[default]
    All,
}

impl Mode {
    /// Parse a leading flag token
    fn from_flag(flag: &str) -> Result<Self, IwcError> {
        match flag {
            "-c" => Ok(Mode::Bytes),
            "-l" => Ok(Mode::Lines),
            "-w" => Ok(Mode::Words),
            "-m" => Ok(Mode::Chars),
            _ => Err(IwcError::InvalidOption(flag.to_string())),
        }
    }
}

/// One parsed line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Count the file at `path`, displaying what `mode` selects
    Count { mode: Mode, path: PathBuf },
    /// The `exit` keyword ends the session
    Exit,
    /// A blank line, skipped silently
    Empty,
}

impl Command {
    /// Parse one line of shell input
    ///
    /// Grammar: an optional mode flag, then the rest of the line (trimmed)
    /// is the path. `exit` in any ASCII case quits. Unknown flags and a
    /// flag with nothing after it are errors.
    pub fn parse(line: &str) -> Result<Command, IwcError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }
        if line.eq_ignore_ascii_case("exit") {
            return Ok(Command::Exit);
        }

        if line.starts_with('-') {
            let (flag, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            let mode = Mode::from_flag(flag)?;
            let path = rest.trim();
            if path.is_empty() {
                return Err(IwcError::MissingPath(flag.to_string()));
            }
            Ok(Command::Count {
                mode,
                path: PathBuf::from(path),
            })
        } else {
            Ok(Command::Count {
                mode: Mode::All,
                path: PathBuf::from(line),
            })
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
