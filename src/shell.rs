//! Interactive shell
//!
//! The read-eval loop: prompt, read one line, parse it into a `Command`,
//! run the statistics engine, print the rendered report. Failures are
//! reported on stderr and never end the session; `exit` or EOF does.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::command::{Command, Mode};
use crate::config::Config;
use crate::output;
use crate::stats::compute_stats;

/// What a single line of input produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// End the session
    Quit,
    /// Nothing to do (blank line)
    Silent,
    /// A rendered report for stdout
    Report(String),
    /// A diagnostic for stderr; the session continues
    Failure(String),
}

/// Evaluate one line of shell input
///
/// Existence is checked before the engine runs so a mistyped path reads as
/// "file not found" rather than a raw open error.
pub fn eval_line(line: &str, config: &Config) -> Outcome {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(e) => return Outcome::Failure(format!("Error: {e}")),
    };

    match command {
        Command::Empty => Outcome::Silent,
        Command::Exit => Outcome::Quit,
        Command::Count { mode, path } => count_file(&path, mode, config),
    }
}

fn count_file(path: &Path, mode: Mode, config: &Config) -> Outcome {
    if !path.exists() {
        return Outcome::Failure(format!("Error: File not found -> {}", path.display()));
    }

    match compute_stats(path) {
        Ok(stats) => {
            let name = output::display_name(path);
            Outcome::Report(output::render(&stats, mode, &name, config.output.width))
        }
        Err(e) => Outcome::Failure(format!("Error: {e}")),
    }
}

/// Run the interactive session over stdin/stdout until `exit` or EOF
pub fn run(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();

    writeln!(
        stdout,
        "File Counter Utility. Usage: [option] <filepath>. Type 'exit' to quit."
    )?;
    writeln!(stdout, "Options: -c (bytes), -l (lines), -w (words), -m (chars)")?;

    let mut line = String::new();
    loop {
        write!(stdout, "{}", config.shell.prompt)?;
        stdout.flush()?;

        line.clear();
        // Zero bytes read means EOF; quit like `exit`
        if input.read_line(&mut line)? == 0 {
            break;
        }

        #[cfg(debug_assertions)]
        log::debug!("shell input: {:?}", line.trim_end());

        match eval_line(&line, config) {
            Outcome::Quit => break,
            Outcome::Silent => {}
            Outcome::Report(report) => writeln!(stdout, "{report}")?,
            Outcome::Failure(message) => eprintln!("{message}"),
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod shell_tests;
