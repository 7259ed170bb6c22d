use clap::Parser;
use color_eyre::Result;
use std::path::{Path, PathBuf};

mod command;
mod config;
mod error;
mod output;
mod shell;
mod stats;
#[cfg(test)]
mod test_utils;

use command::Mode;
use error::IwcError;
use stats::compute_stats;

/// Interactive file counting tool
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive file counting tool with wc-style statistics"
)]
struct Args {
    /// File for a one-shot report (if not provided, starts the interactive shell)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/iwc-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/iwc-debug.log")
            .expect("Failed to open /tmp/iwc-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== IWC DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during shell startup
    let config_result = config::load_config();

    let args = Args::parse();

    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    match args.input {
        Some(path) => report_once(&path, &config_result.config)?,
        None => shell::run(&config_result.config)?,
    }

    #[cfg(debug_assertions)]
    log::debug!("=== IWC DEBUG SESSION ENDED ===");

    Ok(())
}

/// Print one default-mode report and return
fn report_once(path: &Path, config: &config::Config) -> Result<(), IwcError> {
    let stats = compute_stats(path)?;
    let name = output::display_name(path);
    println!(
        "{}",
        output::render(&stats, Mode::All, &name, config.output.width)
    );
    Ok(())
}
