//! Main builder executable, to be used as cli tool. For help run this command
//! with `-h`.

#![warn(missing_docs)]

use anyhow::{Error, anyhow};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use portfolio_site_builder::{common::config::Config, site};
use simple_logger::SimpleLogger;
use std::path::PathBuf;

/// Builds `index.html` and `resume.html` from `portfolio.json`,
/// `index_template.html` and `resume_template.html`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// Directory containing the site (data file and templates). Outputs are
    /// written there as well.
    #[arg(short = 'C', long, default_value = ".")]
    pub directory: PathBuf,

    /// Maximum level of messages printed.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl LogLevel {
    pub fn into_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), Error> {
    let arguments = Arguments::parse();

    SimpleLogger::new()
        .without_timestamps()
        .with_level(arguments.log_level.into_level_filter())
        .init()
        .map_err(|error| anyhow!("cannot initialize logger: {error}"))?;

    let config = Config::with_site_directory(arguments.directory);
    site::build(&config)?;

    Ok(())
}
