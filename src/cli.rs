use crate::util::Result;
use anyhow::anyhow;
use clap::{ArgAction, Parser, Subcommand};
use log::{Level, LevelFilter, Record};
use once_cell::sync::Lazy;
use owo_colors::{OwoColorize, Style};
use std::{
    collections::HashMap,
    io::Write,
    ops::Deref,
    path::{Path, PathBuf},
};

#[cfg(has_git_describe)]
const GIT_DESCRIBE: Option<&str> = option_env!("VERGEN_GIT_DESCRIBE");
#[cfg(not(has_git_describe))]
const GIT_DESCRIBE: Option<&str> = None;

/// Full version string including the crate version and git description.
///
/// # Examples
/// * `0.1.0-1ba958a-dirty` - while on a dirty branch
/// * `0.1.0-1ba958a` - with a fresh commit
/// * `0.1.0` - when built outside of a git checkout
pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    match GIT_DESCRIBE {
        Some(git_describe) if !git_describe.is_empty() => {
            format!("{}-{}", env!("CARGO_PKG_VERSION"), git_describe)
        }
        _ => env!("CARGO_PKG_VERSION").to_string(),
    }
});

#[derive(Parser, Debug)]
#[command(name="allele-freq",
          version=&**FULL_VERSION,
          about="Per-locus allele (ASV) frequency tables",
          long_about = None,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true
    )]
    pub verbosity: u8,

    /// Silence all output
    #[arg(
        long = "quiet",
        action = ArgAction::SetTrue,
        global = true,
        conflicts_with = "verbosity",
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count how many rows share each (Locus, ASV) pair
    Occurrence(OccurrenceArgs),
    /// Sum Reads per (Locus, ASV) pair and report its share of the locus total
    Depth(DepthArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Occurrence(_) => "occurrence",
            Command::Depth(_) => "depth",
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct SharedArgs {
    /// Tab-separated allele table with a header row
    #[arg(
        required = true,
        short = 'i',
        long = "input",
        value_name = "TSV",
        value_parser = check_file_exists
    )]
    pub input_path: PathBuf,

    /// Output tsv path, overwritten if it exists
    #[arg(
        required = true,
        short = 'o',
        long = "output",
        value_name = "TSV",
        value_parser = check_prefix_path
    )]
    pub output_path: String,
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct OccurrenceArgs {
    #[command(flatten)]
    pub shared: SharedArgs,
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct DepthArgs {
    #[command(flatten)]
    pub shared: SharedArgs,
}

impl Deref for OccurrenceArgs {
    type Target = SharedArgs;

    fn deref(&self) -> &Self::Target {
        &self.shared
    }
}

impl Deref for DepthArgs {
    type Target = SharedArgs;

    fn deref(&self) -> &Self::Target {
        &self.shared
    }
}

/// Initializes the verbosity level for logging based on the command-line arguments.
///
/// # Arguments
///
/// * `args` - A reference to the parsed command-line arguments.
pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_default_env()
        .format(format_log)
        .filter_level(filter_level)
        .init();
}

static LEVEL_STYLES: Lazy<HashMap<Level, (&'static str, Style)>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(Level::Error, ("ERROR", Style::new().red()));
    m.insert(Level::Warn, ("WARN", Style::new().yellow()));
    m.insert(Level::Info, ("INFO", Style::new().green()));
    m.insert(Level::Debug, ("DEBUG", Style::new().blue()));
    m.insert(Level::Trace, ("TRACE", Style::new().magenta()));
    m
});

fn format_log(buf: &mut env_logger::fmt::Formatter, record: &Record) -> std::io::Result<()> {
    let level_str = match LEVEL_STYLES.get(&record.level()) {
        Some((text, style)) => text.style(*style).to_string(),
        None => record.level().to_string(),
    };
    writeln!(
        buf,
        "{} [{}] - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        level_str,
        record.args()
    )
}

/// Checks that the parent directory of an output path exists.
///
/// # Arguments
///
/// * `s` - A string slice representing the output path to check.
///
/// # Returns
///
/// Returns a `Result<String>` which is Ok if the parent directory exists, or an Err with a descriptive message if not.
fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(anyhow!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

/// Checks if the provided file path exists.
///
/// # Arguments
///
/// * `s` - A string slice representing the file path to check.
///
/// # Returns
///
/// Returns a `Result<PathBuf>` which is Ok if the file exists, or an Err with a descriptive message if not.
fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        return Err(anyhow!("File does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}
