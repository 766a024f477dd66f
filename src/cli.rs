use std::env;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::CollisionPolicy;

/// Command-line arguments for tunesort
#[derive(Parser, Debug, Clone)]
#[command(name = "tunesort")]
#[command(about = "Reorganize music files based on their metadata")]
#[command(version)]
pub struct Args {
    /// Directory with the files you want to organize
    #[arg(long, value_parser = directory)]
    pub src: PathBuf,

    /// Directory where the files should go
    #[arg(long, value_parser = directory)]
    pub out: PathBuf,

    /// Replace whatever already sits at a file's destination
    #[arg(long)]
    pub overwrite: bool,

    /// Delete the source when its destination is already taken
    #[arg(long)]
    pub discard: bool,

    /// Ask before moving each file
    #[arg(long)]
    pub confirm: bool,

    /// Don't ask about detected compilation albums, assume the detection was right
    #[arg(long)]
    pub trust_compilations: bool,

    /// Remove directories left empty in the source tree
    #[arg(long)]
    pub cleanup: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Collision policy requested on the command line, if any.
    /// `--overwrite` wins over `--discard`.
    pub fn collision(&self) -> Option<CollisionPolicy> {
        if self.overwrite {
            Some(CollisionPolicy::Overwrite)
        } else if self.discard {
            Some(CollisionPolicy::Discard)
        } else {
            None
        }
    }

    /// Default `tracing` filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "tunesort=warn";
        }
        match self.verbose {
            0 => "tunesort=info",
            1 => "tunesort=debug",
            _ => "tunesort=trace",
        }
    }
}

/// Expand a leading `~` and require an existing directory.
fn directory(raw: &str) -> Result<PathBuf, String> {
    let expanded = expand_tilde(raw, env::var_os("HOME").map(PathBuf::from));
    if !expanded.is_dir() {
        return Err(format!("{} is not a directory", expanded.display()));
    }
    Ok(expanded)
}

fn expand_tilde(raw: &str, home: Option<PathBuf>) -> PathBuf {
    match (raw, home) {
        ("~", Some(home)) => home,
        (r, Some(home)) if r.starts_with("~/") => home.join(&r[2..]),
        _ => PathBuf::from(raw),
    }
}
