use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::Args;
use crate::config::Settings;
use crate::library;
use crate::organize::{self, Confirm, LineConfirm, Options, remove_empty_dirs};

mod settings;
mod summary;

pub use summary::RunSummary;

/// Run-wide switches: flags switch behaviors on, settings supply the rest.
pub fn resolve_options(args: &Args, settings: &Settings, out_dir: PathBuf) -> Options {
    if args.overwrite && args.discard {
        warn!("both --overwrite and --discard given; overwriting");
    }

    Options {
        out_dir,
        compilation_dir: settings.organize.compilation_dir.trim().to_string(),
        collision: args.collision().unwrap_or(settings.organize.collision),
        confirm: args.confirm,
        trust_compilations: args.trust_compilations || settings.organize.trust_compilations,
    }
}

/// Entry point used by `main`: interactive prompts on stdin/stdout.
pub fn run(args: &Args) -> Result<RunSummary> {
    let settings = settings::load_settings();
    let mut confirm = LineConfirm::stdio();
    run_with(args, &settings, &mut confirm)
}

/// Walk, read, detect compilations, move, optionally clean up.
///
/// Per-file problems end up in the summary; only failing to resolve the
/// two root directories is an error.
pub fn run_with(args: &Args, settings: &Settings, confirm: &mut dyn Confirm) -> Result<RunSummary> {
    let src = fs::canonicalize(&args.src)
        .with_context(|| format!("Failed to resolve source directory {}", args.src.display()))?;
    let out = fs::canonicalize(&args.out)
        .with_context(|| format!("Failed to resolve output directory {}", args.out.display()))?;

    let options = resolve_options(args, settings, out);
    info!("Organizing {} into {}", src.display(), options.out_dir.display());

    let report = library::scan(&src, &settings.library, &settings.tags);

    let mut summary = RunSummary {
        junk_removed: report.junk_removed,
        ..RunSummary::default()
    };
    for err in &report.excluded {
        summary.exclude(err);
    }

    let organized = organize::organize(report.records, &options, confirm);
    summary.compilations = organized.compilations;
    for (_, outcome) in &organized.outcomes {
        summary.record(outcome);
    }

    if args.cleanup || settings.organize.cleanup {
        summary.dirs_removed = remove_empty_dirs(&src);
    }

    info!("Done: {summary}");
    Ok(summary)
}
