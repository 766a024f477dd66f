use std::fs;
use std::io;
use std::path::Path;

use tracing::{error, info, warn};

use crate::config::CollisionPolicy;
use crate::error::PathError;
use crate::library::MetadataRecord;

use super::Options;
use super::path::build;
use super::prompt::Confirm;

/// Where a file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Destination is already this very file.
    AlreadyInPlace,
    Moved,
    /// Missing title/artist, or the operator said no.
    Skipped,
    /// Replaced a different file at the destination.
    Overwritten,
    /// Source deleted because the destination was taken.
    Discarded,
    /// Destination taken; source left alone.
    Reported,
    /// I/O error or broken invariant; source left alone.
    Failed(String),
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::AlreadyInPlace => "already in place",
            Outcome::Moved => "moved",
            Outcome::Skipped => "skipped",
            Outcome::Overwritten => "overwritten",
            Outcome::Discarded => "discarded",
            Outcome::Reported => "conflicts",
            Outcome::Failed(_) => "failed",
        }
    }
}

/// True when both paths name the same underlying file.
#[cfg(unix)]
pub fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let (ma, mb) = (fs::metadata(a)?, fs::metadata(b)?);
    Ok(ma.dev() == mb.dev() && ma.ino() == mb.ino())
}

/// True when both paths name the same underlying file.
#[cfg(not(unix))]
pub fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

/// Move one file to its computed destination under `options.out_dir`.
pub fn relocate(
    record: &MetadataRecord,
    options: &Options,
    confirm: &mut dyn Confirm,
) -> Outcome {
    let src = record.source_path.as_path();

    if record.title.is_none() || record.artist.is_none() {
        return Outcome::Skipped;
    }

    let dest = match build(record, record.in_compilation, &options.compilation_dir) {
        Ok(dest) => dest.under(&options.out_dir),
        Err(e @ PathError::CompilationWithoutAlbum(_)) => {
            error!("{e}");
            return Outcome::Failed(e.to_string());
        }
        Err(PathError::MissingRequiredTag(_)) => return Outcome::Skipped,
    };

    if let Some(parent) = dest.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!(dir = %parent.display(), "could not create directory: {e}");
            return Outcome::Failed(e.to_string());
        }
    }

    let occupied = dest.exists();
    if occupied {
        match same_file(&dest, src) {
            Ok(true) => return Outcome::AlreadyInPlace,
            Ok(false) => {}
            Err(e) => {
                warn!(file = %src.display(), "could not compare with {}: {e}", dest.display());
                return Outcome::Failed(e.to_string());
            }
        }
    }

    if occupied && !options.confirm {
        return match options.collision {
            CollisionPolicy::Overwrite => {
                info!("{} to {}", src.display(), dest.display());
                finish(fs::rename(src, &dest), src, Outcome::Overwritten)
            }
            CollisionPolicy::Discard => {
                info!("remove {}", src.display());
                finish(fs::remove_file(src), src, Outcome::Discarded)
            }
            CollisionPolicy::Report => {
                warn!(file = %src.display(), "file already exists: {}", dest.display());
                Outcome::Reported
            }
        };
    }

    info!("{} to {}", src.display(), dest.display());
    if options.confirm {
        let question = if occupied {
            format!("Move {} to {} (replacing the existing file)?", src.display(), dest.display())
        } else {
            format!("Move {} to {}?", src.display(), dest.display())
        };
        if !confirm.confirm(&question) {
            return Outcome::Skipped;
        }
    }

    finish(fs::rename(src, &dest), src, Outcome::Moved)
}

fn finish(result: io::Result<()>, src: &Path, done: Outcome) -> Outcome {
    match result {
        Ok(()) => done,
        Err(e) => {
            warn!(file = %src.display(), "could not finish ({}): {e}", done.label());
            Outcome::Failed(e.to_string())
        }
    }
}
