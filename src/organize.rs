//! Compilation detection, destination paths and the move itself.
//!
//! `organize` is the batch entry point: it finishes every compilation
//! decision before the first file is moved, since a path depends on the
//! flag of the whole album group.

use std::path::PathBuf;

use crate::config::CollisionPolicy;
use crate::library::MetadataRecord;

mod cleanup;
mod compilation;
mod path;
mod prompt;
mod relocate;

pub use cleanup::remove_empty_dirs;
pub use compilation::{candidates, detect_compilations, group_by_album, is_candidate, listing};
pub use path::{DestinationPath, build, file_name, sanitize_segment};
pub use prompt::{Confirm, LineConfirm};
pub use relocate::{Outcome, relocate, same_file};

#[cfg(test)]
pub(crate) use prompt::Scripted;

/// Run-wide switches, resolved once from flags and settings.
#[derive(Debug, Clone)]
pub struct Options {
    pub out_dir: PathBuf,
    pub compilation_dir: String,
    pub collision: CollisionPolicy,
    pub confirm: bool,
    pub trust_compilations: bool,
}

/// What `organize` did.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub compilations: usize,
    pub outcomes: Vec<(PathBuf, Outcome)>,
}

/// Flag compilations across the whole set, then relocate file by file.
pub fn organize(
    mut records: Vec<MetadataRecord>,
    options: &Options,
    confirm: &mut dyn Confirm,
) -> OrganizeReport {
    let compilations = detect_compilations(&mut records, options.trust_compilations, confirm);

    let outcomes = records
        .iter()
        .map(|record| {
            let outcome = relocate(record, options, confirm);
            (record.source_path.clone(), outcome)
        })
        .collect();

    OrganizeReport {
        compilations,
        outcomes,
    }
}

#[cfg(test)]
mod tests;
