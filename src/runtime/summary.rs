use std::collections::BTreeMap;
use std::fmt;

use crate::error::TagError;
use crate::organize::Outcome;

/// Per-run counters, logged once at the end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub moved: usize,
    pub overwritten: usize,
    pub discarded: usize,
    pub already_in_place: usize,
    pub skipped: usize,
    pub reported: usize,
    pub failed: usize,
    /// Files that never became records, by `TagError::kind`.
    pub excluded: BTreeMap<&'static str, usize>,
    pub junk_removed: usize,
    pub compilations: usize,
    pub dirs_removed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        let slot = match outcome {
            Outcome::AlreadyInPlace => &mut self.already_in_place,
            Outcome::Moved => &mut self.moved,
            Outcome::Skipped => &mut self.skipped,
            Outcome::Overwritten => &mut self.overwritten,
            Outcome::Discarded => &mut self.discarded,
            Outcome::Reported => &mut self.reported,
            Outcome::Failed(_) => &mut self.failed,
        };
        *slot += 1;
    }

    pub fn exclude(&mut self, err: &TagError) {
        *self.excluded.entry(err.kind()).or_default() += 1;
    }

    /// Files that changed place or were removed.
    pub fn mutations(&self) -> usize {
        self.moved + self.overwritten + self.discarded
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} moved, {} overwritten, {} discarded, {} already in place, {} skipped, {} conflicts, {} failed",
            self.moved,
            self.overwritten,
            self.discarded,
            self.already_in_place,
            self.skipped,
            self.reported,
            self.failed
        )?;
        if !self.excluded.is_empty() {
            let parts: Vec<String> = self
                .excluded
                .iter()
                .map(|(kind, n)| format!("{n} {kind}"))
                .collect();
            write!(f, "; excluded: {}", parts.join(", "))?;
        }
        if self.compilations > 0 {
            write!(f, "; {} compilation albums", self.compilations)?;
        }
        if self.junk_removed > 0 {
            write!(f, "; {} junk files deleted", self.junk_removed)?;
        }
        if self.dirs_removed > 0 {
            write!(f, "; {} empty directories removed", self.dirs_removed)?;
        }
        Ok(())
    }
}
