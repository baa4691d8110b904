//! Changelog persistence: a prepend-only read-modify-write cycle.
//!
//! The changelog is an opaque text blob. New entries always go above all
//! existing content, nothing is ever removed or reordered, and the file is
//! rewritten whole rather than appended to. One invocation performs exactly
//! one read and one write, with no locking (single-writer assumption).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::entry::ChangelogEntry;
use crate::error::{ReapError, Result};

/// Merges new entries above the existing changelog content.
///
/// Pure prepend: entries render oldest-first in extraction order, then the
/// existing text follows unchanged. An empty entry slice returns the
/// existing text as-is.
pub fn merge(existing: &str, entries: &[ChangelogEntry]) -> String {
    let mut merged = String::new();
    for entry in entries {
        merged.push_str(&entry.render());
    }
    merged.push_str(existing);
    merged
}

/// Rewrites the changelog at `path` with `entries` prepended.
///
/// The existing file is read in full before anything is written; a missing
/// or unreadable changelog fails without touching the file. The merged
/// content goes back in a single write. With no entries this is an identity
/// rewrite, not an error.
pub fn prepend_entries(path: &Path, entries: &[ChangelogEntry]) -> Result<()> {
    let existing = fs::read_to_string(path).map_err(|source| ReapError::ChangelogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let merged = merge(&existing, entries);
    debug!(
        path = %path.display(),
        entries = entries.len(),
        bytes = merged.len(),
        "rewriting changelog"
    );
    fs::write(path, merged).map_err(|source| ReapError::ChangelogWrite {
        path: path.to_path_buf(),
        source,
    })
}
