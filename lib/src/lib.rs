//! Release-note extraction from HTML roadmaps into a plain-text changelog.
//!
//! The pipeline: parse the roadmap document, locate the sections matching a
//! version, render each section's note markup to wrapped plain text, and
//! prepend the finished entries to the changelog file.
//!
//! ```
//! let html = r#"
//!     <p><span id="Version_1.2">1.2</span></p>
//!     <div>
//!         <h3 id="Release_Notes_x">Release Notes</h3>
//!         <p>Fixed a bug.</p>
//!     </div>
//!     <p><span id="Version_1.3">1.3</span></p>
//! "#;
//! let entries = reap_lib::build_entries(html, "1.2");
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].lines, vec!["    Fixed a bug."]);
//! ```

pub mod changelog;
pub mod entry;
pub mod error;
pub mod notes;
pub mod roadmap;
pub mod wrap;

use std::fs;
use std::path::Path;

use scraper::Html;
use tracing::{debug, info};

pub use entry::ChangelogEntry;
pub use error::{ReapError, Result};

/// Builds one changelog entry per release section matching `version`.
///
/// Parsing is error-tolerant and a version with no matching heading yields
/// an empty vector. Each entry's body is every note block of that release,
/// run through markup normalization and line wrapping, in document order.
/// A release without note blocks produces a banner-only entry.
pub fn build_entries(html: &str, version: &str) -> Vec<ChangelogEntry> {
    let doc = Html::parse_document(html);
    roadmap::releases(&doc, version)
        .into_iter()
        .map(|release| {
            let mut lines = Vec::new();
            for note in &release.notes {
                let text = notes::note_to_text(&note.html());
                lines.extend(wrap::wrap_note_text(&text));
            }
            debug!(version = %release.version, lines = lines.len(), "built entry body");
            ChangelogEntry {
                version: release.version,
                lines,
            }
        })
        .collect()
}

/// Runs the full pipeline: roadmap file in, changelog file rewritten.
///
/// The roadmap is read first and the changelog second; both reads precede
/// the single write, so input failures leave the changelog untouched.
/// Returns the number of entries prepended, which is zero (an identity
/// rewrite, not an error) when no heading matches.
pub fn run(roadmap: &Path, version: &str, changelog_path: &Path) -> Result<usize> {
    let html = fs::read_to_string(roadmap).map_err(|source| ReapError::RoadmapRead {
        path: roadmap.to_path_buf(),
        source,
    })?;
    let entries = build_entries(&html, version);
    info!(version, entries = entries.len(), "extracted release notes");
    changelog::prepend_entries(changelog_path, &entries)?;
    Ok(entries.len())
}
