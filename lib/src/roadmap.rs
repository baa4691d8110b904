//! Release extraction from a parsed roadmap document.
//!
//! A roadmap marks each release with a heading element whose `id` is
//! `Version_<value>`. The notes for that release do not hang off the heading
//! itself: they live in the sibling sections that follow the heading's
//! *parent*, each one labelled by a marker element whose `id` starts with
//! `Release_Notes`. The marker is only a label; the substantive note markup
//! is the marker's next sibling element. The walk down the sibling chain
//! stops at the first sibling that opens the next version's section.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Matches any version heading, e.g. `id="Version_1.2"`.
static VERSION_MARKER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[id^="Version_"]"#).expect("static selector"));

/// Matches any release-note label, e.g. `id="Release_Notes_rc1"`.
static NOTES_MARKER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[id^="Release_Notes"]"#).expect("static selector"));

/// One matched release section: the version label and the note-content
/// elements collected from the sibling walk, in document order.
#[derive(Debug, Clone)]
pub struct Release<'a> {
    /// Version label the section was matched under.
    pub version: String,
    /// Note-content elements, one per marker found before the next boundary.
    pub notes: Vec<ElementRef<'a>>,
}

/// State of the sibling walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    /// Still consuming siblings and collecting note markers.
    SeekingNotes,
    /// Reached the sibling that opens the next version's section.
    AtVersionBoundary,
}

/// Finds every release section matching `version`.
///
/// Headings are matched on their exact `id` attribute `Version_<version>`.
/// Candidates come from a static prefix selector and the exact comparison
/// happens in code, so arbitrary version strings never reach the selector
/// parser. Multiple headings may carry the same version (one per release
/// candidate); each produces its own [`Release`], preserving document order.
/// An unknown version yields an empty vector.
pub fn releases<'a>(doc: &'a Html, version: &str) -> Vec<Release<'a>> {
    let wanted = format!("Version_{version}");
    let mut found = Vec::new();

    for heading in doc.select(&VERSION_MARKER) {
        if heading.value().attr("id") != Some(wanted.as_str()) {
            continue;
        }
        // The notes hang off the section containing the heading, not the
        // heading itself, so the walk anchors on the parent.
        let Some(context) = heading.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        let notes = collect_note_blocks(context);
        debug!(version, notes = notes.len(), "matched version heading");
        found.push(Release {
            version: version.to_string(),
            notes,
        });
    }

    found
}

/// Walks the context's following sibling elements, collecting note blocks
/// until the next version boundary.
///
/// Two-state machine consuming one sibling element at a time: a sibling that
/// contains a `Version_*` descendant ends the walk and is itself excluded;
/// otherwise every `Release_Notes*` descendant of the sibling is a marker
/// whose next sibling element is a note block. A marker without a following
/// element contributes nothing, and running out of siblings ends the walk
/// with whatever was collected. Non-element nodes (whitespace text,
/// comments) are skipped throughout. Pure function, no I/O.
pub fn collect_note_blocks<'a>(context: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut state = WalkState::SeekingNotes;
    let mut notes = Vec::new();

    for sibling in context.next_siblings().filter_map(ElementRef::wrap) {
        if sibling.select(&VERSION_MARKER).next().is_some() {
            state = WalkState::AtVersionBoundary;
        }
        match state {
            WalkState::AtVersionBoundary => break,
            WalkState::SeekingNotes => {
                for marker in sibling.select(&NOTES_MARKER) {
                    // The marker is a label; the content is one sibling over.
                    match marker.next_siblings().find_map(ElementRef::wrap) {
                        Some(block) => {
                            trace!(marker = ?marker.value().attr("id"), "collected note block");
                            notes.push(block);
                        }
                        None => {
                            trace!(
                                marker = ?marker.value().attr("id"),
                                "marker without a content sibling"
                            );
                        }
                    }
                }
            }
        }
    }

    notes
}
