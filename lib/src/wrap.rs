//! Fixed-width line shaping for converted note text.
//!
//! The converted text still carries two artifacts of the markup-to-text
//! phase: the list-marker placeholder and tab-based nesting indentation.
//! This module finalizes both and re-wraps every line to the changelog's
//! column width, inferring the target indent from the line's own leading
//! whitespace.

use textwrap::{Options, wrap};

use crate::notes::MARKER_PLACEHOLDER;

/// Target column width for changelog lines.
pub const WRAP_WIDTH: usize = 80;

/// Base left indent added to every line.
const BASE_INDENT: usize = 4;

/// Extra indent for wrapped continuation lines.
const CONTINUATION_INDENT: usize = 2;

/// Expansion of one tab-like indentation step.
const TAB_EXPANSION: &str = "      ";

/// Wraps converted note text into finished changelog lines.
///
/// Each input line is right-stripped (empty lines are dropped), its
/// placeholder marker restored to a literal `*`, its tab indentation
/// expanded, and the result word-wrapped to [`WRAP_WIDTH`] columns with the
/// computed indent on the first line and two extra spaces on continuations.
/// Returned lines carry no terminators.
///
/// ## Examples
///
/// ```
/// use reap_lib::wrap::wrap_note_text;
///
/// assert_eq!(wrap_note_text("Fixed a bug.\n"), vec!["    Fixed a bug."]);
/// ```
pub fn wrap_note_text(text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        let stripped = raw.trim_end();
        if stripped.is_empty() {
            continue;
        }
        let restored = stripped.replace(MARKER_PLACEHOLDER, "*");
        let expanded = expand_tab_indent(&restored);
        let lead = expanded.chars().take_while(|c| *c == ' ').count();
        let indent = adjust_indent(lead);

        let initial = " ".repeat(indent);
        let subsequent = " ".repeat(indent + CONTINUATION_INDENT);
        let options = Options::new(WRAP_WIDTH)
            .initial_indent(&initial)
            .subsequent_indent(&subsequent);
        for wrapped in wrap(expanded.trim_start(), options) {
            lines.push(wrapped.into_owned());
        }
    }

    lines
}

/// Replaces tab-like indentation steps with six literal spaces.
///
/// The text conversion emits a space-then-tab (or a bare tab) per nested
/// list level; both forms collapse to the same six-space step.
fn expand_tab_indent(line: &str) -> String {
    line.replace(" \t", TAB_EXPANSION).replace('\t', TAB_EXPANSION)
}

/// Left indent for a line with `lead` leading spaces.
///
/// A computed indent of exactly 5 drops back to 4: single-level list items
/// arrive with one leading space, and their markers belong at the base
/// indent rather than one column past it. Empirical behavior, kept as-is.
fn adjust_indent(lead: usize) -> usize {
    let indent = lead + BASE_INDENT;
    if indent == 5 { BASE_INDENT } else { indent }
}
