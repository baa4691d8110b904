//! Plain-text rendering of release-note markup.
//!
//! Note blocks arrive as serialized HTML fragments. Rendering happens in two
//! phases: this module collapses the markup to text while planting a
//! placeholder character for list markers, and the line wrapper later swaps
//! the placeholder for the literal `*`. The split keeps the marker out of
//! reach of the whitespace collapsing performed here.

use scraper::{ElementRef, Html};

/// Placeholder for list markers during text conversion.
///
/// A private-use codepoint: it cannot appear in legitimate note content and
/// it is not whitespace, so the collapsing pass leaves it alone. The line
/// wrapper substitutes the visible marker afterwards.
pub const MARKER_PLACEHOLDER: char = '\u{e000}';

/// Converts one serialized note block to plain text.
///
/// Tag names may carry an `html:` namespace prefix when the roadmap was
/// exported through XML tooling; those prefixes are stripped first so the
/// fragment parses as ordinary HTML. Block elements start new lines, text
/// whitespace collapses to single spaces, and list items are prefixed with
/// [`MARKER_PLACEHOLDER`] plus indentation encoding their nesting depth:
/// one leading space, then one tab per level beyond the first.
pub fn note_to_text(fragment: &str) -> String {
    let cleaned = strip_namespace_prefix(fragment);
    let doc = Html::parse_fragment(&cleaned);
    let mut acc = TextAccumulator::default();
    render_children(doc.root_element(), 0, &mut acc);
    acc.finish()
}

/// Drops the `html:` prefix from opening and closing tags.
fn strip_namespace_prefix(fragment: &str) -> String {
    fragment.replace("</html:", "</").replace("<html:", "<")
}

fn render_children(el: ElementRef<'_>, list_depth: usize, acc: &mut TextAccumulator) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            acc.push_text(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            render_element(child_el, list_depth, acc);
        }
    }
}

fn render_element(el: ElementRef<'_>, list_depth: usize, acc: &mut TextAccumulator) {
    match el.value().name() {
        "script" | "style" => {}
        "ol" | "ul" => render_children(el, list_depth + 1, acc),
        "li" => {
            acc.open_block(item_prefix(list_depth.saturating_sub(1)));
            render_children(el, list_depth, acc);
        }
        "p" | "div" | "section" | "article" | "blockquote" | "table" | "tr" | "dt" | "dd"
        | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            acc.open_block(String::new());
            render_children(el, list_depth, acc);
            acc.open_block(String::new());
        }
        "br" => acc.open_block(String::new()),
        _ => render_children(el, list_depth, acc),
    }
}

/// Line prefix for a list item nested `depth` levels below the first.
fn item_prefix(depth: usize) -> String {
    let mut prefix = String::from(" ");
    for _ in 0..depth {
        prefix.push('\t');
    }
    prefix.push(MARKER_PLACEHOLDER);
    prefix.push(' ');
    prefix
}

/// Line-oriented text builder with per-block whitespace collapsing.
///
/// A block is one output line: an indentation prefix (kept verbatim) plus
/// the collapsed text content of everything rendered into it.
#[derive(Default)]
struct TextAccumulator {
    lines: Vec<String>,
    prefix: String,
    text: String,
    has_block: bool,
}

impl TextAccumulator {
    fn open_block(&mut self, prefix: String) {
        // A block element directly inside a list item continues the item's
        // line instead of discarding its marker prefix.
        if self.has_block
            && prefix.is_empty()
            && !self.prefix.is_empty()
            && collapse_whitespace(&self.text).is_empty()
        {
            self.text.clear();
            return;
        }
        self.flush();
        self.prefix = prefix;
        self.has_block = true;
    }

    fn push_text(&mut self, text: &str) {
        if !self.has_block {
            self.open_block(String::new());
        }
        self.text.push_str(text);
    }

    fn flush(&mut self) {
        if self.has_block {
            let mut line = std::mem::take(&mut self.prefix);
            line.push_str(&collapse_whitespace(&self.text));
            self.lines.push(line);
            self.has_block = false;
        }
        self.prefix.clear();
        self.text.clear();
    }

    fn finish(mut self) -> String {
        self.flush();
        self.lines.join("\n")
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_renders_to_single_line() {
        assert_eq!(note_to_text("<p>Fixed a bug.</p>"), "Fixed a bug.\n");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(
            note_to_text("<p>Fixed   a\n      bug.</p>"),
            "Fixed a bug.\n"
        );
    }

    #[test]
    fn test_unordered_list_items_get_placeholder_prefix() {
        let text = note_to_text("<ul><li>A</li><li>B</li></ul>");
        let expected = format!(" {m} A\n {m} B", m = MARKER_PLACEHOLDER);
        assert_eq!(text, expected);
    }

    #[test]
    fn test_ordered_list_uses_same_placeholder() {
        let text = note_to_text("<ol><li>First</li></ol>");
        assert_eq!(text, format!(" {} First", MARKER_PLACEHOLDER));
    }

    #[test]
    fn test_nested_list_items_gain_tab_indentation() {
        let text = note_to_text("<ul><li>A<ul><li>B</li></ul></li></ul>");
        let expected = format!(" {m} A\n \t{m} B", m = MARKER_PLACEHOLDER);
        assert_eq!(text, expected);
    }

    #[test]
    fn test_paragraph_inside_list_item_keeps_marker() {
        let text = note_to_text("<ul><li><p>Wrapped item</p></li></ul>");
        assert!(text.starts_with(&format!(" {} Wrapped item", MARKER_PLACEHOLDER)));
    }

    #[test]
    fn test_inline_markup_is_transparent() {
        assert_eq!(
            note_to_text("<p>Fixed <b>a</b> <a href=\"#\">bug</a>.</p>"),
            "Fixed a bug.\n"
        );
    }

    #[test]
    fn test_namespace_prefix_is_stripped() {
        assert_eq!(
            note_to_text("<html:p>Fixed a bug.</html:p>"),
            note_to_text("<p>Fixed a bug.</p>")
        );
    }

    #[test]
    fn test_script_content_is_dropped() {
        assert_eq!(note_to_text("<div>ok<script>var x = 1;</script></div>"), "ok\n");
    }

    #[test]
    fn test_br_breaks_line() {
        assert_eq!(note_to_text("<p>one<br>two</p>"), "one\ntwo\n");
    }
}
