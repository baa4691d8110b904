//! Changelog entry assembly.

/// Banner filler on each side of the version label.
const BANNER_BAR: &str = "====================";

/// One formatted changelog section: a banner plus wrapped note lines.
///
/// Entries are ephemeral: built in memory from one matched release section
/// and immediately serialized into the changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// Version label shown in the banner.
    pub version: String,
    /// Wrapped body lines, without terminators.
    pub lines: Vec<String>,
}

impl ChangelogEntry {
    /// Renders the entry: banner, blank line, each body line terminated by a
    /// line break, then one trailing blank line. A release without notes
    /// renders banner-only, trailing blank included.
    ///
    /// ## Examples
    ///
    /// ```
    /// use reap_lib::entry::ChangelogEntry;
    ///
    /// let entry = ChangelogEntry {
    ///     version: "1.2".to_string(),
    ///     lines: vec!["    Fixed a bug.".to_string()],
    /// };
    /// assert_eq!(
    ///     entry.render(),
    ///     " ==================== Neu in 1.2 ====================\n\n    Fixed a bug.\n\n"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!(" {BANNER_BAR} Neu in {} {BANNER_BAR}\n\n", self.version);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}
