//! Index-page marker location and list splicing.
//!
//! The page is processed as a sequence of newline-terminated line
//! slices. Splicing is an explicit state walk: copy lines until the
//! marker, swap the list that follows it, copy the rest verbatim.

use crate::error::PageError;

/// Comment that marks where the notebook list lives in the index page.
pub const MARKER: &str = "<!-- The converted notebooks go here -->";

/// Whether any line of `content` contains [`MARKER`].
#[must_use]
pub fn has_marker(content: &str) -> bool {
    content.lines().any(|line| line.contains(MARKER))
}

/// Splice walk states.
enum State {
    /// Copying lines, watching for the first marker line.
    BeforeMarker,
    /// Dropping stale item lines until the exact `</ul>` line.
    InsideList,
    /// List handled; the rest of the page is copied verbatim.
    AfterSplice,
}

/// Replace (or insert) the notebook list that follows the marker line.
///
/// `items` is the bare fragment from [`crate::fragment::render_items`].
/// If the line after the marker contains `<ul>`, everything between it
/// and the first subsequent line that is exactly `</ul>` is replaced
/// with `items`. Otherwise a full `<ul>` block is inserted directly
/// after the marker line. Without a marker the page text is returned
/// unchanged. Only the first marker is honored; later occurrences are
/// copied through untouched.
///
/// # Errors
///
/// Returns [`PageError::UnclosedList`] if a `<ul>` line follows the
/// marker but no closing `</ul>` line exists after it.
pub fn splice_notebook_list(content: &str, items: &str) -> Result<String, PageError> {
    let mut out = String::with_capacity(content.len() + items.len());
    let mut state = State::BeforeMarker;
    let mut lines = content.split_inclusive('\n').peekable();

    while let Some(line) = lines.next() {
        match state {
            State::BeforeMarker => {
                out.push_str(line);
                if !line.contains(MARKER) {
                    continue;
                }
                if lines.peek().is_some_and(|next| next.contains("<ul>")) {
                    if let Some(open) = lines.next() {
                        out.push_str(open);
                    }
                    state = State::InsideList;
                } else {
                    out.push_str("<ul>\n");
                    out.push_str(items);
                    out.push_str("</ul>\n");
                    state = State::AfterSplice;
                }
            }
            State::InsideList => {
                if line == "</ul>\n" {
                    out.push_str(items);
                    out.push_str(line);
                    state = State::AfterSplice;
                }
                // anything else is a stale item line and is dropped
            }
            State::AfterSplice => out.push_str(line),
        }
    }

    if matches!(state, State::InsideList) {
        return Err(PageError::UnclosedList);
    }
    Ok(out)
}
