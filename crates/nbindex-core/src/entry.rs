//! NotebookEntry — one converted notebook and its display title.

use serde::{Deserialize, Serialize};

/// A converted notebook, paired with the title shown for its link on
/// the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookEntry {
    /// File name inside the notebooks directory (e.g., "linear_algebra.html").
    pub filename: String,

    /// Display title derived from the file name (e.g., "Linear Algebra").
    pub title: String,
}

impl NotebookEntry {
    /// Build an entry from a directory file name.
    ///
    /// Returns `None` unless `name` ends in `.html`. The title is the
    /// name minus that suffix, with underscores turned into spaces and
    /// [`title_case`] applied.
    #[must_use]
    pub fn from_filename(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".html")?;
        Some(Self {
            filename: name.to_string(),
            title: title_case(&stem.replace('_', " ")),
        })
    }
}

/// Title-case a string: a letter is uppercased when it starts the
/// string or follows a non-letter, and lowercased otherwise.
/// Non-letters pass through unchanged, so digits and hyphens also start
/// a new word: `"week-2 notes"` becomes `"Week-2 Notes"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
