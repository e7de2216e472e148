//! The one-shot index page update.

use std::fs;
use std::path::Path;

use nbindex_core::{fragment, page, Result};

use crate::scan::scan_notebooks;

/// Directory of converted notebooks, relative to the site root.
pub const NOTEBOOKS_DIR: &str = "notebooks";

/// Index page rewritten by [`update_index`], relative to the site root.
pub const INDEX_FILE: &str = "index.html";

/// Outcome of one [`update_index`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateReport {
    /// Notebook entries collected from the notebooks directory.
    pub entries: usize,
    /// Whether the marker comment was present in the page.
    pub marker_found: bool,
    /// Whether the rewritten page differs from what was on disk.
    pub changed: bool,
}

/// Regenerate the notebook list inside the site's index page.
///
/// Scans `<root>/notebooks`, renders the link fragment, and rewrites
/// `<root>/index.html` with the fragment spliced in at the marker
/// comment. The page is rewritten in full even when nothing changed.
/// The scan and the page read both happen before the write, so a
/// failure in either leaves the page untouched.
///
/// # Errors
///
/// Returns [`nbindex_core::NbIndexError::Io`] for any filesystem
/// failure, and [`nbindex_core::PageError::UnclosedList`] when the page
/// holds a `<ul>` after the marker that never closes.
pub fn update_index(root: &Path) -> Result<UpdateReport> {
    let entries = scan_notebooks(&root.join(NOTEBOOKS_DIR))?;
    let items = fragment::render_items(&entries);

    let index_path = root.join(INDEX_FILE);
    let content = fs::read_to_string(&index_path)?;

    let marker_found = page::has_marker(&content);
    if !marker_found {
        tracing::warn!(page = INDEX_FILE, "marker comment not found, page left unchanged");
    }

    let updated = page::splice_notebook_list(&content, &items)?;
    let changed = updated != content;
    fs::write(&index_path, &updated)?;

    tracing::info!(
        entries = entries.len(),
        marker_found,
        changed,
        "index page rewritten"
    );

    Ok(UpdateReport {
        entries: entries.len(),
        marker_found,
        changed,
    })
}
