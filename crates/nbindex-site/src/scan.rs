//! Directory scan for converted notebooks.

use std::fs;
use std::path::Path;

use nbindex_core::{NotebookEntry, Result};

/// Collect notebook entries from `dir`, in directory listing order.
///
/// Only names ending in `.html` qualify. The check is by name alone;
/// the entry's file type is not inspected. Names that are not valid
/// Unicode are skipped. The listing order is whatever the platform
/// returns — entries are not sorted.
///
/// # Errors
///
/// Returns [`nbindex_core::NbIndexError::Io`] if `dir` is missing or
/// unreadable.
pub fn scan_notebooks(dir: &Path) -> Result<Vec<NotebookEntry>> {
    let mut entries = Vec::new();
    for dirent in fs::read_dir(dir)? {
        let dirent = dirent?;
        let Ok(name) = dirent.file_name().into_string() else {
            continue;
        };
        if let Some(entry) = NotebookEntry::from_filename(&name) {
            tracing::debug!(filename = %entry.filename, title = %entry.title, "collected notebook");
            entries.push(entry);
        }
    }
    Ok(entries)
}
