//! # nbindex-site
//!
//! File system operations for the notebook site: scanning the
//! notebooks directory and rewriting the index page.
//!
//! The notebooks directory is the source of truth. The list inside
//! `index.html` is derived output that can always be regenerated from
//! the directory contents.

pub mod scan;
pub mod update;

pub use scan::scan_notebooks;
pub use update::{update_index, UpdateReport, INDEX_FILE, NOTEBOOKS_DIR};
