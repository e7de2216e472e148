//! Rendering of the notebook link list.

use crate::entry::NotebookEntry;

/// Render one `<li>` line per entry, in order, with no wrapping tag.
///
/// Each line links to `notebooks/<filename>` and shows the entry title.
/// Zero entries render as the empty string. Names and titles are
/// emitted verbatim, without HTML escaping.
#[must_use]
pub fn render_items(entries: &[NotebookEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "<li><a href=\"notebooks/{}\">{}</a></li>\n",
            entry.filename, entry.title
        ));
    }
    out
}

/// Render the full list block: the item lines wrapped in `<ul>` tags.
#[must_use]
pub fn render_list(entries: &[NotebookEntry]) -> String {
    let mut out = String::from("<ul>\n");
    out.push_str(&render_items(entries));
    out.push_str("</ul>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(name: &str) -> NotebookEntry {
        NotebookEntry::from_filename(name).expect("name ends in .html")
    }

    #[test]
    fn items_link_into_the_notebooks_directory() {
        let entries = vec![entry("intro_to_arrays.html")];
        assert_eq!(
            render_items(&entries),
            "<li><a href=\"notebooks/intro_to_arrays.html\">Intro To Arrays</a></li>\n"
        );
    }

    #[test]
    fn items_keep_entry_order() {
        let entries = vec![entry("b_first.html"), entry("a_second.html")];
        let items = render_items(&entries);
        let b = items.find("b_first").unwrap();
        let a = items.find("a_second").unwrap();
        assert!(b < a);
    }

    #[test]
    fn no_entries_render_as_empty_fragment() {
        assert_eq!(render_items(&[]), "");
        assert_eq!(render_list(&[]), "<ul>\n</ul>\n");
    }

    #[test]
    fn list_wraps_items_in_ul_tags() {
        let entries = vec![entry("linear_algebra.html")];
        let list = render_list(&entries);
        assert!(list.starts_with("<ul>\n"));
        assert!(list.ends_with("</ul>\n"));
        assert!(list.contains("Linear Algebra"));
    }

    proptest! {
        #[test]
        fn one_item_line_per_entry(stems in proptest::collection::vec("[a-z_]{1,12}", 0..8)) {
            let entries: Vec<NotebookEntry> = stems
                .iter()
                .map(|s| entry(&format!("{s}.html")))
                .collect();
            let items = render_items(&entries);
            prop_assert_eq!(items.matches("<li>").count(), entries.len());
            prop_assert_eq!(items.matches('\n').count(), entries.len());
        }
    }
}
