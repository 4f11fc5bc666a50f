//! The fetch → count → render pipeline behind one stateful handle.

use crate::config::TeiConfig;
use crate::counter::TagCountTable;
use crate::error::Result;
use crate::fetch;
use crate::script::render_tag_checklist_script;
use std::path::Path;

/// Holds the most recent tag table for a document.
///
/// `compute_tag_frequencies` replaces the table only when parsing succeeds; a
/// failed run leaves the previous table in place.
#[derive(Debug, Default)]
pub struct TagFrequencyAnalyzer {
    config: TeiConfig,
    table: Option<TagCountTable>,
}

impl TagFrequencyAnalyzer {
    pub fn new(config: TeiConfig) -> Self {
        Self {
            config,
            table: None,
        }
    }

    pub fn config(&self) -> &TeiConfig {
        &self.config
    }

    /// Download `url` to `path`, creating parent directories as needed.
    pub fn fetch(&self, url: &str, path: &Path) -> Result<u64> {
        fetch::fetch(url, path, &self.config.fetch)
    }

    /// Parse the XML file at `path` and store its tag counts.
    pub fn compute_tag_frequencies(&mut self, path: &Path) -> Result<&TagCountTable> {
        let table = TagCountTable::from_path(path)?;
        Ok(&*self.table.insert(table))
    }

    /// The last successfully computed table, if any.
    pub fn table(&self) -> Option<&TagCountTable> {
        self.table.as_ref()
    }

    /// Render the checklist script from the stored table's alphabetical view.
    /// Returns `None` until a table has been computed.
    pub fn render_tag_checklist_script(&self) -> Option<String> {
        self.table
            .as_ref()
            .map(|t| render_tag_checklist_script(t.tag_names().as_slice(), &self.config.script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;

    #[test]
    fn script_needs_a_table() {
        let a = TagFrequencyAnalyzer::default();
        assert!(a.table().is_none());
        assert!(a.render_tag_checklist_script().is_none());
    }

    #[test]
    fn compute_then_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.xml");
        fs::write(&path, "<root><c/><a/><b><a/></b></root>").unwrap();

        let mut a = TagFrequencyAnalyzer::default();
        let total = a.compute_tag_frequencies(&path).unwrap().total();
        assert_eq!(total, 5);

        let js = a.render_tag_checklist_script().unwrap();
        assert!(js.contains("const itemsToCheck = [\"a\", \"b\", \"c\", \"root\"];"));
    }

    #[test]
    fn recompute_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.xml");
        fs::write(&path, "<root><a/><b><a/></b></root>").unwrap();

        let mut a = TagFrequencyAnalyzer::default();
        let first = a.compute_tag_frequencies(&path).unwrap().clone();
        let second = a.compute_tag_frequencies(&path).unwrap();
        assert_eq!(&first, second);
        assert_eq!(second.get("a"), Some(2));
    }

    #[test]
    fn recompute_replaces_previous_table() {
        let dir = tempfile::tempdir().unwrap();
        let one = dir.path().join("one.xml");
        let two = dir.path().join("two.xml");
        fs::write(&one, "<root><a/></root>").unwrap();
        fs::write(&two, "<doc><z/></doc>").unwrap();

        let mut a = TagFrequencyAnalyzer::default();
        a.compute_tag_frequencies(&one).unwrap();
        let t = a.compute_tag_frequencies(&two).unwrap();
        assert_eq!(t.get("root"), None);
        assert_eq!(t.get("z"), Some(1));
    }

    #[test]
    fn malformed_input_keeps_previous_table() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.xml");
        let bad = dir.path().join("bad.xml");
        fs::write(&good, "<root><a/><b><a/></b></root>").unwrap();
        fs::write(&bad, "<root><a></root>").unwrap();

        let mut a = TagFrequencyAnalyzer::default();
        let before = a.compute_tag_frequencies(&good).unwrap().clone();

        let err = a.compute_tag_frequencies(&bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(a.table(), Some(&before));
    }

    #[test]
    fn missing_file_leaves_no_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = TagFrequencyAnalyzer::default();
        let err = a
            .compute_tag_frequencies(&dir.path().join("absent.xml"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Filesystem);
        assert!(a.table().is_none());
    }
}
