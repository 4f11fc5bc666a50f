//! Element tag frequency counting over a parsed XML tree.

use crate::error::{ParseError, Result, TeiError};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// One row of a [`TagCountTable`] view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagCount<'a> {
    pub tag: &'a str,
    pub count: u64,
}

impl fmt::Display for TagCount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tag, self.count)
    }
}

/// Tag name to occurrence count, remembering the order tags were first seen.
///
/// The sum of all counts is the number of elements in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCountTable {
    counts: IndexMap<String, u64>,
}

impl TagCountTable {
    /// Read and parse the XML file at `path`, then count every element in it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| TeiError::filesystem(path, e))?;
        let text = std::str::from_utf8(&bytes).map_err(|source| ParseError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(text, path)
    }

    /// Count the elements of an in-memory document.
    pub fn from_xml_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new("<memory>"))
    }

    fn parse(text: &str, origin: &Path) -> Result<Self> {
        let opts = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, opts).map_err(|source| {
            ParseError::Xml {
                path: origin.to_path_buf(),
                source,
            }
        })?;

        let mut table = TagCountTable::default();
        for node in doc.descendants().filter(|n| n.is_element()) {
            let name = qualified_name(&node, text).unwrap_or(node.tag_name().name());
            table.increment(name);
        }
        tracing::debug!(
            origin = %origin.display(),
            elements = table.total(),
            distinct = table.len(),
            "counted tags"
        );
        Ok(table)
    }

    fn increment(&mut self, tag: &str) {
        match self.counts.get_mut(tag) {
            Some(n) => *n += 1,
            None => {
                self.counts.insert(tag.to_string(), 1);
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<u64> {
        self.counts.get(tag).copied()
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of elements counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Rows in first-seen (document) order.
    pub fn iter(&self) -> impl Iterator<Item = TagCount<'_>> {
        self.counts
            .iter()
            .map(|(tag, &count)| TagCount { tag, count })
    }

    /// Rows ordered by count, highest first. Equal counts keep first-seen order.
    pub fn by_count(&self) -> Vec<TagCount<'_>> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    /// Rows ordered by tag name (case-sensitive, byte-wise).
    pub fn by_tag(&self) -> Vec<TagCount<'_>> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|a, b| a.tag.cmp(b.tag));
        rows
    }

    /// Distinct tag names in alphabetical order.
    pub fn tag_names(&self) -> Vec<&str> {
        self.by_tag().into_iter().map(|r| r.tag).collect()
    }
}

/// Element name as written in the source, prefix included (`tei:p`).
///
/// `None` when the node's source range does not start with its own tag, as for
/// elements expanded from DTD entities.
fn qualified_name<'t>(node: &roxmltree::Node<'_, '_>, text: &'t str) -> Option<&'t str> {
    let rest = text.get(node.range().start..)?.strip_prefix('<')?;
    let end = rest.find(|c: char| c.is_whitespace() || c == '/' || c == '>')?;
    let name = &rest[..end];
    let local = name.rsplit(':').next()?;
    (local == node.tag_name().name()).then_some(name)
}
