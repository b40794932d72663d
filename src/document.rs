//! Parsed edit-history documents and version selection.

use crate::error::{ScenarioError, ScenarioResult};

/// Tag of a version snapshot element.
const SNAPSHOT_TAG: &str = "unit";

/// Tag of an inline compiler-diagnostic marker.
pub(crate) const MARKER_TAG: &str = "compile-error";

/// A parsed srcML edit-history document.
///
/// One document records the whole editing session of a single source file
/// as an ordered list of version snapshots. The document is never mutated
/// by this crate, so one instance can serve any number of extractions.
///
/// Tag names are matched by local name, so documents with or without the
/// srcML namespace declaration behave the same.
pub struct EditHistory<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> EditHistory<'input> {
    /// Parse an edit-history document from XML text.
    ///
    /// Loading the text from storage is the caller's concern; this crate
    /// performs no I/O.
    pub fn parse(xml: &'input str) -> ScenarioResult<Self> {
        Ok(Self {
            doc: roxmltree::Document::parse(xml)?,
        })
    }

    fn snapshots<'a>(&'a self) -> impl Iterator<Item = Snapshot<'a, 'input>> {
        self.doc
            .root_element()
            .children()
            .filter(|node| node.is_element() && node.tag_name().name() == SNAPSHOT_TAG)
            .filter_map(|node| {
                // A snapshot is keyed by its version attribute; an element
                // without one is not selectable.
                let version = node.attribute("version")?;
                Some(Snapshot { node, version })
            })
    }

    /// Version identifiers of every snapshot, in document order.
    pub fn versions(&self) -> Vec<&str> {
        self.snapshots().map(|snapshot| snapshot.version).collect()
    }

    /// Find the snapshot recorded for `version`.
    ///
    /// Scans the snapshot list in document order and returns the first
    /// exact match. Identifiers are opaque strings; `"07"` does not match
    /// `"7"`. The failure carries every version that was present so callers
    /// can report what would have worked.
    pub fn snapshot(&self, version: &str) -> ScenarioResult<Snapshot<'_, 'input>> {
        let mut available = Vec::new();
        for snapshot in self.snapshots() {
            if snapshot.version == version {
                return Ok(snapshot);
            }
            available.push(snapshot.version.to_string());
        }
        log::debug!(
            "version {version:?} not in document ({} snapshots)",
            available.len()
        );
        Err(ScenarioError::VersionNotFound {
            requested: version.to_string(),
            available,
        })
    }
}

/// One version snapshot within an [`EditHistory`].
///
/// A cheap borrowed view; copying it never copies document content.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
    version: &'a str,
}

impl<'a, 'input> Snapshot<'a, 'input> {
    /// The snapshot's version identifier.
    pub fn version(&self) -> &'a str {
        self.version
    }

    /// The snapshot's root element.
    pub(crate) fn node(&self) -> roxmltree::Node<'a, 'input> {
        self.node
    }
}
