//! Source reconstruction for a single snapshot.
//!
//! A snapshot interleaves the syntax tree of one version with inline
//! compiler-diagnostic markers. Reconstruction recovers the exact source
//! text of that version together with the diagnostics that were embedded
//! in it, such that the diagnostics' line numbers are valid physical line
//! numbers in the returned text.

use crate::diagnostic::Diagnostic;
use crate::document::{MARKER_TAG, Snapshot};
use crate::error::ScenarioResult;
use crate::position::Position;

/// Recover a snapshot's source text and its embedded diagnostics.
///
/// The tree's text content starts at an arbitrary absolute line number
/// (earlier lines were stripped upstream), so the output is padded with
/// blank lines until the first recorded line sits at its recorded number.
///
/// Marker elements contribute their positions and message text to the
/// diagnostic list and nothing to the source text. Text that follows a
/// marker's closing tag is ordinary source text and is kept. The walk
/// never mutates the document.
///
/// Fails if a marker or the first source element carries an absent or
/// malformed position attribute. No recovery is attempted; reconstruction
/// is all-or-nothing per snapshot.
pub fn reconstruct(
    snapshot: &Snapshot<'_, '_>,
    filename: &str,
) -> ScenarioResult<(String, Vec<Diagnostic>)> {
    let diagnostics = harvest(snapshot, filename)?;
    let first_line = first_line_number(snapshot)?;

    // Blank lines keep physical line numbers aligned with the absolute
    // line numbers the markers refer to.
    let mut source = "\n".repeat(first_line.saturating_sub(1) as usize);
    linearize(snapshot.node(), &mut source);

    log::debug!(
        "reconstructed version {}: {} bytes, {} diagnostics, first line {}",
        snapshot.version(),
        source.len(),
        diagnostics.len(),
        first_line
    );
    Ok((source, diagnostics))
}

/// Collect the diagnostic markers recorded as direct children of the
/// snapshot root, in document order.
fn harvest(snapshot: &Snapshot<'_, '_>, filename: &str) -> ScenarioResult<Vec<Diagnostic>> {
    snapshot
        .node()
        .children()
        .filter(|node| is_marker(*node))
        .map(|node| Diagnostic::from_marker(node, filename))
        .collect()
}

/// Absolute line number of the first recorded source line.
///
/// Read from the `start` attribute of the first child element that is not
/// a diagnostic marker. A snapshot with no such element is textually empty
/// and starts at line 1.
fn first_line_number(snapshot: &Snapshot<'_, '_>) -> ScenarioResult<u32> {
    let first = snapshot
        .node()
        .children()
        .find(|node| node.is_element() && !is_marker(*node));
    match first {
        Some(element) => Ok(Position::from_attribute(element, "start")?.line),
        None => Ok(1),
    }
}

/// Append every text fragment below `node` in document order, skipping
/// marker subtrees. A marker's tail text is a sibling text node of the
/// marker itself, so it is emitted here like any other fragment.
fn linearize(node: roxmltree::Node<'_, '_>, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(child.text().unwrap_or_default());
        } else if child.is_element() && !is_marker(child) {
            linearize(child, out);
        }
    }
}

fn is_marker(node: roxmltree::Node<'_, '_>) -> bool {
    node.is_element() && node.tag_name().name() == MARKER_TAG
}
