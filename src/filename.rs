//! Source filename inference.

use crate::document::Snapshot;

/// Sentinel returned when no class name can be determined. It can never
/// collide with a filename derived from a real class name.
pub const UNKNOWN_FILENAME: &str = "<unknown>";

/// Infer the `.java` filename recorded in a snapshot's syntax tree.
///
/// The class name comes from the first `class` → `name` path below the
/// snapshot root. A generic declaration like `Stack<T>` nests the real
/// identifier one level deeper, in which case the inner `name` element
/// supplies it. The markup pads names with trailing whitespace, which is
/// trimmed off.
///
/// Absence of a name is not an error: the [`UNKNOWN_FILENAME`] sentinel is
/// returned instead, and callers that care can discard such scenarios.
pub fn resolve_filename(snapshot: &Snapshot<'_, '_>) -> String {
    let Some(name) = class_name(snapshot) else {
        log::warn!(
            "no class name in version {}; filename unknown",
            snapshot.version()
        );
        return UNKNOWN_FILENAME.to_string();
    };
    format!("{}.java", name.trim())
}

fn class_name<'a>(snapshot: &Snapshot<'a, '_>) -> Option<&'a str> {
    let name_element = snapshot
        .node()
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "class")
        .flat_map(|class| {
            class
                .children()
                .filter(|node| node.is_element() && node.tag_name().name() == "name")
        })
        .next()?;

    if let Some(text) = name_element.text() {
        return Some(text);
    }

    // No direct text: probably a generic, with the identifier in a nested
    // name element. If there is no nested element either, give up.
    let nested = name_element
        .children()
        .find(|node| node.is_element() && node.tag_name().name() == "name")?;
    Some(nested.text().unwrap_or_default())
}
