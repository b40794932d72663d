//! Compiler diagnostics recorded inline in a snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScenarioResult;
use crate::position::Position;

/// A compiler error message anchored to a span of the reconstructed source.
///
/// `text` is stored exactly as it appears in the document. The recording
/// pipeline writes real newlines as the literal two-character sequence
/// `\n`; [`Diagnostic::unescaped_text`] translates them back on demand
/// without touching the stored value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub filename: String,
    pub text: String,
    pub start: Position,
    pub end: Position,
}

impl Diagnostic {
    /// Parse a diagnostic from an inline marker element.
    ///
    /// The marker's own text content becomes `text`, verbatim. Fails when
    /// either the `start` or `end` attribute is absent or unparseable.
    pub fn from_marker(node: roxmltree::Node<'_, '_>, filename: &str) -> ScenarioResult<Self> {
        Ok(Self {
            filename: filename.to_string(),
            text: node.text().unwrap_or_default().to_string(),
            start: Position::from_attribute(node, "start")?,
            end: Position::from_attribute(node, "end")?,
        })
    }

    /// The message text with every literal `\n` replaced by a real newline.
    pub fn unescaped_text(&self) -> String {
        self.text.replace("\\n", "\n")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: error: {}",
            self.filename, self.start.line, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(xml: &str) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(xml).unwrap()
    }

    #[test]
    fn test_from_marker() {
        let doc = marker(r#"<compile-error start="4:13" end="4:14">';' expected</compile-error>"#);
        let diagnostic = Diagnostic::from_marker(doc.root_element(), "Foo.java").unwrap();
        assert_eq!(diagnostic.filename, "Foo.java");
        assert_eq!(diagnostic.text, "';' expected");
        assert_eq!(diagnostic.start, Position::new(4, 13));
        assert_eq!(diagnostic.end, Position::new(4, 14));
    }

    #[test]
    fn test_from_marker_without_text() {
        let doc = marker(r#"<compile-error start="1:1" end="1:2"/>"#);
        let diagnostic = Diagnostic::from_marker(doc.root_element(), "Foo.java").unwrap();
        assert_eq!(diagnostic.text, "");
    }

    #[test]
    fn test_from_marker_missing_start_fails() {
        let doc = marker(r#"<compile-error end="1:2">oops</compile-error>"#);
        assert!(Diagnostic::from_marker(doc.root_element(), "Foo.java").is_err());
    }

    #[test]
    fn test_unescaped_text_replaces_literal_sequences() {
        let doc = marker(r#"<compile-error start="1:1" end="1:2">a\nb</compile-error>"#);
        let diagnostic = Diagnostic::from_marker(doc.root_element(), "Foo.java").unwrap();
        assert_eq!(diagnostic.unescaped_text(), "a\nb");
        // The stored text keeps the escaped form.
        assert_eq!(diagnostic.text, "a\\nb");
    }

    #[test]
    fn test_display_uses_raw_text() {
        let doc = marker(r#"<compile-error start="3:1" end="3:2">bad\nline</compile-error>"#);
        let diagnostic = Diagnostic::from_marker(doc.root_element(), "Foo.java").unwrap();
        assert_eq!(diagnostic.to_string(), "Foo.java:3: error: bad\\nline");
    }
}
