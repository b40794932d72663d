//! Plain-text source listings with diagnostics interleaved.
//!
//! This is the display side of a scenario: the numbered source text with
//! each flagged line annotated by the diagnostic's message and a caret
//! underline at its columns. The output is a plain string; where it goes
//! (terminal, markdown, a rating form) is the caller's business.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::scenario::ScenarioUnit;

/// Options for [`render_listing`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListingOptions {
    /// How many diagnostics to show for a single source line. Further
    /// diagnostics on the same line are dropped from the listing (they
    /// remain in the scenario itself).
    pub max_per_line: usize,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self { max_per_line: 1 }
    }
}

/// Render a numbered listing of the scenario's source with its diagnostics.
///
/// Each flagged line is preceded by the diagnostic's message line and
/// followed by an underline row: `start.column - 1` spaces of padding
/// (columns are 1-indexed), then `max(1, end.column - start.column)` caret
/// characters when the span is single-line, or a single caret for a span
/// that crosses lines.
pub fn render_listing(unit: &ScenarioUnit, options: &ListingOptions) -> String {
    let mut per_line: BTreeMap<u32, Vec<&Diagnostic>> = BTreeMap::new();
    for diagnostic in &unit.diagnostics {
        let shown = per_line.entry(diagnostic.start.line).or_default();
        if shown.len() < options.max_per_line {
            shown.push(diagnostic);
        }
    }

    let lines: Vec<&str> = unit.source_code.lines().collect();
    let width = lines.len().to_string().len();
    let margin = " ".repeat(width);

    let mut out = String::new();
    for (index, line) in lines.iter().enumerate() {
        let line_no = index as u32 + 1;
        let flagged = per_line.get(&line_no);

        if let Some(diagnostics) = flagged {
            for diagnostic in diagnostics {
                out.push_str(&diagnostic.to_string());
                out.push('\n');
            }
        }

        out.push_str(&format!("{line_no:>width$} | {line}\n"));

        let Some(diagnostics) = flagged else { continue };
        for diagnostic in diagnostics {
            // Columns are 1-indexed, so the caret sits after
            // `start.column - 1` characters of padding.
            let padding = " ".repeat(diagnostic.start.column.saturating_sub(1) as usize);
            let marker = if diagnostic.start.line == diagnostic.end.line {
                let span = diagnostic
                    .end
                    .column
                    .saturating_sub(diagnostic.start.column)
                    .max(1);
                "^".repeat(span as usize)
            } else {
                // Cross-line spans are not rendered precisely.
                "^".to_string()
            };
            out.push_str(&format!("{margin} | {padding}{marker}\n"));
        }
        out.push_str(&format!("{margin} |\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use pretty_assertions::assert_eq;

    fn diagnostic(line: u32, start_col: u32, end_line: u32, end_col: u32) -> Diagnostic {
        Diagnostic {
            filename: "Foo.java".to_string(),
            text: "';' expected".to_string(),
            start: Position::new(line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    fn unit(source: &str, diagnostics: Vec<Diagnostic>) -> ScenarioUnit {
        ScenarioUnit {
            filename: "Foo.java".to_string(),
            source_code: source.to_string(),
            diagnostics,
        }
    }

    #[test]
    fn test_unflagged_listing_numbers_every_line() {
        let unit = unit("class Foo {\n}", vec![]);
        let listing = render_listing(&unit, &ListingOptions::default());
        assert_eq!(listing, "1 | class Foo {\n2 | }\n");
    }

    #[test]
    fn test_flagged_line_gets_message_and_underline() {
        let unit = unit("int x = 1\n}", vec![diagnostic(1, 9, 1, 11)]);
        let listing = render_listing(&unit, &ListingOptions::default());
        assert_eq!(
            listing,
            concat!(
                "Foo.java:1: error: ';' expected\n",
                "1 | int x = 1\n",
                "  |         ^^\n",
                "  |\n",
                "2 | }\n",
            )
        );
    }

    #[test]
    fn test_zero_width_span_still_gets_one_caret() {
        let unit = unit("int x = 1", vec![diagnostic(1, 5, 1, 5)]);
        let listing = render_listing(&unit, &ListingOptions::default());
        assert!(listing.contains("  |     ^\n"));
    }

    #[test]
    fn test_cross_line_span_gets_single_caret() {
        let unit = unit("int x = 1\n}", vec![diagnostic(1, 5, 2, 1)]);
        let listing = render_listing(&unit, &ListingOptions::default());
        assert!(listing.contains("  |     ^\n"));
        assert!(!listing.contains("^^"));
    }

    #[test]
    fn test_default_cap_shows_first_diagnostic_per_line() {
        let first = diagnostic(1, 1, 1, 2);
        let mut second = diagnostic(1, 5, 1, 6);
        second.text = "not shown".to_string();
        let unit = unit("int x = 1", vec![first, second]);
        let listing = render_listing(&unit, &ListingOptions::default());
        assert!(listing.contains("';' expected"));
        assert!(!listing.contains("not shown"));
    }

    #[test]
    fn test_cap_is_configurable() {
        let first = diagnostic(1, 1, 1, 2);
        let mut second = diagnostic(1, 5, 1, 6);
        second.text = "also shown".to_string();
        let unit = unit("int x = 1", vec![first, second]);
        let listing = render_listing(&unit, &ListingOptions { max_per_line: 2 });
        assert!(listing.contains("';' expected"));
        assert!(listing.contains("also shown"));
    }

    #[test]
    fn test_gutter_width_grows_with_line_count() {
        let source = (1..=10).map(|_| "x;").collect::<Vec<_>>().join("\n");
        let unit = unit(&source, vec![]);
        let listing = render_listing(&unit, &ListingOptions::default());
        assert!(listing.starts_with(" 1 | x;\n"));
        assert!(listing.ends_with("10 | x;\n"));
    }

    #[test]
    fn test_padded_blank_lines_are_numbered() {
        // Reconstruction pads the front of the file; the listing numbers
        // those blank lines so diagnostics align with what it shows.
        let unit = unit("\n\nclass Foo {\n}", vec![diagnostic(3, 1, 3, 6)]);
        let listing = render_listing(&unit, &ListingOptions::default());
        assert!(listing.contains("3 | class Foo {\n"));
        assert!(listing.contains("  | ^^^^^\n"));
    }
}
