//! Positions in a source file, as recorded by the compiler.

use serde::{Deserialize, Serialize};

use crate::error::{ScenarioError, ScenarioResult};

/// A (line, column) pair within a source file. Both fields are 1-indexed.
///
/// Ordering is lexicographic by line, then column, matching how the
/// compiler orders its spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Parse a position from its compact `"line:column"` encoding.
    ///
    /// Exactly two integer fields separated by one `:`. Anything else fails
    /// with [`ScenarioError::MalformedPosition`]. No range validation is
    /// performed beyond integer parseability.
    pub fn parse(encoded: &str) -> ScenarioResult<Self> {
        let mut fields = encoded.split(':');
        let (Some(line), Some(column), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(ScenarioError::malformed_position(encoded));
        };
        let line = line
            .parse()
            .map_err(|_| ScenarioError::malformed_position(encoded))?;
        let column = column
            .parse()
            .map_err(|_| ScenarioError::malformed_position(encoded))?;
        Ok(Self { line, column })
    }

    /// Read a position from a `start=""` or `end=""` attribute of an element.
    pub fn from_attribute(
        node: roxmltree::Node<'_, '_>,
        attribute: &'static str,
    ) -> ScenarioResult<Self> {
        let Some(value) = node.attribute(attribute) else {
            return Err(ScenarioError::missing_position(
                node.tag_name().name(),
                attribute,
            ));
        };
        Self::parse(value)
    }
}
