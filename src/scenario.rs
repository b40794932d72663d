//! Scenario assembly.

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::document::EditHistory;
use crate::error::ScenarioResult;
use crate::filename::{UNKNOWN_FILENAME, resolve_filename};
use crate::reconstruct::reconstruct;

/// One version of one source file: the inferred filename, the exact source
/// text of that version, and the compiler diagnostics recorded against it.
///
/// Diagnostic line numbers are valid physical line numbers into
/// `source_code` for well-formed input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioUnit {
    pub filename: String,
    pub source_code: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScenarioUnit {
    /// Extract the scenario for `version` from an edit-history document.
    ///
    /// Selects the snapshot, infers its filename, then reconstructs its
    /// source and diagnostics. The document is never mutated, so the same
    /// [`EditHistory`] can be reused for further versions.
    pub fn build(history: &EditHistory<'_>, version: &str) -> ScenarioResult<Self> {
        let snapshot = history.snapshot(version)?;
        let filename = resolve_filename(&snapshot);
        let (source_code, diagnostics) = reconstruct(&snapshot, &filename)?;
        Ok(Self {
            filename,
            source_code,
            diagnostics,
        })
    }

    /// Whether filename inference produced a real name rather than the
    /// [`UNKNOWN_FILENAME`] sentinel.
    pub fn has_known_filename(&self) -> bool {
        self.filename != UNKNOWN_FILENAME
    }
}

/// A scenario as persisted in a batch: which error category it was sampled
/// for, the path of the document it came from, the extracted version, and
/// the unit itself. Plain data; batching and storage belong to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub category: String,
    pub source_path: String,
    pub version: String,
    pub unit: ScenarioUnit,
}
