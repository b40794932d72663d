//! Scenario extraction from srcML edit-history documents.
//!
//! An edit-history document records every saved state of a Java source
//! file during an editing session as a sequence of version snapshots, with
//! the compiler's error messages embedded inline in each snapshot's syntax
//! tree. This crate recovers, for any recorded version, the exact source
//! text, the diagnostics anchored to line/column spans within it, and the
//! filename the syntax tree implies.
//!
//! [`ScenarioUnit::build`] is the entry point: parse the document text
//! with [`EditHistory::parse`], then build the scenario for the version
//! you want. The document is never mutated, so one parse serves any number
//! of versions.

pub mod diagnostic;
pub mod document;
pub mod error;
pub mod filename;
pub mod position;
pub mod reconstruct;
pub mod render;
pub mod scenario;

pub use diagnostic::Diagnostic;
pub use document::{EditHistory, Snapshot};
pub use error::{ScenarioError, ScenarioResult};
pub use filename::{UNKNOWN_FILENAME, resolve_filename};
pub use position::Position;
pub use reconstruct::reconstruct;
pub use render::{ListingOptions, render_listing};
pub use scenario::{Scenario, ScenarioUnit};
