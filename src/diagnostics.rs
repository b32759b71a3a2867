//! Structured diagnostics emitted by the migration pipeline.
//!
//! Diagnostics are advisory signals for the human reviewing the migration
//! output; none of them stops a run. The pipeline returns them as a list so
//! callers and tests can assert on them without capturing console output.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    /// Per-unit banner, emitted when the rewrite pass picks up a unit.
    UnitStarted { unit: String },
    /// The designated root unit did not contain the namespace
    /// initialization pattern.
    RootPatternAbsent { unit: String },
    /// A second, different parent was offered for an already-resolved
    /// symbol. The first registration stays authoritative.
    ParentConflict {
        unit: String,
        symbol: String,
        kept: String,
        ignored: String,
    },
    /// The symbol-table verdict and the unit-name signal disagree about
    /// whether a tagged constructor belongs to a class.
    ClassMismatch {
        unit: String,
        symbol: String,
        table_says_class: bool,
        unit_name_matches: bool,
    },
    /// A line-leading `.call(this, ...)` whose target is not the recorded
    /// parent was deleted from the output.
    ExtraParentCallRemoved { unit: String, target: String },
}

impl Diagnostic {
    /// The unit this diagnostic was observed in.
    pub fn unit(&self) -> &str {
        match self {
            Diagnostic::UnitStarted { unit }
            | Diagnostic::RootPatternAbsent { unit }
            | Diagnostic::ParentConflict { unit, .. }
            | Diagnostic::ClassMismatch { unit, .. }
            | Diagnostic::ExtraParentCallRemoved { unit, .. } => unit,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnitStarted { unit } => write!(f, "==> migrating {}", unit),
            Diagnostic::RootPatternAbsent { unit } => {
                write!(f, "{}: namespace initialization pattern not found", unit)
            }
            Diagnostic::ParentConflict {
                unit,
                symbol,
                kept,
                ignored,
            } => write!(
                f,
                "{}: conflicting parent for {}: keeping {}, ignoring {}",
                unit, symbol, kept, ignored
            ),
            Diagnostic::ClassMismatch {
                unit,
                symbol,
                table_says_class,
                unit_name_matches,
            } => write!(
                f,
                "{}: class mismatch for {} (symbol table: {}, unit name: {})",
                unit, symbol, table_says_class, unit_name_matches
            ),
            Diagnostic::ExtraParentCallRemoved { unit, target } => write!(
                f,
                "{}: removing extra parent constructor call to {}",
                unit, target
            ),
        }
    }
}
