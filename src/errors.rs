//! Operational faults.
//!
//! The migration itself never fails: pattern non-matches are no-ops and every
//! other irregularity is surfaced as an advisory [`Diagnostic`]. The only
//! hard errors are an input unit that cannot be supplied and an output that
//! cannot be written, both of which abort the whole run.
//!
//! [`Diagnostic`]: crate::diagnostics::Diagnostic

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MigrationError {
    #[error("input unavailable: {path}: {reason}")]
    #[diagnostic(code(protomig::input_unavailable))]
    InputUnavailable { path: String, reason: String },

    #[error("failed to write output {path}: {reason}")]
    #[diagnostic(code(protomig::output_failed))]
    OutputFailed { path: String, reason: String },
}
