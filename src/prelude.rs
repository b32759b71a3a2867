//! Commonly used types, importable in one line as `use protomig::prelude::*`.

pub use crate::diagnostics::Diagnostic;
pub use crate::errors::MigrationError;
pub use crate::model::{DependencyGraph, Model, Symbol, SymbolTable};
pub use crate::pipeline::{Migration, MigrationOptions, MigrationReport};
pub use crate::source::SourceUnit;
