//! Source units: the (logical name, text) pairs the pipeline consumes and
//! produces.

use serde::Serialize;

/// One logical input to the migration: a name plus its raw text.
///
/// The logical name derives from the unit's storage location (the file stem)
/// and doubles as the unit's presumed class name when the rewrite stages
/// consult the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceUnit {
    pub name: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
