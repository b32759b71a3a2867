//! Root declaration rewriting.
//!
//! The root unit historically initializes the shared namespace object and a
//! revision constant:
//!
//! ```text
//! var APP = APP || {};
//! APP.REVISION = '2.4';
//! ```
//!
//! Both statements are replaced by a single exported constant. Every other
//! unit passes through untouched.

use regex::Regex;

use crate::diagnostics::Diagnostic;
use crate::model::Model;
use crate::pipeline::MigrationOptions;
use crate::source::SourceUnit;
use crate::stages::Stage;

pub struct RootDeclarationStage {
    root_unit: String,
    pattern: Regex,
}

impl RootDeclarationStage {
    pub fn new(options: &MigrationOptions) -> Self {
        let ns = regex::escape(&options.namespace);
        let pattern = Regex::new(&format!(
            r"(?m)^[ \t]*var[ \t]+{ns}[ \t]*=[ \t]*{ns}[ \t]*\|\|[ \t]*\{{\}}[ \t]*;\s*{ns}\.REVISION[ \t]*=[ \t]*([^;\r\n]+);"
        ))
        .expect("root declaration pattern");
        Self {
            root_unit: options.root_unit.clone(),
            pattern,
        }
    }
}

impl Stage for RootDeclarationStage {
    fn rewrite(
        &self,
        unit: &SourceUnit,
        text: String,
        _model: &Model,
        diags: &mut Vec<Diagnostic>,
    ) -> String {
        if unit.name != self.root_unit {
            return text;
        }
        if !self.pattern.is_match(&text) {
            diags.push(Diagnostic::RootPatternAbsent {
                unit: unit.name.clone(),
            });
            return text;
        }
        self.pattern
            .replace(&text, "export const REVISION = ${1};")
            .into_owned()
    }
}
