//! Constructor tagging.
//!
//! `NS.Name = function (args) {` is either the constructor of a class or a
//! plain namespace-level factory. The symbol table decides: a known class
//! gets the bare `constructor(args) {` marker the assembler anchors on; any
//! other name becomes an ordinary named function and is never wrapped.
//!
//! A second, independent signal — whether Name equals the unit's logical
//! name — is compared against the table's verdict. Disagreement is reported
//! as a class mismatch but never changes the rewrite decision.

use regex::{Captures, Regex};

use crate::diagnostics::Diagnostic;
use crate::model::Model;
use crate::pipeline::MigrationOptions;
use crate::source::SourceUnit;
use crate::stages::Stage;

pub struct ConstructorStage {
    pattern: Regex,
}

impl ConstructorStage {
    pub fn new(options: &MigrationOptions) -> Self {
        let ns = regex::escape(&options.namespace);
        // Unlike the other stages the qualifier is mandatory here: a bare
        // `name = function (` is a local assignment, not a declaration.
        let pattern = Regex::new(&format!(
            r"(?m)^([ \t]*){ns}\.([A-Za-z_$][\w$]*)[ \t]*=[ \t]*function[ \t]*\("
        ))
        .expect("constructor pattern");
        Self { pattern }
    }
}

impl Stage for ConstructorStage {
    fn discover(&self, unit: &SourceUnit, model: &mut Model, _diags: &mut Vec<Diagnostic>) {
        for caps in self.pattern.captures_iter(&unit.text) {
            model.symbols.observe(&caps[2]);
        }
    }

    fn rewrite(
        &self,
        unit: &SourceUnit,
        text: String,
        model: &Model,
        diags: &mut Vec<Diagnostic>,
    ) -> String {
        self.pattern
            .replace_all(&text, |caps: &Captures| {
                let (indent, name) = (&caps[1], &caps[2]);
                let table_says_class = model.symbols.is_class(name);
                let unit_name_matches = unit.name == name;
                if table_says_class != unit_name_matches {
                    diags.push(Diagnostic::ClassMismatch {
                        unit: unit.name.clone(),
                        symbol: name.to_string(),
                        table_says_class,
                        unit_name_matches,
                    });
                }
                if table_says_class {
                    format!("{}constructor(", indent)
                } else {
                    format!("{}function {}(", indent, name)
                }
            })
            .into_owned()
    }
}
