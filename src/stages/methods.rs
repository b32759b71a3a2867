//! Method tagging: prototype-attached functions become bare method heads.
//!
//! `NS.Owner.prototype.name = function (args) {` marks Owner as a class and
//! is rewritten to `name(args) {`, ready for the assembler to fold into the
//! class body. The `__proto__` accessor is explicitly excluded from the name
//! position; that token is the direct-link form and belongs to the
//! inheritance stage.

use regex::{Captures, Regex};

use crate::diagnostics::Diagnostic;
use crate::model::Model;
use crate::pipeline::MigrationOptions;
use crate::source::SourceUnit;
use crate::stages::Stage;

const TEMPLATE_LINK_ACCESSOR: &str = "__proto__";

pub struct MethodStage {
    pattern: Regex,
}

impl MethodStage {
    pub fn new(options: &MigrationOptions) -> Self {
        let ns = regex::escape(&options.namespace);
        let pattern = Regex::new(&format!(
            r"(?m)^([ \t]*)(?:{ns}\.)?([A-Z]\w*)\.prototype\.([A-Za-z_$][\w$]*)[ \t]*=[ \t]*function[ \t]*\("
        ))
        .expect("method attachment pattern");
        Self { pattern }
    }
}

impl Stage for MethodStage {
    fn discover(&self, unit: &SourceUnit, model: &mut Model, _diags: &mut Vec<Diagnostic>) {
        for caps in self.pattern.captures_iter(&unit.text) {
            if &caps[3] == TEMPLATE_LINK_ACCESSOR {
                continue;
            }
            model.symbols.mark_class(&caps[2]);
        }
    }

    fn rewrite(
        &self,
        _unit: &SourceUnit,
        text: String,
        _model: &Model,
        _diags: &mut Vec<Diagnostic>,
    ) -> String {
        self.pattern
            .replace_all(&text, |caps: &Captures| {
                let name = &caps[3];
                if name == TEMPLATE_LINK_ACCESSOR {
                    return caps[0].to_string();
                }
                format!("{}{}(", &caps[1], name)
            })
            .into_owned()
    }
}
