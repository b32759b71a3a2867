//! Superclass-call rewriting.
//!
//! Inside a class unit, a line-leading `Parent.call(this, args...)` is the
//! legacy form of constructor delegation. When the callee is the unit's
//! recorded parent the statement becomes `super(args...)` with the receiver
//! dropped. Any other callee is a leftover reference to a capability-merge
//! source; the statement is deleted with a notice.

use regex::{Captures, Regex};

use crate::diagnostics::Diagnostic;
use crate::model::Model;
use crate::pipeline::MigrationOptions;
use crate::source::SourceUnit;
use crate::stages::Stage;

pub struct SuperCallStage {
    pattern: Regex,
}

impl SuperCallStage {
    pub fn new(_options: &MigrationOptions) -> Self {
        // Qualified callee, `this` or `that` receiver, optional trailing
        // arguments. The terminator is captured so a rewrite can keep the
        // line ending while a deletion drops the whole line.
        let pattern = Regex::new(
            r"(?m)^([ \t]*)([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*)\.call\([ \t]*(?:this|that)[ \t]*(?:,[ \t]*([^)\r\n]*))?\)[ \t]*;[ \t]*(\r?\n|$)",
        )
        .expect("superclass call pattern");
        Self { pattern }
    }
}

impl Stage for SuperCallStage {
    fn rewrite(
        &self,
        unit: &SourceUnit,
        text: String,
        model: &Model,
        diags: &mut Vec<Diagnostic>,
    ) -> String {
        // Only class units delegate to a superclass; a factory unit keeps
        // its `.call` statements untouched.
        if !model.symbols.is_class(&unit.name) {
            return text;
        }
        let parent = model.symbols.parent_of(&unit.name);
        self.pattern
            .replace_all(&text, |caps: &Captures| {
                let target = caps.get(2).unwrap().as_str();
                if Some(target) == parent {
                    let indent = &caps[1];
                    let args = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");
                    let eol = caps.get(4).map(|m| m.as_str()).unwrap_or("");
                    format!("{}super({});{}", indent, args, eol)
                } else {
                    diags.push(Diagnostic::ExtraParentCallRemoved {
                        unit: unit.name.clone(),
                        target: target.to_string(),
                    });
                    String::new()
                }
            })
            .into_owned()
    }
}
