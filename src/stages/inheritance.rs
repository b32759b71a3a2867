//! Inheritance discovery: the direct-link and capability-merge forms.
//!
//! The legacy dialect wires inheritance at runtime, either by relinking a
//! child's prototype to its parent's:
//!
//! ```text
//! NS.Child.prototype.__proto__ = Parent.prototype;
//! ```
//!
//! or by copying every property of the parent's prototype onto the child's:
//!
//! ```text
//! NS.extend(Child.prototype, Parent.prototype);
//! ```
//!
//! Both statements are deleted from the output; the relationship is
//! re-expressed by the class assembler as an explicit inheritance clause.
//! The direct link registers the child's single parent (first registration
//! wins). The merge form additionally records its source in the symbol's
//! merge list, so the report keeps the two relations apart even though the
//! emitted header only ever names the single parent.

use regex::Regex;

use crate::diagnostics::Diagnostic;
use crate::model::{Model, ParentRegistration};
use crate::pipeline::MigrationOptions;
use crate::source::SourceUnit;
use crate::stages::Stage;

pub struct DirectLinkStage {
    pattern: Regex,
}

impl DirectLinkStage {
    pub fn new(options: &MigrationOptions) -> Self {
        let ns = regex::escape(&options.namespace);
        // The parent side may already be bare: the dependency stage strips
        // its qualifier before this stage runs over the rewritten text.
        let pattern = Regex::new(&format!(
            r"(?m)^[ \t]*(?:{ns}\.)?([A-Z]\w*)\.prototype\.__proto__[ \t]*=[ \t]*(?:{ns}\.)?([A-Z]\w*)\.prototype[ \t]*;[ \t]*(?:\r?\n)?"
        ))
        .expect("direct link pattern");
        Self { pattern }
    }
}

impl Stage for DirectLinkStage {
    fn discover(&self, unit: &SourceUnit, model: &mut Model, diags: &mut Vec<Diagnostic>) {
        for caps in self.pattern.captures_iter(&unit.text) {
            let (child, parent) = (&caps[1], &caps[2]);
            register_parent(unit, child, parent, model, diags);
            model.symbols.mark_class(child);
            model.symbols.observe(parent);
        }
    }

    fn rewrite(
        &self,
        _unit: &SourceUnit,
        text: String,
        _model: &Model,
        _diags: &mut Vec<Diagnostic>,
    ) -> String {
        self.pattern.replace_all(&text, "").into_owned()
    }
}

pub struct CapabilityMergeStage {
    pattern: Regex,
}

impl CapabilityMergeStage {
    pub fn new(options: &MigrationOptions) -> Self {
        let ns = regex::escape(&options.namespace);
        let pattern = Regex::new(&format!(
            r"(?m)^[ \t]*(?:{ns}\.)?extend\([ \t]*(?:{ns}\.)?([A-Z]\w*)\.prototype[ \t]*,[ \t]*(?:{ns}\.)?([A-Z]\w*)\.prototype[ \t]*\)[ \t]*;[ \t]*(?:\r?\n)?"
        ))
        .expect("capability merge pattern");
        Self { pattern }
    }
}

impl Stage for CapabilityMergeStage {
    fn discover(&self, unit: &SourceUnit, model: &mut Model, diags: &mut Vec<Diagnostic>) {
        for caps in self.pattern.captures_iter(&unit.text) {
            let (child, source) = (&caps[1], &caps[2]);
            model.symbols.record_merge(child, source);
            // The merge source also competes for the single parent slot,
            // under the same first-wins rule as the direct link.
            register_parent(unit, child, source, model, diags);
            model.symbols.mark_class(child);
            model.symbols.observe(source);
        }
    }

    fn rewrite(
        &self,
        _unit: &SourceUnit,
        text: String,
        _model: &Model,
        _diags: &mut Vec<Diagnostic>,
    ) -> String {
        self.pattern.replace_all(&text, "").into_owned()
    }
}

fn register_parent(
    unit: &SourceUnit,
    child: &str,
    parent: &str,
    model: &mut Model,
    diags: &mut Vec<Diagnostic>,
) {
    if let ParentRegistration::Conflict { kept } = model.symbols.register_parent(child, parent) {
        diags.push(Diagnostic::ParentConflict {
            unit: unit.name.clone(),
            symbol: child.to_string(),
            kept,
            ignored: parent.to_string(),
        });
    }
}
