//! The ordered rewrite stages.
//!
//! Each stage recognizes one legacy idiom. A stage is split along the
//! two-phase pipeline: `discover` scans a unit's *original* text and may
//! extend the model; `rewrite` is a pure text -> text function over the
//! frozen model. Both sides share the same recognizer so they cannot drift
//! apart.

mod constructors;
mod dependencies;
mod inheritance;
mod methods;
mod root_decl;
mod super_calls;

pub use constructors::ConstructorStage;
pub use dependencies::DependencyStage;
pub use inheritance::{CapabilityMergeStage, DirectLinkStage};
pub use methods::MethodStage;
pub use root_decl::RootDeclarationStage;
pub use super_calls::SuperCallStage;

use crate::diagnostics::Diagnostic;
use crate::model::Model;
use crate::pipeline::MigrationOptions;
use crate::source::SourceUnit;

/// One ordered step of the rewrite pipeline.
pub trait Stage {
    /// Discovery pass: extend the model from the unit's original text.
    /// Stages with nothing to learn keep the default no-op.
    fn discover(&self, _unit: &SourceUnit, _model: &mut Model, _diags: &mut Vec<Diagnostic>) {}

    /// Rewrite pass: transform the unit's text against the frozen model.
    /// A non-matching stage returns its input unchanged.
    fn rewrite(
        &self,
        unit: &SourceUnit,
        text: String,
        model: &Model,
        diags: &mut Vec<Diagnostic>,
    ) -> String;
}

/// The stages in their fixed application order.
pub fn stage_list(options: &MigrationOptions) -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(RootDeclarationStage::new(options)),
        Box::new(DependencyStage::new(options)),
        Box::new(DirectLinkStage::new(options)),
        Box::new(CapabilityMergeStage::new(options)),
        Box::new(MethodStage::new(options)),
        Box::new(ConstructorStage::new(options)),
        Box::new(SuperCallStage::new(options)),
    ]
}
