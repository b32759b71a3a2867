//! The migration driver.
//!
//! Two phases over the caller-supplied unit order: a discovery pass over the
//! entire corpus builds the model, then a rewrite pass pushes each unit
//! through the ordered stage list and the class assembler against the frozen
//! model. Rewriting a unit therefore never depends on which units happened
//! to be rewritten before it.

use crate::assembler;
use crate::diagnostics::Diagnostic;
use crate::model::Model;
use crate::source::SourceUnit;
use crate::stages::{self, Stage};

/// Dialect configuration shared by every stage.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// The namespace identifier the legacy sources hang everything from.
    pub namespace: String,
    /// Logical name of the root unit that initializes the namespace.
    pub root_unit: String,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            namespace: "APP".to_string(),
            root_unit: "Main".to_string(),
        }
    }
}

/// Everything a completed run produces.
#[derive(Debug)]
pub struct MigrationReport {
    /// Transformed units, in input order.
    pub outputs: Vec<SourceUnit>,
    /// The frozen symbol table and dependency graph.
    pub model: Model,
    /// Advisory diagnostics, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Migration {
    stages: Vec<Box<dyn Stage>>,
}

impl Migration {
    pub fn new(options: MigrationOptions) -> Self {
        Self {
            stages: stages::stage_list(&options),
        }
    }

    /// Runs the full migration over `units`, in the given order.
    pub fn run(&self, units: &[SourceUnit]) -> MigrationReport {
        let mut model = Model::default();
        let mut diagnostics = Vec::new();

        for unit in units {
            for stage in &self.stages {
                stage.discover(unit, &mut model, &mut diagnostics);
            }
        }

        let mut outputs = Vec::with_capacity(units.len());
        for unit in units {
            diagnostics.push(Diagnostic::UnitStarted {
                unit: unit.name.clone(),
            });
            let mut text = unit.text.clone();
            for stage in &self.stages {
                text = stage.rewrite(unit, text, &model, &mut diagnostics);
            }
            let text = assembler::assemble(unit, &text, &model);
            outputs.push(SourceUnit::new(unit.name.clone(), text));
        }

        MigrationReport {
            outputs,
            model,
            diagnostics,
        }
    }
}

impl Default for Migration {
    fn default() -> Self {
        Self::new(MigrationOptions::default())
    }
}
