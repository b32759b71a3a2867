// tests/stage_tests.rs
//
// Focused tests for individual rewrite stages, exercised directly against a
// hand-built model.

use protomig::diagnostics::Diagnostic;
use protomig::model::Model;
use protomig::pipeline::MigrationOptions;
use protomig::source::SourceUnit;
use protomig::stages::{
    CapabilityMergeStage, ConstructorStage, DependencyStage, DirectLinkStage, MethodStage,
    RootDeclarationStage, Stage, SuperCallStage,
};

fn options() -> MigrationOptions {
    MigrationOptions::default()
}

fn rewrite(stage: &dyn Stage, unit: &SourceUnit, model: &Model) -> (String, Vec<Diagnostic>) {
    let mut diags = Vec::new();
    let text = stage.rewrite(unit, unit.text.clone(), model, &mut diags);
    (text, diags)
}

fn discover(stage: &dyn Stage, unit: &SourceUnit, model: &mut Model) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    stage.discover(unit, model, &mut diags);
    diags
}

// ---
// Dependency extraction
// ---

#[test]
fn dependency_stage_strips_reads_and_skips_assignment_targets() {
    let stage = DependencyStage::new(&options());
    let unit = SourceUnit::new("Hud", "APP.Hud = APP.Overlay.make();\n");
    let mut model = Model::default();
    discover(&stage, &unit, &mut model);

    assert!(model.dependencies.contains("Hud", "Overlay"));
    assert!(!model.dependencies.contains("Hud", "Hud"));

    let (text, _) = rewrite(&stage, &unit, &model);
    assert_eq!(text, "APP.Hud = Overlay.make();\n");
}

#[test]
fn dependency_stage_ignores_lowercase_namespace_members() {
    let stage = DependencyStage::new(&options());
    let unit = SourceUnit::new("Hud", "APP.extend(APP.Hud.prototype, APP.Panel.prototype);\n");
    let mut model = Model::default();
    discover(&stage, &unit, &mut model);

    assert!(!model.dependencies.contains("Hud", "extend"));
    assert!(model.dependencies.contains("Hud", "Panel"));
}

#[test]
fn dependency_stage_handles_multiple_reads_per_line() {
    let stage = DependencyStage::new(&options());
    let unit = SourceUnit::new("Hud", "return APP.MathUtil.clamp(APP.Limits.max, x);\n");
    let model = Model::default();
    let (text, _) = rewrite(&stage, &unit, &model);
    assert_eq!(text, "return MathUtil.clamp(Limits.max, x);\n");
}

// ---
// Inheritance forms
// ---

#[test]
fn direct_link_registers_parent_and_deletes_the_statement() {
    let stage = DirectLinkStage::new(&options());
    let unit = SourceUnit::new(
        "Arrow2",
        "APP.Arrow2.prototype.__proto__ = APP.Base.prototype;\n",
    );
    let mut model = Model::default();
    let diags = discover(&stage, &unit, &mut model);

    assert!(diags.is_empty());
    assert_eq!(model.symbols.parent_of("Arrow2"), Some("Base"));
    assert!(model.symbols.is_class("Arrow2"));

    let (text, _) = rewrite(&stage, &unit, &model);
    assert_eq!(text, "");
}

#[test]
fn direct_link_conflict_keeps_the_first_parent() {
    let stage = DirectLinkStage::new(&options());
    let unit = SourceUnit::new(
        "Arrow2",
        "APP.Arrow2.prototype.__proto__ = APP.Base.prototype;\nAPP.Arrow2.prototype.__proto__ = APP.Other.prototype;\n",
    );
    let mut model = Model::default();
    let diags = discover(&stage, &unit, &mut model);

    assert_eq!(model.symbols.parent_of("Arrow2"), Some("Base"));
    assert_eq!(
        diags,
        vec![Diagnostic::ParentConflict {
            unit: "Arrow2".to_string(),
            symbol: "Arrow2".to_string(),
            kept: "Base".to_string(),
            ignored: "Other".to_string(),
        }]
    );
}

#[test]
fn capability_merge_is_tracked_and_deleted() {
    let stage = CapabilityMergeStage::new(&options());
    let unit = SourceUnit::new("Arrow2", "APP.extend(Arrow2.prototype, Pickable.prototype);\n");
    let mut model = Model::default();
    discover(&stage, &unit, &mut model);

    let symbol = model.symbols.get("Arrow2").unwrap();
    assert_eq!(symbol.merges_from, vec!["Pickable"]);
    assert_eq!(symbol.parent.as_deref(), Some("Pickable"));

    let (text, _) = rewrite(&stage, &unit, &model);
    assert_eq!(text, "");
}

// ---
// Method and constructor tagging
// ---

#[test]
fn method_stage_rewrites_heads_and_marks_the_owner() {
    let stage = MethodStage::new(&options());
    let unit = SourceUnit::new(
        "Arrow2",
        "APP.Arrow2.prototype.moveTo = function (target, dt) {\n    return target;\n};\n",
    );
    let mut model = Model::default();
    discover(&stage, &unit, &mut model);
    assert!(model.symbols.is_class("Arrow2"));

    let (text, _) = rewrite(&stage, &unit, &model);
    assert_eq!(text, "moveTo(target, dt) {\n    return target;\n};\n");
}

#[test]
fn template_link_accessor_is_never_a_method_name() {
    let stage = MethodStage::new(&options());
    let unit = SourceUnit::new("Arrow2", "APP.Arrow2.prototype.__proto__ = function () {\n};\n");
    let mut model = Model::default();
    discover(&stage, &unit, &mut model);
    assert!(!model.symbols.is_class("Arrow2"));

    let (text, _) = rewrite(&stage, &unit, &model);
    assert_eq!(text, unit.text);
}

#[test]
fn constructor_stage_obeys_the_symbol_table_verdict() {
    let stage = ConstructorStage::new(&options());
    let unit = SourceUnit::new("Arrow2", "APP.Arrow2 = function (scene) {\n};\n");

    let mut class_model = Model::default();
    class_model.symbols.mark_class("Arrow2");
    let (text, diags) = rewrite(&stage, &unit, &class_model);
    assert_eq!(text, "constructor(scene) {\n};\n");
    assert!(diags.is_empty());

    let factory_model = Model::default();
    let (text, diags) = rewrite(&stage, &unit, &factory_model);
    assert_eq!(text, "function Arrow2(scene) {\n};\n");
    assert_eq!(diags.len(), 1);
}

#[test]
fn constructor_stage_ignores_unqualified_assignments() {
    let stage = ConstructorStage::new(&options());
    let unit = SourceUnit::new("Util", "onDrag = function (event) {\n};\n");
    let (text, _) = rewrite(&stage, &unit, &Model::default());
    assert_eq!(text, unit.text);
}

// ---
// Superclass calls
// ---

#[test]
fn super_call_stage_leaves_non_class_units_alone() {
    let stage = SuperCallStage::new(&options());
    let unit = SourceUnit::new("Util", "Base.call(this, 1);\n");
    let (text, diags) = rewrite(&stage, &unit, &Model::default());
    assert_eq!(text, unit.text);
    assert!(diags.is_empty());
}

#[test]
fn super_call_stage_rewrites_parent_and_deletes_foreigners() {
    let stage = SuperCallStage::new(&options());
    let unit = SourceUnit::new(
        "Child",
        "    Base.call(this, a, b);\n    Mixin.call(this);\n",
    );
    let mut model = Model::default();
    model.symbols.mark_class("Child");
    model.symbols.register_parent("Child", "Base");

    let (text, diags) = rewrite(&stage, &unit, &model);
    assert_eq!(text, "    super(a, b);\n");
    assert_eq!(
        diags,
        vec![Diagnostic::ExtraParentCallRemoved {
            unit: "Child".to_string(),
            target: "Mixin".to_string(),
        }]
    );
}

// ---
// Root declaration
// ---

#[test]
fn root_stage_only_touches_the_root_unit() {
    let stage = RootDeclarationStage::new(&options());
    let text = "var APP = APP || {};\nAPP.REVISION = '2.4';\n";

    let root = SourceUnit::new("Main", text);
    let (rewritten, diags) = rewrite(&stage, &root, &Model::default());
    assert_eq!(rewritten, "export const REVISION = '2.4';\n");
    assert!(diags.is_empty());

    let other = SourceUnit::new("Other", text);
    let (untouched, diags) = rewrite(&stage, &other, &Model::default());
    assert_eq!(untouched, text);
    assert!(diags.is_empty());
}

#[test]
fn root_stage_reports_a_missing_pattern() {
    let stage = RootDeclarationStage::new(&options());
    let root = SourceUnit::new("Main", "APP.util = function () {\n};\n");
    let (text, diags) = rewrite(&stage, &root, &Model::default());
    assert_eq!(text, root.text);
    assert_eq!(
        diags,
        vec![Diagnostic::RootPatternAbsent {
            unit: "Main".to_string()
        }]
    );
}
