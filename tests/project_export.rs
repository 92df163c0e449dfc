//! Project validation and export over parsed classes

use std::path::Path;

use weave::config::load_defaults;
use weave::dsl::ids::SequentialIds;
use weave::dsl::{validate_project, ClassRecord, DslParser, ExportError, ExportPlan};

fn project(sources: &[&str]) -> Vec<ClassRecord> {
    let parser = DslParser::new().with_ids(SequentialIds::default());
    sources
        .iter()
        .map(|source| parser.parse(source).unwrap())
        .collect()
}

#[test]
fn test_resolved_project_has_no_findings() {
    let records = project(&[
        "Cl'IMovable'';ip'speed''float",
        "Cl'Weapon'Resource'",
        "Cl'Player'CharacterBody2D'IMovable;cp'weapon''Weapon''null;up'hp''int''100",
    ]);
    let report = validate_project(&records);
    assert!(report.is_ok());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}

#[test]
fn test_unresolved_references_are_warnings() {
    let records = project(&["Cl'Player'Actor'IMovable;up'gun''Weapon''null"]);
    let report = validate_project(&records);
    assert!(report.is_ok());
    assert_eq!(report.warnings.len(), 3);
}

#[test]
fn test_export_uses_configured_layout() {
    let config = load_defaults().unwrap();
    let records = project(&["Cl'GlobalAudio'Node';fn'play''void''sound:String"]);
    let plan = ExportPlan::build("Demo", &records, &config.export, &config.emit.indent).unwrap();

    assert_eq!(plan.len(), 4);
    assert_eq!(
        plan.get("project_autoloads.cfg"),
        Some("[autoload]\n\nGlobalAudio=\"*res://autoloads/GlobalAudio.gd\"\n")
    );
    let script = plan.get(Path::new("scripts/GlobalAudio.gd")).unwrap();
    assert!(script.contains("func play(sound:String):\n\t# Implement play\n"));
    let autoload = plan.get("autoloads/GlobalAudio.gd").unwrap();
    assert!(autoload.contains("print(\"GlobalAudio autoload ready\")"));

    let manifest: serde_json::Value =
        serde_json::from_str(plan.get("weave_setup.json").unwrap()).unwrap();
    assert_eq!(
        manifest["classes"][0]["dsl"],
        "Cl'GlobalAudio'Node';fn'play''void''sound:String"
    );
}

#[test]
fn test_class_names_stay_inside_the_output_directory() {
    let config = load_defaults().unwrap();
    let records = project(&["Cl'../../escape'Node", "Cl'Player'Node2D"]);

    let report = validate_project(&records);
    assert_eq!(
        report.errors,
        vec!["class name '../../escape' cannot be used as a file name"]
    );
    assert_eq!(
        ExportPlan::build("Demo", &records, &config.export, &config.emit.indent),
        Err(ExportError::UnsafeName("../../escape".to_string()))
    );
}

#[test]
fn test_duplicate_classes_are_reported_before_export() {
    let config = load_defaults().unwrap();
    let records = project(&["Cl'Dup'Node", "Cl'Dup'Node2D"]);

    let report = validate_project(&records);
    assert_eq!(report.errors, vec!["class 'Dup' is defined more than once"]);
    assert!(matches!(
        ExportPlan::build("Demo", &records, &config.export, &config.emit.indent),
        Err(ExportError::DuplicateName(name)) if name == "Dup"
    ));
}
