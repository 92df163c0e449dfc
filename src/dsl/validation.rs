//! Validation of DSL text and of whole projects
//!
//! [`Validation`] wraps a single parse: the parse error, if any, becomes the
//! only error and every parser diagnostic becomes a warning.
//! [`validate_project`] cross-checks a set of records: parents, interfaces
//! and property types must resolve to an engine built-in or to a class in
//! the same project. Class names must be unique and usable as file names,
//! since export writes one script per class.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::dsl::ast::{ClassKind, ClassRecord};
use crate::dsl::parser::DslParser;
use crate::dsl::project::is_safe_file_stem;

/// Engine classes a record may extend without declaring them
static BUILTIN_CLASSES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Node",
        "Node2D",
        "Node3D",
        "Control",
        "CanvasItem",
        "CharacterBody2D",
        "CharacterBody3D",
        "RigidBody2D",
        "RigidBody3D",
        "StaticBody2D",
        "StaticBody3D",
        "Area2D",
        "Area3D",
        "Sprite2D",
        "Sprite3D",
        "Label",
        "Button",
        "LineEdit",
        "TextEdit",
        "Panel",
        "VBoxContainer",
        "HBoxContainer",
        "GridContainer",
        "ScrollContainer",
        "TabContainer",
        "Resource",
        "RefCounted",
        "Object",
    ]
    .into_iter()
    .collect()
});

/// Value types a property may use without declaring them
static BUILTIN_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "int",
        "float",
        "bool",
        "String",
        "StringName",
        "Vector2",
        "Vector2i",
        "Vector3",
        "Vector3i",
        "Vector4",
        "Vector4i",
        "Color",
        "Rect2",
        "Rect2i",
        "Transform2D",
        "Transform3D",
        "Plane",
        "Quaternion",
        "AABB",
        "Basis",
        "Projection",
        "Array",
        "Dictionary",
        "PackedStringArray",
        "PackedFloat32Array",
        "PackedFloat64Array",
        "PackedInt32Array",
        "PackedInt64Array",
        "PackedByteArray",
        "PackedVector2Array",
        "PackedVector3Array",
        "PackedColorArray",
        "Variant",
        "Callable",
        "Signal",
        "NodePath",
        "RID",
        "var",
        "void",
    ]
    .into_iter()
    .collect()
});

pub fn is_builtin_class(name: &str) -> bool {
    BUILTIN_CLASSES.contains(name)
}

pub fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPES.contains(name)
}

/// Outcome of validating one DSL text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Validation {
    pub fn with_parser(parser: &DslParser, source: &str) -> Self {
        match parser.parse_with_diagnostics(source) {
            Ok(parsed) => Validation {
                valid: true,
                errors: Vec::new(),
                warnings: parsed.diagnostics.iter().map(ToString::to_string).collect(),
            },
            Err(error) => Validation {
                valid: false,
                errors: vec![error.to_string()],
                warnings: Vec::new(),
            },
        }
    }
}

/// Cross-record findings for a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ProjectReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_project(records: &[ClassRecord]) -> ProjectReport {
    let mut report = ProjectReport::default();
    if records.is_empty() {
        report.errors.push("project contains no classes".to_string());
        return report;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        if !is_safe_file_stem(&record.name) {
            report.errors.push(format!(
                "class name '{}' cannot be used as a file name",
                record.name
            ));
        }
        let count = counts.entry(record.name.as_str()).or_default();
        *count += 1;
        if *count == 2 {
            report
                .errors
                .push(format!("class '{}' is defined more than once", record.name));
        }
    }

    let names: HashSet<&str> = counts.keys().copied().collect();
    let interfaces: HashSet<&str> = records
        .iter()
        .filter(|r| r.kind == ClassKind::Interface)
        .map(|r| r.name.as_str())
        .collect();

    for record in records {
        if let Some(parent) = &record.parent {
            if !is_builtin_class(parent) && !names.contains(parent.as_str()) {
                report.warnings.push(format!(
                    "class {}: parent class '{parent}' not found",
                    record.name
                ));
            }
        }

        for interface in &record.interfaces {
            if !interfaces.contains(interface.as_str()) {
                report.warnings.push(format!(
                    "class {}: interface '{interface}' not found",
                    record.name
                ));
            }
        }

        let props = record
            .unique_props
            .iter()
            .chain(&record.current_props)
            .chain(&record.interface_props);
        for prop in props {
            if !is_builtin_type(&prop.ty) && !names.contains(prop.ty.as_str()) {
                report.warnings.push(format!(
                    "class {}: type '{}' of property '{}' not found",
                    record.name, prop.ty, prop.name
                ));
            }
        }
    }

    report
}
