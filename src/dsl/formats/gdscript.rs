//! GDScript emission
//!
//! A fixed template over the record; it performs no validation and cannot
//! fail. Blocks appear in this order, each only when non-empty: declaration,
//! signals, constants, enums, variables (flags, current, interface and unique
//! props merged), functions.
//!
//! ## Example
//!
//! ```text
//! class_name Player
//! extends CharacterBody2D
//!
//! # Signals
//! signal Died
//!
//! # Variables
//! var hp: int = 100
//!
//! # Functions
//! func jump():
//!     pass
//! ```


use super::registry::{FormatError, Formatter};
use crate::dsl::ast::{ClassKind, ClassRecord, Function};

const VOID: &str = "void";

#[derive(Debug, Clone)]
pub struct GdscriptFormatter {
    indent: String,
}

impl GdscriptFormatter {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    pub fn generate(&self, record: &ClassRecord) -> String {
        let mut script = String::new();

        if record.kind == ClassKind::Interface {
            script.push_str(&format!("# Interface {}\n", record.name));
            script.push_str("# This is an interface definition - implement in concrete classes\n\n");
        } else {
            script.push_str(&format!("class_name {}\n", record.name));
            if let Some(parent) = &record.parent {
                script.push_str(&format!("extends {parent}\n"));
            }
            script.push('\n');
        }

        write_signals(&mut script, "# Signals", record);

        if !record.constants.is_empty() {
            script.push_str("# Constants\n");
            for constant in &record.constants {
                script.push_str(&format!(
                    "const {}: {} = {}\n",
                    constant.name, constant.ty, constant.value
                ));
            }
            script.push('\n');
        }

        if !record.enums.is_empty() {
            script.push_str("# Enums\n");
            for enum_def in &record.enums {
                script.push_str(&format!("enum {} {{\n", enum_def.name));
                let last = enum_def.values.len().saturating_sub(1);
                for (index, value) in enum_def.values.iter().enumerate() {
                    let separator = if index < last { "," } else { "" };
                    script.push_str(&format!("{}{value}{separator}\n", self.indent));
                }
                script.push_str("}\n");
            }
            script.push('\n');
        }

        if record.all_properties().next().is_some() {
            script.push_str("# Variables\n");
            for prop in record.all_properties() {
                script.push_str(&format!("var {}: {}", prop.name, prop.ty));
                if let Some(default) = &prop.default {
                    script.push_str(&format!(" = {default}"));
                }
                script.push('\n');
            }
            script.push('\n');
        }

        if !record.functions.is_empty() {
            script.push_str("# Functions\n");
            for function in &record.functions {
                self.write_function(&mut script, function);
            }
        }

        script
    }

    /// `func name(params) -> ret:` and an indented body, then a blank line
    pub(super) fn write_function(&self, script: &mut String, function: &Function) {
        script.push_str(&format!(
            "func {}({})",
            function.name,
            function.params.join(", ")
        ));
        if !function.return_type.is_empty() && function.return_type != VOID {
            script.push_str(&format!(" -> {}", function.return_type));
        }
        script.push_str(":\n");

        match &function.body {
            Some(body) => {
                for line in body.split('\n') {
                    script.push_str(&format!("{}{line}\n", self.indent));
                }
            }
            None => {
                script.push_str(&format!("{}pass\n", self.indent));
            }
        }
        script.push('\n');
    }
}

/// Signal declarations under `heading`, followed by a blank line
pub(super) fn write_signals(script: &mut String, heading: &str, record: &ClassRecord) {
    if record.signals.is_empty() {
        return;
    }
    script.push_str(&format!("{heading}\n"));
    for signal in &record.signals {
        script.push_str(&format!("signal {}", signal.name));
        if !signal.params.is_empty() {
            script.push_str(&format!("({})", signal.params.join(", ")));
        }
        script.push('\n');
    }
    script.push('\n');
}

impl Default for GdscriptFormatter {
    fn default() -> Self {
        Self::new("\t")
    }
}

impl Formatter for GdscriptFormatter {
    fn name(&self) -> &str {
        "gdscript"
    }

    fn serialize(&self, record: &ClassRecord) -> Result<String, FormatError> {
        Ok(self.generate(record))
    }

    fn description(&self) -> &str {
        "GDScript class script"
    }
}
