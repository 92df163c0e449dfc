//! Autoload singleton scripts for `global` classes
//!
//! The script extends `Node`, exposes the record's signals, turns constants
//! and the flag, current and unique props into plain variables, and adds a
//! `_ready` hook ahead of the declared functions. Interface props are not
//! carried over.


use super::gdscript::{write_signals, GdscriptFormatter};
use super::registry::{FormatError, Formatter};
use crate::dsl::ast::ClassRecord;

#[derive(Debug, Clone)]
pub struct AutoloadFormatter {
    indent: String,
    functions: GdscriptFormatter,
}

impl AutoloadFormatter {
    pub fn new(indent: impl Into<String>) -> Self {
        let indent = indent.into();
        Self {
            functions: GdscriptFormatter::new(indent.clone()),
            indent,
        }
    }

    pub fn generate(&self, record: &ClassRecord) -> String {
        let mut script = String::new();
        script.push_str(&format!("# Autoload: {}\n", record.name));
        script.push_str("# Generated by weave\n\n");
        script.push_str("extends Node\n\n");

        write_signals(&mut script, "# Global signals", record);

        let constants = record
            .constants
            .iter()
            .map(|c| (&c.name, &c.ty, Some(&c.value)));
        let props = record
            .flags
            .iter()
            .chain(&record.current_props)
            .chain(&record.unique_props)
            .map(|p| (&p.name, &p.ty, p.default.as_ref()));
        let variables: Vec<_> = constants.chain(props).collect();

        if !variables.is_empty() {
            script.push_str("# Global variables\n");
            for (name, ty, value) in variables {
                script.push_str(&format!("var {name}: {ty}"));
                if let Some(value) = value {
                    script.push_str(&format!(" = {value}"));
                }
                script.push('\n');
            }
            script.push('\n');
        }

        script.push_str("func _ready():\n");
        script.push_str(&format!(
            "{}print(\"{} autoload ready\")\n",
            self.indent, record.name
        ));
        script.push_str(&format!("{}# Autoload initialization\n", self.indent));
        script.push('\n');

        for function in &record.functions {
            self.functions.write_function(&mut script, function);
        }

        script
    }
}

impl Default for AutoloadFormatter {
    fn default() -> Self {
        Self::new("\t")
    }
}

impl Formatter for AutoloadFormatter {
    fn name(&self) -> &str {
        "autoload"
    }

    fn serialize(&self, record: &ClassRecord) -> Result<String, FormatError> {
        Ok(self.generate(record))
    }

    fn description(&self) -> &str {
        "Autoload singleton script for global classes"
    }
}
