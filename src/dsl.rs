//! The weave class-description DSL
//!
//! Pipeline: text is tokenized ([`lexer`]), cut into sections and columns
//! ([`sections`]), and each tagged section is folded into a [`ClassRecord`]
//! ([`parser`]). Records are rendered by the [`formats`] registry.
//!
//! The free functions below are the collaborator-facing surface. They use
//! the process-wide id source and the built-in default table; build a
//! [`DslParser`] or a formatter directly to inject either.

pub mod ast;
pub mod defaults;
pub mod error;
pub mod formats;
pub mod ids;
pub mod lexer;
pub mod parser;
pub mod project;
pub mod sections;
pub mod testing;
pub mod validation;

pub use ast::{
    ClassKind, ClassRecord, Component, Constant, EnumDef, Function, Position, Property,
    PropertyGroup, Signal,
};
pub use error::{Diagnostic, ParseError};
pub use parser::{DslParser, Parsed};
pub use project::{ExportError, ExportPlan};
pub use validation::{validate_project, ProjectReport, Validation};

use formats::{DslFormatter, GdscriptFormatter};

/// Parse one class description
pub fn parse_class(source: &str) -> Result<ClassRecord, ParseError> {
    DslParser::new().parse(source)
}

/// Canonical DSL for `record`
pub fn generate_dsl(record: &ClassRecord) -> String {
    DslFormatter::default().generate(record)
}

/// GDScript source for `record`
pub fn generate_code(record: &ClassRecord) -> String {
    GdscriptFormatter::default().generate(record)
}

pub fn default_for(ty: &str) -> String {
    defaults::default_for(ty)
}

pub fn validate(source: &str) -> Validation {
    Validation::with_parser(&DslParser::new(), source)
}

pub fn compress(source: &str) -> String {
    lexer::compress(source)
}

pub fn expand(source: &str) -> String {
    lexer::expand(source)
}
