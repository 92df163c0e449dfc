//! Output format implementations for class records
//!
//! This module contains the renderings of a [`ClassRecord`](crate::dsl::ClassRecord):
//! - `dsl`: canonical DSL text, the inverse of the parser
//! - `gdscript`: a class script
//! - `autoload`: an autoload singleton script for global classes
//! - `json`: the record itself, for collaborators

pub mod autoload;
pub mod dsl;
pub mod gdscript;
pub mod json;
pub mod registry;

pub use autoload::AutoloadFormatter;
pub use dsl::DslFormatter;
pub use gdscript::GdscriptFormatter;
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
