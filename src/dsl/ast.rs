//! Class-record types for the weave DSL
//!
//! A [`ClassRecord`] is the structured form of one class description. The
//! parser produces it from DSL text, collaborators may also build and edit it
//! directly, and the formatters render it back out.

pub mod members;
pub mod record;

pub use members::{Component, Constant, EnumDef, Function, Property, PropertyGroup, Signal};
pub use record::{ClassKind, ClassRecord, Position};
