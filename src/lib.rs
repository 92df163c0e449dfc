//! # weave
//!
//! Parser, serializer and script emitter for the weave class-description DSL.
//!
//! A class description is a single line of `;`-separated sections
//! (`Cl'Player'CharacterBody2D'IMovable;sg'Died''`), parsed into a
//! [`dsl::ClassRecord`] and rendered back either as canonical DSL or as
//! GDScript source.
//!
//! ## Testing
//!
//! Record assertions live in the [testing module](dsl::testing).

pub mod config;
pub mod dsl;
pub mod logging;
