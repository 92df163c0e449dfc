//! Default-value table
//!
//! Maps a type name to the literal a freshly declared member of that type
//! starts with. The table is total: unknown types map to [`NULL_LITERAL`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Literal for "no value"
pub const NULL_LITERAL: &str = "null";

static GODOT_DEFAULTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("int", "0"),
        ("float", "0.0"),
        ("bool", "false"),
        ("String", "\"\""),
        ("Vector2", "Vector2.ZERO"),
        ("Vector3", "Vector3.ZERO"),
        ("Color", "Color.WHITE"),
        ("Array", "[]"),
        ("Dictionary", "{}"),
    ])
});

/// Source of default literals, injected into the parser and the DSL formatter
pub trait TypeDefaults: Send + Sync {
    /// Literal for `ty`. Must never fail.
    fn default_for(&self, ty: &str) -> String;
}

/// The built-in table for GDScript types
#[derive(Debug, Clone, Copy, Default)]
pub struct GodotDefaults;

impl TypeDefaults for GodotDefaults {
    fn default_for(&self, ty: &str) -> String {
        GODOT_DEFAULTS
            .get(ty)
            .copied()
            .unwrap_or(NULL_LITERAL)
            .to_string()
    }
}

/// Default literal for `ty` from the built-in table
pub fn default_for(ty: &str) -> String {
    GodotDefaults.default_for(ty)
}
