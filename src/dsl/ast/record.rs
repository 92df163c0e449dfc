//! The class record and its naming-convention classification

use serde::{Deserialize, Serialize};
use std::fmt;

use super::members::{Component, Constant, EnumDef, Function, Property, PropertyGroup, Signal};

/// Classification of a record, inferred from its name when parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Interface,
    Component,
    Global,
    #[default]
    Normal,
}

impl ClassKind {
    /// Classify a class name by convention. First match wins:
    ///
    /// 1. `I` followed by an upper-case letter (`IMovable`) is an interface
    /// 2. a `Component` suffix is a component
    /// 3. a `Global` prefix is a global
    /// 4. anything else is normal
    ///
    /// `IGlobalComponent` is therefore an interface. The second character
    /// must be an upper-case letter, so `I_Foo` and `I2D` are not interfaces.
    pub fn infer(name: &str) -> ClassKind {
        let mut chars = name.chars();
        let interface_like =
            chars.next() == Some('I') && chars.next().is_some_and(char::is_uppercase);

        if interface_like {
            ClassKind::Interface
        } else if name.ends_with("Component") {
            ClassKind::Component
        } else if name.starts_with("Global") {
            ClassKind::Global
        } else {
            ClassKind::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Interface => "interface",
            ClassKind::Component => "component",
            ClassKind::Global => "global",
            ClassKind::Normal => "normal",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presentation hint carried for collaborators; never interpreted here
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One designed class or interface.
///
/// Every collection keeps declaration order. The `id` is assigned once at
/// creation and has no setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub signals: Vec<Signal>,
    #[serde(default)]
    pub constants: Vec<Constant>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    #[serde(default)]
    pub flags: Vec<Property>,
    #[serde(default)]
    pub current_props: Vec<Property>,
    #[serde(default)]
    pub interface_props: Vec<Property>,
    #[serde(default)]
    pub unique_props: Vec<Property>,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub position: Position,
}

impl ClassRecord {
    /// Minimal form: every collection starts empty
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: None,
            interfaces: Vec::new(),
            kind,
            signals: Vec::new(),
            constants: Vec::new(),
            enums: Vec::new(),
            flags: Vec::new(),
            current_props: Vec::new(),
            interface_props: Vec::new(),
            unique_props: Vec::new(),
            functions: Vec::new(),
            components: Vec::new(),
            position: Position::default(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_interfaces<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }

    pub fn properties(&self, group: PropertyGroup) -> &[Property] {
        match group {
            PropertyGroup::Flags => &self.flags,
            PropertyGroup::Current => &self.current_props,
            PropertyGroup::Interface => &self.interface_props,
            PropertyGroup::Unique => &self.unique_props,
        }
    }

    pub fn properties_mut(&mut self, group: PropertyGroup) -> &mut Vec<Property> {
        match group {
            PropertyGroup::Flags => &mut self.flags,
            PropertyGroup::Current => &mut self.current_props,
            PropertyGroup::Interface => &mut self.interface_props,
            PropertyGroup::Unique => &mut self.unique_props,
        }
    }

    /// Flags, current, interface and unique props, in that order
    pub fn all_properties(&self) -> impl Iterator<Item = &Property> {
        PropertyGroup::ALL
            .into_iter()
            .flat_map(move |group| self.properties(group).iter())
    }

    /// Field-by-field equality that ignores `id`
    pub fn eq_ignoring_id(&self, other: &ClassRecord) -> bool {
        self.name == other.name
            && self.parent == other.parent
            && self.interfaces == other.interfaces
            && self.kind == other.kind
            && self.signals == other.signals
            && self.constants == other.constants
            && self.enums == other.enums
            && self.flags == other.flags
            && self.current_props == other.current_props
            && self.interface_props == other.interface_props
            && self.unique_props == other.unique_props
            && self.functions == other.functions
            && self.components == other.components
            && self.position == other.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_inference() {
        assert_eq!(ClassKind::infer("IMovable"), ClassKind::Interface);
        assert_eq!(ClassKind::infer("HealthComponent"), ClassKind::Component);
        assert_eq!(ClassKind::infer("GlobalState"), ClassKind::Global);
        assert_eq!(ClassKind::infer("Player"), ClassKind::Normal);
        assert_eq!(ClassKind::infer("Item"), ClassKind::Normal);
        assert_eq!(ClassKind::infer("I_Foo"), ClassKind::Normal);
        assert_eq!(ClassKind::infer("I2D"), ClassKind::Normal);
    }

    #[test]
    fn test_kind_inference_first_match_wins() {
        assert_eq!(ClassKind::infer("IGlobalComponent"), ClassKind::Interface);
        assert_eq!(ClassKind::infer("GlobalComponent"), ClassKind::Component);
    }

    #[test]
    fn test_kind_inference_short_names() {
        assert_eq!(ClassKind::infer("I"), ClassKind::Normal);
        assert_eq!(ClassKind::infer(""), ClassKind::Normal);
        assert_eq!(ClassKind::infer("Component"), ClassKind::Component);
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = ClassRecord::new("dsl_1", "Player", ClassKind::Normal)
            .with_parent("CharacterBody2D")
            .with_interfaces(["IMovable"]);
        assert_eq!(record.id(), "dsl_1");
        assert_eq!(record.parent.as_deref(), Some("CharacterBody2D"));
        assert!(record.signals.is_empty());
        assert!(!record.has_components());
        assert_eq!(record.all_properties().count(), 0);
    }

    #[test]
    fn test_all_properties_order() {
        let mut record = ClassRecord::new("dsl_1", "Player", ClassKind::Normal);
        record.unique_props.push(Property::new("u", "int"));
        record.flags.push(Property::new("f", "bool"));
        record.interface_props.push(Property::new("i", "int"));
        record.current_props.push(Property::new("c", "int"));
        let names: Vec<_> = record.all_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["f", "c", "i", "u"]);
    }

    #[test]
    fn test_eq_ignoring_id() {
        let a = ClassRecord::new("dsl_1", "Player", ClassKind::Normal);
        let b = ClassRecord::new("dsl_2", "Player", ClassKind::Normal);
        assert_ne!(a, b);
        assert!(a.eq_ignoring_id(&b));
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let record = ClassRecord::new("dsl_1", "IMovable", ClassKind::Interface);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "interface");
        assert_eq!(json["currentProps"], serde_json::json!([]));
    }
}
