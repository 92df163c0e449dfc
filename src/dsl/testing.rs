//! Fluent assertions for parsed records
//!
//! Tests should check the whole shape of a record rather than counting
//! fields. `assert_record` walks the record with one builder per member
//! type, and every failure message names the path that failed
//! (`signals[1].params`, `unique_props[0].default`, ...).
//!
//! ```rust-example
//! use weave::dsl::{parse_class, testing::assert_record};
//! use weave::dsl::ast::{ClassKind, PropertyGroup};
//!
//! let record = parse_class("Cl'Player'Node2D';up'hp''int''100")?;
//! assert_record(&record)
//!     .name("Player")
//!     .kind(ClassKind::Normal)
//!     .parent(Some("Node2D"))
//!     .property_count(PropertyGroup::Unique, 1)
//!     .property(PropertyGroup::Unique, 0, |p| {
//!         p.name("hp").ty("int").default(Some("100"));
//!     });
//! ```

use crate::dsl::ast::{
    ClassKind, ClassRecord, Component, Constant, EnumDef, Function, Property, PropertyGroup,
    Signal,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a record
pub fn assert_record(record: &ClassRecord) -> RecordAssertion<'_> {
    RecordAssertion { record }
}

fn group_label(group: PropertyGroup) -> &'static str {
    match group {
        PropertyGroup::Flags => "flags",
        PropertyGroup::Current => "current_props",
        PropertyGroup::Interface => "interface_props",
        PropertyGroup::Unique => "unique_props",
    }
}

fn member<'a, T>(items: &'a [T], index: usize, label: &str) -> &'a T {
    assert!(
        index < items.len(),
        "{label}[{index}] out of bounds ({} entries)",
        items.len()
    );
    &items[index]
}

// ============================================================================
// Record Assertions
// ============================================================================

pub struct RecordAssertion<'a> {
    record: &'a ClassRecord,
}

impl<'a> RecordAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.record.name, expected, "record name mismatch");
        self
    }

    pub fn kind(self, expected: ClassKind) -> Self {
        assert_eq!(
            self.record.kind, expected,
            "record '{}' kind mismatch",
            self.record.name
        );
        self
    }

    pub fn parent(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.record.parent.as_deref(),
            expected,
            "record '{}' parent mismatch",
            self.record.name
        );
        self
    }

    pub fn interfaces(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.record.interfaces, expected,
            "record '{}' interfaces mismatch",
            self.record.name
        );
        self
    }

    pub fn signal_count(self, expected: usize) -> Self {
        assert_eq!(self.record.signals.len(), expected, "signal count mismatch");
        self
    }

    pub fn signal<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SignalAssertion<'a>),
    {
        let signal = member(&self.record.signals, index, "signals");
        assertion(SignalAssertion {
            signal,
            context: format!("signals[{index}]"),
        });
        self
    }

    pub fn constant_count(self, expected: usize) -> Self {
        assert_eq!(self.record.constants.len(), expected, "constant count mismatch");
        self
    }

    pub fn constant<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ConstantAssertion<'a>),
    {
        let constant = member(&self.record.constants, index, "constants");
        assertion(ConstantAssertion {
            constant,
            context: format!("constants[{index}]"),
        });
        self
    }

    pub fn enum_count(self, expected: usize) -> Self {
        assert_eq!(self.record.enums.len(), expected, "enum count mismatch");
        self
    }

    /// Check an enum's name and values in one step
    pub fn enum_def(self, index: usize, name: &str, values: &[&str]) -> Self {
        let enum_def: &EnumDef = member(&self.record.enums, index, "enums");
        assert_eq!(enum_def.name, name, "enums[{index}].name mismatch");
        assert_eq!(enum_def.values, values, "enums[{index}].values mismatch");
        self
    }

    pub fn property_count(self, group: PropertyGroup, expected: usize) -> Self {
        assert_eq!(
            self.record.properties(group).len(),
            expected,
            "{} count mismatch",
            group_label(group)
        );
        self
    }

    pub fn property<F>(self, group: PropertyGroup, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PropertyAssertion<'a>),
    {
        let label = group_label(group);
        let property = member(self.record.properties(group), index, label);
        assertion(PropertyAssertion {
            property,
            context: format!("{label}[{index}]"),
        });
        self
    }

    pub fn function_count(self, expected: usize) -> Self {
        assert_eq!(self.record.functions.len(), expected, "function count mismatch");
        self
    }

    pub fn function<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(FunctionAssertion<'a>),
    {
        let function = member(&self.record.functions, index, "functions");
        assertion(FunctionAssertion {
            function,
            context: format!("functions[{index}]"),
        });
        self
    }

    pub fn component_count(self, expected: usize) -> Self {
        assert_eq!(self.record.components.len(), expected, "component count mismatch");
        self
    }

    /// Check a component's name and type in one step
    pub fn component(self, index: usize, name: &str, ty: &str) -> Self {
        let component: &Component = member(&self.record.components, index, "components");
        assert_eq!(component.name, name, "components[{index}].name mismatch");
        assert_eq!(component.ty, ty, "components[{index}].ty mismatch");
        self
    }

    /// Nothing declared beyond the header
    pub fn is_bare(self) -> Self {
        let r = self.record;
        assert!(
            r.signals.is_empty()
                && r.constants.is_empty()
                && r.enums.is_empty()
                && r.all_properties().next().is_none()
                && r.functions.is_empty()
                && r.components.is_empty(),
            "record '{}' is not bare: {:?}",
            r.name,
            r
        );
        self
    }
}

// ============================================================================
// Member Assertions
// ============================================================================

pub struct SignalAssertion<'a> {
    signal: &'a Signal,
    context: String,
}

impl SignalAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.signal.name, expected, "{}.name mismatch", self.context);
        self
    }

    pub fn params(self, expected: &[&str]) -> Self {
        assert_eq!(self.signal.params, expected, "{}.params mismatch", self.context);
        self
    }
}

pub struct ConstantAssertion<'a> {
    constant: &'a Constant,
    context: String,
}

impl ConstantAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.constant.name, expected, "{}.name mismatch", self.context);
        self
    }

    pub fn ty(self, expected: &str) -> Self {
        assert_eq!(self.constant.ty, expected, "{}.ty mismatch", self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_eq!(self.constant.value, expected, "{}.value mismatch", self.context);
        self
    }
}

pub struct PropertyAssertion<'a> {
    property: &'a Property,
    context: String,
}

impl PropertyAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.property.name, expected, "{}.name mismatch", self.context);
        self
    }

    pub fn ty(self, expected: &str) -> Self {
        assert_eq!(self.property.ty, expected, "{}.ty mismatch", self.context);
        self
    }

    pub fn default(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.property.default.as_deref(),
            expected,
            "{}.default mismatch",
            self.context
        );
        self
    }
}

pub struct FunctionAssertion<'a> {
    function: &'a Function,
    context: String,
}

impl FunctionAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.function.name, expected, "{}.name mismatch", self.context);
        self
    }

    pub fn return_type(self, expected: &str) -> Self {
        assert_eq!(
            self.function.return_type, expected,
            "{}.return_type mismatch",
            self.context
        );
        self
    }

    pub fn params(self, expected: &[&str]) -> Self {
        assert_eq!(self.function.params, expected, "{}.params mismatch", self.context);
        self
    }

    pub fn body(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.function.body.as_deref(),
            expected,
            "{}.body mismatch",
            self.context
        );
        self
    }

    /// The body parsing stores when the DSL carries none
    pub fn has_placeholder_body(self) -> Self {
        let expected = Function::placeholder_body(&self.function.name);
        assert_eq!(
            self.function.body.as_deref(),
            Some(expected.as_str()),
            "{}.body is not the placeholder",
            self.context
        );
        self
    }
}
