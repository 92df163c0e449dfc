//! Canonical DSL serialization
//!
//! Rebuilds DSL text from a record. The header comes first, always with an
//! explicit (possibly empty) parent field, followed by one section per
//! non-empty collection in a fixed order: constants, enums (one section
//! each), flags, current props, interface props, unique props, signals,
//! functions, components.
//!
//! Parsing the output yields the same record apart from its id. Legacy `cv`
//! sections come back as `up`, and source whitespace is not preserved.

use std::sync::Arc;

use super::registry::{FormatError, Formatter};
use crate::dsl::ast::{ClassRecord, Property};
use crate::dsl::defaults::{GodotDefaults, TypeDefaults};
use crate::dsl::sections::Tag;

#[derive(Clone)]
pub struct DslFormatter {
    defaults: Arc<dyn TypeDefaults>,
}

impl DslFormatter {
    pub fn new(defaults: Arc<dyn TypeDefaults>) -> Self {
        Self { defaults }
    }

    pub fn generate(&self, record: &ClassRecord) -> String {
        let mut sections = vec![format!(
            "{}'{}'{}'{}",
            Tag::Header.code(),
            record.name,
            record.parent.as_deref().unwrap_or_default(),
            record.interfaces.join(",")
        )];

        if !record.constants.is_empty() {
            sections.push(section(
                Tag::Constants,
                &[
                    join(&record.constants, |c| &c.name),
                    join(&record.constants, |c| &c.ty),
                    join(&record.constants, |c| &c.value),
                ],
            ));
        }

        for enum_def in &record.enums {
            sections.push(section(
                Tag::Enum,
                &[enum_def.name.clone(), enum_def.values.join(",")],
            ));
        }

        self.push_properties(&mut sections, Tag::Flags, &record.flags);
        self.push_properties(&mut sections, Tag::CurrentProps, &record.current_props);

        if !record.interface_props.is_empty() {
            let props = &record.interface_props;
            let mut columns = vec![join(props, |p| &p.name), join(props, |p| &p.ty)];
            if props.iter().any(|p| p.default.is_some()) {
                columns.push(
                    props
                        .iter()
                        .map(|p| p.default.as_deref().unwrap_or_default())
                        .collect::<Vec<_>>()
                        .join(","),
                );
            }
            sections.push(section(Tag::InterfaceProps, &columns));
        }

        self.push_properties(&mut sections, Tag::UniqueProps, &record.unique_props);

        if !record.signals.is_empty() {
            let signals = &record.signals;
            sections.push(section(
                Tag::Signals,
                &[
                    join(signals, |s| &s.name),
                    signals
                        .iter()
                        .map(|s| s.params.join(","))
                        .collect::<Vec<_>>()
                        .join("|"),
                ],
            ));
        }

        if !record.functions.is_empty() {
            let functions = &record.functions;
            let mut columns = vec![
                join(functions, |f| &f.name),
                join(functions, |f| &f.return_type),
            ];
            if functions.iter().any(|f| !f.params.is_empty()) {
                columns.push(
                    functions
                        .iter()
                        .map(|f| f.params.join(","))
                        .collect::<Vec<_>>()
                        .join("|"),
                );
            }
            sections.push(section(Tag::Functions, &columns));
        }

        if !record.components.is_empty() {
            sections.push(section(
                Tag::Components,
                &[
                    join(&record.components, |c| &c.name),
                    join(&record.components, |c| &c.ty),
                ],
            ));
        }

        sections.join(";")
    }

    /// Three-column property section; absent defaults come from the table
    fn push_properties(&self, sections: &mut Vec<String>, tag: Tag, props: &[Property]) {
        if props.is_empty() {
            return;
        }
        let defaults = props
            .iter()
            .map(|p| match &p.default {
                Some(default) => default.clone(),
                None => self.defaults.default_for(&p.ty),
            })
            .collect::<Vec<_>>()
            .join(",");
        sections.push(section(
            tag,
            &[join(props, |p| &p.name), join(props, |p| &p.ty), defaults],
        ));
    }
}

impl Default for DslFormatter {
    fn default() -> Self {
        Self::new(Arc::new(GodotDefaults))
    }
}

impl Formatter for DslFormatter {
    fn name(&self) -> &str {
        "dsl"
    }

    fn serialize(&self, record: &ClassRecord) -> Result<String, FormatError> {
        Ok(self.generate(record))
    }

    fn description(&self) -> &str {
        "Canonical single-line DSL"
    }
}

fn join<T>(items: &[T], field: impl Fn(&T) -> &String) -> String {
    items
        .iter()
        .map(|item| field(item).as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// `tag'column''column''...`
fn section(tag: Tag, columns: &[String]) -> String {
    format!("{}'{}", tag.code(), columns.join("''"))
}
