//! Field-list parsers, one per section tag
//!
//! Every tag shares one algorithm. The first column holds the names (after
//! the tag is cut off); each later column is a parallel list. Rows are driven
//! by the names: extra values in later columns are dropped, missing or empty
//! values fall back to a per-tag type or to the type-default table, and empty
//! names produce no row. None of this is an error; each drop is recorded as a
//! [`Diagnostic`].

use crate::dsl::ast::{ClassRecord, Component, Constant, EnumDef, Function, Property, Signal};
use crate::dsl::defaults::TypeDefaults;
use crate::dsl::error::Diagnostic;
use crate::dsl::sections::{Segment, Tag};

/// Fallback type when a row has no type entry
const UNTYPED: &str = "var";

/// Per-section parsing state
pub(super) struct FieldContext<'p> {
    pub index: usize,
    pub defaults: &'p dyn TypeDefaults,
    pub diagnostics: &'p mut Vec<Diagnostic>,
}

impl FieldContext<'_> {
    fn extra_values(&mut self, tag: Tag, column: usize, len: usize, names: usize) {
        if len > names {
            self.diagnostics.push(Diagnostic::ExtraValues {
                index: self.index,
                tag,
                column,
                dropped: len - names,
            });
        }
    }

    /// Call `f` for every non-empty name, reporting the empty ones
    fn named<'a>(&mut self, tag: Tag, names: &[&'a str], mut f: impl FnMut(usize, &'a str)) {
        for (row, name) in names.iter().enumerate() {
            if name.is_empty() {
                self.diagnostics.push(Diagnostic::EmptyName {
                    index: self.index,
                    tag,
                    row,
                });
                continue;
            }
            f(row, name);
        }
    }
}

/// A non-empty entry of a parallel column
fn cell<'a>(column: &[&'a str], row: usize) -> Option<&'a str> {
    column.get(row).copied().filter(|value| !value.is_empty())
}

/// Parse one tagged section into `record`
pub(super) fn apply(
    tag: Tag,
    section: &Segment<'_>,
    record: &mut ClassRecord,
    ctx: &mut FieldContext<'_>,
) {
    let columns = section.columns();
    if columns.len() < tag.min_columns() {
        ctx.diagnostics.push(Diagnostic::ShortSection {
            index: ctx.index,
            tag,
            columns: columns.len(),
            required: tag.min_columns(),
        });
        return;
    }

    let head = columns[0].strip_tag();
    let rest = &columns[1..];

    match tag {
        Tag::Header => {}
        Tag::LegacyVars => legacy_vars(&head, rest, record, ctx),
        Tag::Signals => signals(&head, rest, record, ctx),
        Tag::Functions => functions(&head, rest, record, ctx),
        Tag::Constants => constants(&head, rest, record, ctx),
        Tag::Enum => enum_def(&head, rest, record, ctx),
        Tag::Flags => properties(tag, "bool", &head, rest, &mut record.flags, ctx),
        Tag::CurrentProps => properties(tag, UNTYPED, &head, rest, &mut record.current_props, ctx),
        Tag::UniqueProps => properties(tag, UNTYPED, &head, rest, &mut record.unique_props, ctx),
        Tag::InterfaceProps => interface_props(&head, rest, record, ctx),
        Tag::Components => components(&head, rest, record, ctx),
    }
}

/// `cv'vars''types` folds into unique props. A row needs both a name and a type.
fn legacy_vars(
    head: &Segment<'_>,
    rest: &[Segment<'_>],
    record: &mut ClassRecord,
    ctx: &mut FieldContext<'_>,
) {
    let tag = Tag::LegacyVars;
    let names = head.items();
    let types = rest[0].items();
    ctx.extra_values(tag, 1, types.len(), names.len());

    let index = ctx.index;
    let defaults = ctx.defaults;
    let mut incomplete = Vec::new();
    ctx.named(tag, &names, |row, name| match cell(&types, row) {
        Some(ty) => record
            .unique_props
            .push(Property::new(name, ty).with_default(defaults.default_for(ty))),
        None => incomplete.push(row),
    });
    ctx.diagnostics.extend(
        incomplete
            .into_iter()
            .map(|row| Diagnostic::IncompleteRow { index, tag, row }),
    );
}

/// `sg'names''params|params` where each `|` group belongs to one signal
fn signals(
    head: &Segment<'_>,
    rest: &[Segment<'_>],
    record: &mut ClassRecord,
    ctx: &mut FieldContext<'_>,
) {
    let tag = Tag::Signals;
    let names = head.items();
    let groups = rest[0].groups();
    ctx.extra_values(tag, 1, groups.len(), names.len());

    ctx.named(tag, &names, |row, name| {
        let params = groups.get(row).cloned().unwrap_or_default();
        record.signals.push(Signal::new(name).with_params(params));
    });
}

/// `fn'names''returns` with an optional third column of `|`-grouped params
fn functions(
    head: &Segment<'_>,
    rest: &[Segment<'_>],
    record: &mut ClassRecord,
    ctx: &mut FieldContext<'_>,
) {
    let tag = Tag::Functions;
    let names = head.items();
    let returns = rest[0].items();
    let params = rest.get(1).map(|column| column.groups()).unwrap_or_default();
    ctx.extra_values(tag, 1, returns.len(), names.len());
    ctx.extra_values(tag, 2, params.len(), names.len());

    ctx.named(tag, &names, |row, name| {
        let return_type = cell(&returns, row).unwrap_or("void");
        let params = params.get(row).cloned().unwrap_or_default();
        record
            .functions
            .push(Function::declared(name, return_type).with_params(params));
    });
}

/// `cn'names''types''values`
fn constants(
    head: &Segment<'_>,
    rest: &[Segment<'_>],
    record: &mut ClassRecord,
    ctx: &mut FieldContext<'_>,
) {
    let tag = Tag::Constants;
    let names = head.items();
    let types = rest[0].items();
    let values = rest[1].items();
    ctx.extra_values(tag, 1, types.len(), names.len());
    ctx.extra_values(tag, 2, values.len(), names.len());

    let defaults = ctx.defaults;
    ctx.named(tag, &names, |row, name| {
        let ty = cell(&types, row).unwrap_or(UNTYPED);
        let value = cell(&values, row)
            .map(str::to_string)
            .unwrap_or_else(|| defaults.default_for(ty));
        record.constants.push(Constant::new(name, ty, value));
    });
}

/// `en'Name''A,B,C`, one enum per section. The whole first column is the name.
fn enum_def(
    head: &Segment<'_>,
    rest: &[Segment<'_>],
    record: &mut ClassRecord,
    ctx: &mut FieldContext<'_>,
) {
    let tag = Tag::Enum;
    let name = head.trimmed();
    let values: Vec<&str> = rest[0]
        .items()
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect();

    if name.is_empty() {
        ctx.diagnostics.push(Diagnostic::EmptyName {
            index: ctx.index,
            tag,
            row: 0,
        });
    } else if values.is_empty() {
        ctx.diagnostics.push(Diagnostic::IncompleteRow {
            index: ctx.index,
            tag,
            row: 0,
        });
    } else {
        record.enums.push(EnumDef::new(name, values));
    }
}

/// `fl`, `cp` and `up`: `names''types''defaults`
fn properties(
    tag: Tag,
    fallback_type: &str,
    head: &Segment<'_>,
    rest: &[Segment<'_>],
    target: &mut Vec<Property>,
    ctx: &mut FieldContext<'_>,
) {
    let names = head.items();
    let types = rest[0].items();
    let values = rest[1].items();
    ctx.extra_values(tag, 1, types.len(), names.len());
    ctx.extra_values(tag, 2, values.len(), names.len());

    let defaults = ctx.defaults;
    ctx.named(tag, &names, |row, name| {
        let ty = cell(&types, row).unwrap_or(fallback_type);
        let default = cell(&values, row)
            .map(str::to_string)
            .unwrap_or_else(|| defaults.default_for(ty));
        target.push(Property::new(name, ty).with_default(default));
    });
}

/// `ip'names''types` with an optional defaults column; empty means no default
fn interface_props(
    head: &Segment<'_>,
    rest: &[Segment<'_>],
    record: &mut ClassRecord,
    ctx: &mut FieldContext<'_>,
) {
    let tag = Tag::InterfaceProps;
    let names = head.items();
    let types = rest[0].items();
    let values = rest.get(1).map(|column| column.items()).unwrap_or_default();
    ctx.extra_values(tag, 1, types.len(), names.len());
    ctx.extra_values(tag, 2, values.len(), names.len());

    ctx.named(tag, &names, |row, name| {
        let ty = cell(&types, row).unwrap_or(UNTYPED);
        let mut prop = Property::new(name, ty);
        prop.default = cell(&values, row).map(str::to_string);
        record.interface_props.push(prop);
    });
}

/// `cm'names''types`
fn components(
    head: &Segment<'_>,
    rest: &[Segment<'_>],
    record: &mut ClassRecord,
    ctx: &mut FieldContext<'_>,
) {
    let tag = Tag::Components;
    let names = head.items();
    let types = rest[0].items();
    ctx.extra_values(tag, 1, types.len(), names.len());

    ctx.named(tag, &names, |row, name| {
        let ty = cell(&types, row).unwrap_or("Component");
        record.components.push(Component::new(name, ty));
    });
}
