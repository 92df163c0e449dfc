//! Property-based tests for the DSL round trip
//!
//! Records are generated in the form the parser itself produces (defaults
//! filled in, placeholder bodies, kind inferred from the name), so that
//! `parse(generate(r))` must give back `r` apart from its id.

use proptest::prelude::*;
use weave::dsl::ast::{
    ClassKind, ClassRecord, Component, Constant, EnumDef, Function, Property, Signal,
};
use weave::dsl::ids::SequentialIds;
use weave::dsl::{compress, expand, generate_dsl, DslParser, ParseError, Parsed};

/// Identifiers free of DSL delimiters and whitespace
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

fn type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("int".to_string()),
        Just("float".to_string()),
        Just("bool".to_string()),
        Just("String".to_string()),
        Just("Vector2".to_string()),
        Just("Color".to_string()),
        Just("Array".to_string()),
        "[A-Z][a-zA-Z0-9]{0,8}",
    ]
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,4}", "[0-9]{1,3}\\.[0-9]{1,2}", Just("null".to_string())]
}

fn class_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{1,8}",
        "I[A-Z][a-z]{1,6}",
        "[A-Z][a-z]{1,6}Component",
        "Global[A-Z][a-z]{1,6}",
    ]
}

fn params_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        (ident_strategy(), type_strategy()).prop_map(|(n, t)| format!("{n}:{t}")),
        0..3,
    )
}

fn property_strategy() -> impl Strategy<Value = Property> {
    (ident_strategy(), type_strategy(), value_strategy())
        .prop_map(|(name, ty, default)| Property::new(name, ty).with_default(default))
}

fn interface_property_strategy() -> impl Strategy<Value = Property> {
    (
        ident_strategy(),
        type_strategy(),
        prop::option::of(value_strategy()),
    )
        .prop_map(|(name, ty, default)| {
            let mut prop = Property::new(name, ty);
            prop.default = default;
            prop
        })
}

/// Arbitrary text built from DSL fragments, delimiters and whitespace, in any
/// order. Most of it is not well-formed DSL.
fn loose_source_strategy() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "Cl", "sg", "cn", "fn", "ip", "up", "en", "cv", "zz", "A", "Player", "int", "x:int", "7",
        "'", "''", ";", ",", "|", " ", "  ", "\n", "\t", " \n ",
    ]);
    (
        prop::bool::ANY,
        prop::collection::vec(fragment, 0..32),
    )
        .prop_map(|(with_header, parts)| {
            let body = parts.concat();
            if with_header {
                format!("Cl'A;{body}")
            } else {
                body
            }
        })
}

fn parse_fresh(source: &str) -> Result<Parsed, ParseError> {
    DslParser::new()
        .with_ids(SequentialIds::new("p"))
        .parse_with_diagnostics(source)
}

prop_compose! {
    fn record_strategy()(
        name in class_name_strategy(),
        parent in prop::option::of("[A-Z][a-zA-Z0-9]{0,8}"),
        interfaces in prop::collection::vec("I[A-Z][a-z]{1,6}", 0..3),
        constants in prop::collection::vec((ident_strategy(), type_strategy(), value_strategy()), 0..3),
        enums in prop::collection::vec((ident_strategy(), prop::collection::vec(ident_strategy(), 1..4)), 0..2),
        flags in prop::collection::vec(property_strategy(), 0..3),
        current_props in prop::collection::vec(property_strategy(), 0..3),
        interface_props in prop::collection::vec(interface_property_strategy(), 0..3),
        unique_props in prop::collection::vec(property_strategy(), 0..3),
        signals in prop::collection::vec((ident_strategy(), params_strategy()), 0..3),
        functions in prop::collection::vec((ident_strategy(), type_strategy(), params_strategy()), 0..3),
        components in prop::collection::vec((ident_strategy(), type_strategy()), 0..3),
    ) -> ClassRecord {
        let kind = ClassKind::infer(&name);
        let mut record = ClassRecord::new("gen", name, kind);
        record.parent = parent;
        record.interfaces = interfaces;
        record.constants = constants
            .into_iter()
            .map(|(n, t, v)| Constant::new(n, t, v))
            .collect();
        record.enums = enums
            .into_iter()
            .map(|(n, values)| EnumDef::new(n, values))
            .collect();
        record.flags = flags;
        record.current_props = current_props;
        record.interface_props = interface_props;
        record.unique_props = unique_props;
        record.signals = signals
            .into_iter()
            .map(|(n, params)| Signal::new(n).with_params(params))
            .collect();
        record.functions = functions
            .into_iter()
            .map(|(n, rt, params)| Function::declared(n, rt).with_params(params))
            .collect();
        record.components = components
            .into_iter()
            .map(|(n, t)| Component::new(n, t))
            .collect();
        record
    }
}

proptest! {
    #[test]
    fn test_generate_then_parse_round_trips(record in record_strategy()) {
        let parser = DslParser::new().with_ids(SequentialIds::default());
        let dsl = generate_dsl(&record);
        let parsed = parser.parse(&dsl).unwrap();
        prop_assert!(parsed.eq_ignoring_id(&record), "dsl: {}\nparsed: {:?}", dsl, parsed);
    }

    #[test]
    fn test_generated_dsl_is_stable(record in record_strategy()) {
        let parser = DslParser::new().with_ids(SequentialIds::default());
        let dsl = generate_dsl(&record);
        let again = generate_dsl(&parser.parse(&dsl).unwrap());
        prop_assert_eq!(dsl, again);
    }

    #[test]
    fn test_compress_is_idempotent(record in record_strategy()) {
        let once = compress(&generate_dsl(&record));
        prop_assert_eq!(compress(&once), once.clone());
    }

    #[test]
    fn test_compress_undoes_expand(record in record_strategy()) {
        let dsl = generate_dsl(&record);
        prop_assert_eq!(compress(&expand(&dsl)), dsl);
    }

    #[test]
    fn test_compress_is_idempotent_on_any_text(source in loose_source_strategy()) {
        let once = compress(&source);
        prop_assert_eq!(compress(&once), once.clone());
    }

    #[test]
    fn test_expand_adds_only_layout(source in loose_source_strategy()) {
        let compact = compress(&source);
        prop_assert_eq!(compress(&expand(&compact)), compact.clone());
        prop_assert_eq!(compress(&expand(&source)), compact);
    }

    #[test]
    fn test_layout_never_changes_the_parse(source in loose_source_strategy()) {
        let plain = parse_fresh(&source);
        prop_assert_eq!(&parse_fresh(&compress(&source)), &plain, "compressed: {:?}", source);
        prop_assert_eq!(&parse_fresh(&expand(&source)), &plain, "expanded: {:?}", source);
    }

    #[test]
    fn test_expanded_records_parse_back(record in record_strategy()) {
        let dsl = generate_dsl(&record);
        let parsed = parse_fresh(&expand(&dsl)).unwrap();
        prop_assert!(parsed.record.eq_ignoring_id(&record), "expanded: {}", expand(&dsl));
    }
}
