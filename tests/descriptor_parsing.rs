use tristate::datatype::{Integer, Text};
use tristate::specialize::{parse_signature, IteratorOf, PairOf, Registry, Signature, Specialized};
use tristate::value::Value;
use tristate::TristateError;

#[test]
fn parses_concrete_and_single_argument_forms() {
    assert_eq!(parse_signature("String").unwrap(), Signature::concrete("String"));
    let it = parse_signature("Iterator of String").unwrap();
    assert_eq!(it.name(), "Iterator");
    assert_eq!(it.args(), &[Signature::concrete("String")]);
    assert_eq!(it, IteratorOf::<Text>::signature());
}

#[test]
fn parses_grouped_and_nested_arguments() {
    let pair = parse_signature("Pair of (String, Integer)").unwrap();
    assert_eq!(pair, PairOf::<Text, Integer>::signature());
    let nested = parse_signature("Iterator of Pair of (String, Integer)").unwrap();
    assert_eq!(nested, IteratorOf::<PairOf<Text, Integer>>::signature());
    let deep = parse_signature("Pair of (Iterator of Character, Pair of (String, Integer))").unwrap();
    assert_eq!(deep.args().len(), 2);
    assert_eq!(deep.args()[0].to_string(), "Iterator of Character");
}

#[test]
fn display_round_trips_through_the_parser() {
    for descriptor in [
        "Integer",
        "Iterator of String",
        "Pair of (String, Integer)",
        "Iterator of Pair of (String, Iterator of Character)",
    ] {
        let parsed = parse_signature(descriptor).unwrap();
        assert_eq!(parsed.to_string(), descriptor);
    }
}

#[test]
fn whitespace_is_insignificant() {
    let tight = parse_signature("Pair of(String,Integer)").unwrap();
    let loose = parse_signature("  Pair   of\n ( String ,\tInteger )  ").unwrap();
    assert_eq!(tight, loose);
}

#[test]
fn malformed_descriptors_report_position() {
    for bad in ["", "Iterator of", "Pair of (String,", "Pair of ()", "1Thing", "Iterator String"] {
        match parse_signature(bad) {
            Err(TristateError::Parse { line, col, .. }) => {
                assert_eq!(line, Some(1), "line for {bad:?}");
                assert!(col.is_some(), "column for {bad:?}");
            }
            other => panic!("expected a parse error for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn of_is_a_keyword_only_when_standalone() {
    let odd = parse_signature("Iterator of office").unwrap();
    assert_eq!(odd.args(), &[Signature::concrete("office")]);
}

#[test]
fn registry_resolves_descriptors() {
    let mut registry = Registry::new();
    let resolved = registry.resolve("Pair of (String, Integer)").unwrap();
    assert_eq!(resolved.name(), PairOf::<Text, Integer>::name());
    assert!(matches!(registry.resolve("Pair of"), Err(TristateError::Parse { .. })));
    assert!(matches!(registry.resolve("String"), Err(TristateError::Specialization(_))));
    assert_eq!(registry.len(), 1);
}
